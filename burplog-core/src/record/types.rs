use serde::Serialize;

/// One captured transaction as it appears in the session export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub time: String,
    /// Percent-encoded.
    pub url: String,
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub method: String,
    pub path: String,
    pub extension: String,
    /// Base64.
    pub request: String,
    pub status: u16,
    pub response_length: u64,
    /// Possibly empty.
    pub mime_type: String,
    /// Base64.
    pub response: String,
    pub comment: String,
}

/// Plaintext fields decoded from one [`RawRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFields {
    pub url: String,
    pub request: String,
    pub response: String,
}

/// The normalized record handed to the output writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub time: String,
    pub url: String,
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub method: String,
    pub path: String,
    pub request: String,
    pub status: u16,
    #[serde(rename = "responselength")]
    pub response_length: u64,
    #[serde(rename = "mimetype")]
    pub mime_type: String,
    pub response: String,
    pub headers: String,
    pub params: String,
}
