use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Items {
    #[serde(rename = "item", default)]
    pub items: Vec<Item>,
}

/// Every field is optional; a missing element reads as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Item {
    pub time: Text,
    pub url: Text,
    pub host: Text,
    pub port: Text,
    pub protocol: Text,
    pub method: Text,
    pub path: Text,
    pub extension: Text,
    pub request: Text,
    pub status: Text,
    #[serde(rename = "responselength")]
    pub response_length: Text,
    #[serde(rename = "mimetype")]
    pub mime_type: Text,
    pub response: Text,
    pub comment: Text,
}

/// Text content of an element. Attributes such as `ip` or `base64` are
/// ignored. Surrounding whitespace of plain text is trimmed; CDATA content
/// is kept as written.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Text {
    #[serde(rename = "$text", default)]
    pub value: String,
}
