use crate::record::{DecodedFields, OutputRecord, RawRecord};
use crate::request::SplitRequest;

/// Stands in for a missing declared MIME type.
pub const UNKNOWN_MIME: &str = "UNKNOWN";

/// Assembles the output record. Metadata passes through untouched; the MIME
/// type is defaulted and upper-cased.
pub fn normalize(raw: &RawRecord, decoded: DecodedFields, split: &SplitRequest) -> OutputRecord {
    OutputRecord {
        time: raw.time.clone(),
        url: decoded.url,
        host: raw.host.clone(),
        port: raw.port,
        protocol: raw.protocol.clone(),
        method: raw.method.clone(),
        path: raw.path.clone(),
        request: decoded.request,
        status: raw.status,
        response_length: raw.response_length,
        mime_type: normalize_mime(&raw.mime_type),
        response: decoded.response,
        headers: split.header_block(),
        params: split.param_block(),
    }
}

pub fn normalize_mime(mime: &str) -> String {
    if mime.is_empty() {
        UNKNOWN_MIME.to_string()
    } else {
        mime.to_uppercase()
    }
}
