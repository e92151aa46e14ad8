use crate::decode::decode_url_field;
use crate::request::ParseError;
use crate::request::headers::is_token_byte;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything but the unreserved set is escaped in form keys and values.
const FORM_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Ordered form key/value pairs. Duplicate keys are kept as separate pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    pairs: Vec<(String, String)>,
}

impl FormParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Parses `k=v&k2=v2` form syntax.
    ///
    /// Empty segments are skipped, a segment without `=` is a key with an
    /// empty value, and keys and values are unescaped (`+` is a space). A
    /// `;` anywhere in a segment is rejected rather than treated as a
    /// separator.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut pairs = Vec::new();

        for segment in input.split('&') {
            if segment.contains(';') {
                return Err(ParseError::SemicolonSeparator);
            }
            if segment.is_empty() {
                continue;
            }

            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            pairs.push((decode_url_field(key)?, decode_url_field(value)?));
        }

        Ok(Self { pairs })
    }

    pub fn extend(&mut self, other: FormParams) {
        self.pairs.extend(other.pairs);
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Re-encodes the pairs in order, spaces as `+`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", escape(k), escape(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn escape(input: &str) -> String {
    // '+' itself is escaped as %2B, so this cannot collide
    utf8_percent_encode(input, FORM_ESCAPE)
        .to_string()
        .replace("%20", "+")
}

/// Lower-cased media type of a `Content-Type` value, parameters dropped.
///
/// The type must be `token/token` and every parameter must be `name=value`.
pub(crate) fn media_type(content_type: &str) -> Result<String, ParseError> {
    let invalid = || ParseError::InvalidContentType(content_type.to_string());

    let mut parts = content_type.split(';');
    let essence = parts.next().unwrap_or_default().trim();

    let well_formed = essence
        .split_once('/')
        .is_some_and(|(ty, sub)| is_token(ty) && is_token(sub));
    if !well_formed {
        return Err(invalid());
    }

    for param in parts.map(str::trim).filter(|p| !p.is_empty()) {
        match param.split_once('=') {
            Some((name, _value)) if is_token(name.trim()) => {}
            _ => return Err(invalid()),
        }
    }

    Ok(essence.to_ascii_lowercase())
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_token_byte)
}
