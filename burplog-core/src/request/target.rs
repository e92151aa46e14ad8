use crate::decode::validate_escapes;
use crate::request::ParseError;
use http::Method;

/// Validates a request target and returns its query component (empty when
/// there is none).
///
/// Accepted forms: `*`, origin-form (`/path?query`), absolute-form
/// (`scheme:/...`) and, for `CONNECT` only, authority-form (`host:port`).
pub(crate) fn request_query<'a>(method: &Method, target: &'a str) -> Result<&'a str, ParseError> {
    let invalid = || ParseError::InvalidTarget(target.to_string());

    if target.bytes().any(|b| b < 0x20 || b == 0x7f) {
        return Err(invalid());
    }

    if target == "*" {
        return Ok("");
    }

    if *method == Method::CONNECT && !target.starts_with('/') {
        return if target.is_empty() || target.contains(['/', '?']) {
            Err(invalid())
        } else {
            Ok("")
        };
    }

    let (path, query) = target.split_once('?').unwrap_or((target, ""));

    if !path.starts_with('/') && !has_scheme(path) {
        return Err(invalid());
    }

    validate_escapes(path).map_err(|_| invalid())?;

    Ok(query)
}

/// `scheme ":" "/" ...` where scheme is a letter followed by letters, digits,
/// `+`, `-` or `.`.
fn has_scheme(path: &str) -> bool {
    let Some((scheme, rest)) = path.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());

    starts_alpha
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && rest.starts_with('/')
}
