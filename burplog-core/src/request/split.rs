use crate::request::body::BodyFraming;
use crate::request::form::{FORM_MEDIA_TYPE, media_type};
use crate::request::head::{RequestHead, parse_head};
use crate::request::headers::flatten_headers;
use crate::request::target::request_query;
use crate::request::{FormParams, ParseError, canonical_header_name};
use http::Method;
use http::header::CONTENT_TYPE;

/// Upper bound on a form body, matching common server defaults.
pub const MAX_FORM_BODY: usize = 10 << 20;

/// Header lines and form parameters of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRequest {
    header_lines: Vec<String>,
    params: FormParams,
}

impl SplitRequest {
    /// `Name: Value` lines joined with `\n`.
    pub fn header_block(&self) -> String {
        self.header_lines.join("\n")
    }

    /// Form-encoded parameters; empty when the request has none.
    pub fn param_block(&self) -> String {
        self.params.encode()
    }
}

/// Parses `request` as an HTTP/1.x request and splits it into headers and
/// parameters.
///
/// Parameters are the url-encoded body pairs (for `POST`, `PUT` and `PATCH`
/// only) followed by the query string pairs.
pub fn split_request(request: &str) -> Result<SplitRequest, ParseError> {
    let (head, rest) = parse_head(request.as_bytes())?;
    let framing = BodyFraming::from_head(&head)?;

    let mut params = body_params(&head, framing, rest)?;
    params.extend(FormParams::parse(request_query(&head.method, &head.target)?)?);

    Ok(SplitRequest {
        header_lines: flatten_headers(&head.headers),
        params,
    })
}

fn body_params(
    head: &RequestHead,
    framing: BodyFraming,
    rest: &[u8],
) -> Result<FormParams, ParseError> {
    if ![Method::POST, Method::PUT, Method::PATCH].contains(&head.method) {
        return Ok(FormParams::default());
    }

    let content_type = head
        .first(&canonical_header_name(CONTENT_TYPE.as_str()))
        .filter(|ct| !ct.is_empty())
        .unwrap_or("application/octet-stream");

    if media_type(content_type)? != FORM_MEDIA_TYPE {
        return Ok(FormParams::default());
    }

    let body = framing.read(rest)?;
    if body.len() > MAX_FORM_BODY {
        return Err(ParseError::FormTooLarge { size: body.len() });
    }

    FormParams::parse(&String::from_utf8_lossy(&body))
}
