use crate::request::ParseError;
use crate::request::headers::canonical_header_name;
use http::{Method, Version};

const INITIAL_HEADER_CAPACITY: usize = 64;
const MAX_HEADER_CAPACITY: usize = 4096;

/// Request line and header section of a parsed request.
#[derive(Debug)]
pub(crate) struct RequestHead {
    pub method: Method,
    pub target: String,
    pub version: Version,
    /// Canonical name and trimmed value per occurrence, in message order.
    pub headers: Vec<(String, String)>,
}

impl RequestHead {
    /// Values of every occurrence of `name` (canonical form), in order.
    pub fn values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.headers
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn first<'a>(&'a self, name: &str) -> Option<&'a str> {
        self.values(name).next()
    }
}

/// Parses the head of `input` and returns it with the bytes that follow it.
pub(crate) fn parse_head(input: &[u8]) -> Result<(RequestHead, &[u8]), ParseError> {
    let (lines, rest) = split_head(input)?;
    let unfolded = unfold(&lines)?;
    let head = parse_unfolded(&unfolded)?;

    Ok((head, rest))
}

/// Cuts `input` after the first empty line. Returns the head lines (without
/// terminators) and the remaining bytes.
fn split_head(input: &[u8]) -> Result<(Vec<&[u8]>, &[u8]), ParseError> {
    let mut lines = Vec::new();
    let mut pos = 0;

    loop {
        let Some(nl) = input[pos..].iter().position(|&b| b == b'\n') else {
            return Err(ParseError::TruncatedHead);
        };

        let line = strip_cr(&input[pos..pos + nl]);
        pos += nl + 1;

        if line.is_empty() {
            if lines.is_empty() {
                return Err(ParseError::MissingRequestLine);
            }
            return Ok((lines, &input[pos..]));
        }

        lines.push(line);
    }
}

/// Joins obsolete folded continuation lines onto the header they continue and
/// re-terminates every line with CRLF.
fn unfold(lines: &[&[u8]]) -> Result<Vec<u8>, ParseError> {
    let mut logical: Vec<Vec<u8>> = Vec::with_capacity(lines.len());

    for line in lines {
        if !logical.is_empty() && starts_with_whitespace(line) {
            // the request line cannot be continued
            if logical.len() == 1 {
                return Err(ParseError::LeadingContinuation);
            }

            if let Some(prev) = logical.last_mut() {
                let keep = trim_end(prev).len();
                prev.truncate(keep);
                prev.push(b' ');
                prev.extend_from_slice(trim_start(line));
            }
            continue;
        }

        logical.push(line.to_vec());
    }

    let mut out = logical.join(&b"\r\n"[..]);
    out.extend_from_slice(b"\r\n\r\n");
    Ok(out)
}

fn parse_unfolded(head: &[u8]) -> Result<RequestHead, ParseError> {
    let mut capacity = INITIAL_HEADER_CAPACITY;

    loop {
        let mut slots = vec![httparse::EMPTY_HEADER; capacity];
        let mut req = httparse::Request::new(&mut slots);

        match req.parse(head) {
            Ok(httparse::Status::Complete(_)) => return build_head(&req),
            Ok(httparse::Status::Partial) => return Err(ParseError::TruncatedHead),
            Err(httparse::Error::TooManyHeaders) if capacity < MAX_HEADER_CAPACITY => {
                capacity *= 2;
            }
            Err(e) => return Err(ParseError::MalformedHead(e)),
        }
    }
}

fn build_head(req: &httparse::Request<'_, '_>) -> Result<RequestHead, ParseError> {
    let method = req.method.unwrap_or_default();
    let method = Method::from_bytes(method.as_bytes())
        .map_err(|_| ParseError::InvalidMethod(method.to_string()))?;

    let version = match req.version {
        Some(0) => Version::HTTP_10,
        _ => Version::HTTP_11,
    };

    let headers = req
        .headers
        .iter()
        .map(|h| {
            let value = String::from_utf8_lossy(h.value);
            (
                canonical_header_name(h.name),
                value.trim_matches([' ', '\t']).to_string(),
            )
        })
        .collect();

    Ok(RequestHead {
        method,
        target: req.path.unwrap_or_default().to_string(),
        version,
        headers,
    })
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn starts_with_whitespace(line: &[u8]) -> bool {
    matches!(line.first(), Some(&(b' ' | b'\t')))
}

fn trim_start(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|&b| !matches!(b, b' ' | b'\t'))
        .unwrap_or(line.len());
    &line[start..]
}

fn trim_end(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| !matches!(b, b' ' | b'\t'))
        .map_or(0, |i| i + 1);
    &line[..end]
}
