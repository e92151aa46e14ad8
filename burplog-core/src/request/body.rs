use crate::request::{ParseError, canonical_header_name};
use crate::request::head::RequestHead;
use http::Version;
use http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};

/// How the bytes after the head make up the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyFraming {
    /// No framing headers: a request without them has no body.
    Empty,
    Length(u64),
    Chunked,
}

impl BodyFraming {
    /// Derives the framing from the head. Invalid or unsupported framing is
    /// an error even if the body is never read.
    pub fn from_head(head: &RequestHead) -> Result<Self, ParseError> {
        let te = canonical_header_name(TRANSFER_ENCODING.as_str());
        let encodings: Vec<&str> = head.values(&te).collect();

        // HTTP/1.0 has no transfer codings
        if !encodings.is_empty() && head.version != Version::HTTP_10 {
            return match encodings.as_slice() {
                [only] if only.eq_ignore_ascii_case("chunked") => Ok(BodyFraming::Chunked),
                _ => Err(ParseError::UnsupportedTransferEncoding(encodings.join(", "))),
            };
        }

        let cl = canonical_header_name(CONTENT_LENGTH.as_str());
        let mut lengths = head.values(&cl);

        let Some(first) = lengths.next() else {
            return Ok(BodyFraming::Empty);
        };

        if lengths.any(|other| other != first) {
            return Err(ParseError::ConflictingContentLength);
        }

        if first.is_empty() {
            return Ok(BodyFraming::Empty);
        }

        if !first.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidContentLength(first.to_string()));
        }

        match first.parse::<u64>() {
            Ok(0) => Ok(BodyFraming::Empty),
            Ok(n) => Ok(BodyFraming::Length(n)),
            Err(_) => Err(ParseError::InvalidContentLength(first.to_string())),
        }
    }

    /// Extracts the body from the bytes that follow the head.
    pub fn read(self, rest: &[u8]) -> Result<Vec<u8>, ParseError> {
        match self {
            BodyFraming::Empty => Ok(Vec::new()),
            BodyFraming::Length(n) => match usize::try_from(n) {
                Ok(len) if len <= rest.len() => Ok(rest[..len].to_vec()),
                _ => Err(ParseError::TruncatedBody {
                    expected: n,
                    actual: rest.len(),
                }),
            },
            BodyFraming::Chunked => read_chunked(rest),
        }
    }
}

/// Decodes a chunked body. Chunk extensions and trailers are dropped, but the
/// trailer section must end with an empty line. Both CRLF and bare LF are
/// accepted as line terminators.
fn read_chunked(mut rest: &[u8]) -> Result<Vec<u8>, ParseError> {
    let mut body = Vec::new();

    loop {
        let Some(nl) = rest.iter().position(|&b| b == b'\n') else {
            return Err(ParseError::TruncatedChunk);
        };

        let line = String::from_utf8_lossy(&rest[..nl]);
        rest = &rest[nl + 1..];

        let size = parse_chunk_size(&line)?;
        if size == 0 {
            skip_trailers(rest)?;
            return Ok(body);
        }

        if rest.len() < size {
            return Err(ParseError::TruncatedChunk);
        }
        body.extend_from_slice(&rest[..size]);
        rest = &rest[size..];

        rest = if let Some(r) = rest.strip_prefix(b"\r\n") {
            r
        } else if let Some(r) = rest.strip_prefix(b"\n") {
            r
        } else if rest.is_empty() {
            return Err(ParseError::TruncatedChunk);
        } else {
            return Err(ParseError::MalformedChunk(line.into_owned()));
        };
    }
}

fn skip_trailers(mut rest: &[u8]) -> Result<(), ParseError> {
    loop {
        let Some(nl) = rest.iter().position(|&b| b == b'\n') else {
            return Err(ParseError::TruncatedChunk);
        };

        let line = &rest[..nl];
        if line.is_empty() || line == b"\r" {
            return Ok(());
        }
        rest = &rest[nl + 1..];
    }
}

fn parse_chunk_size(line: &str) -> Result<usize, ParseError> {
    let size = line
        .split_once(';')
        .map_or(line, |(size, _ext)| size)
        .trim_matches([' ', '\t', '\r']);

    if size.is_empty() || size.len() > 16 || !size.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::MalformedChunk(line.trim_end().to_string()));
    }

    usize::from_str_radix(size, 16).map_err(|_| ParseError::MalformedChunk(line.to_string()))
}
