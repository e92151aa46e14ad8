use crate::decode::DecodeError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    // Head
    #[error("request line missing")]
    MissingRequestLine,

    #[error("request head is not terminated by an empty line")]
    TruncatedHead,

    #[error("continuation line before the first header")]
    LeadingContinuation,

    #[error("malformed request head: {0}")]
    MalformedHead(#[from] httparse::Error),

    #[error("invalid method {0:?}")]
    InvalidMethod(String),

    #[error("invalid request target {0:?}")]
    InvalidTarget(String),

    // Framing
    #[error("unsupported transfer encoding {0:?}")]
    UnsupportedTransferEncoding(String),

    #[error("invalid content length {0:?}")]
    InvalidContentLength(String),

    #[error("conflicting content length headers")]
    ConflictingContentLength,

    #[error("body truncated: expected {expected} bytes, got {actual}")]
    TruncatedBody { expected: u64, actual: usize },

    #[error("malformed chunk size line {0:?}")]
    MalformedChunk(String),

    #[error("chunked body ends before the terminating chunk")]
    TruncatedChunk,

    // Form
    #[error("invalid content type {0:?}")]
    InvalidContentType(String),

    #[error("form body too large ({size} bytes)")]
    FormTooLarge { size: usize },

    #[error("invalid semicolon separator in form")]
    SemicolonSeparator,

    #[error("invalid form escape: {0}")]
    InvalidFormEscape(#[from] DecodeError),
}
