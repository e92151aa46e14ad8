use crate::decode::DecodeError;
use crate::request::ParseError;
use thiserror::Error;

/// Why a single record was skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("request payload: {0}")]
    Request(#[source] DecodeError),

    #[error("response payload: {0}")]
    Response(#[source] DecodeError),

    #[error("request message: {0}")]
    Split(#[from] ParseError),

    #[error("url: {0}")]
    Url(#[source] DecodeError),
}

impl RecordError {
    /// Pipeline step that failed.
    pub fn step(&self) -> &'static str {
        match self {
            Self::Request(_) => "request",
            Self::Response(_) => "response",
            Self::Split(_) => "split",
            Self::Url(_) => "url",
        }
    }
}
