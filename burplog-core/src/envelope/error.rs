use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("failed to open session log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read session log: {0}")]
    Read(#[source] std::io::Error),

    #[error("session log is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("malformed session log: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("expected <items> as the root element, found <{found}>")]
    UnexpectedRoot { found: String },

    #[error("item {index}: invalid {field} {value:?}")]
    InvalidNumber {
        index: usize,
        field: &'static str,
        value: String,
    },
}

impl EnvelopeError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
