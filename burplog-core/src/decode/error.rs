use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid URL escape {escape:?} at byte {offset}")]
    InvalidEscape { escape: String, offset: usize },

    #[error("empty payload")]
    EmptyPayload,

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("binary payload (leading byte 0x{byte:02x})")]
    BinaryPayload { byte: u8 },
}
