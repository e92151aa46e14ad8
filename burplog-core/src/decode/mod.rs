//! Transport-layer decoding of raw record fields.
//!
//! Session exports carry the request and response as base64 and the URL
//! percent-encoded. Both decoders fail instead of guessing: an undecodable
//! field means the record is skipped upstream.

mod binary;
mod error;
mod url;

pub use binary::*;
pub use error::*;
pub use url::*;
