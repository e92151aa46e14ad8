//! Splits a decoded HTTP/1.x request into a header block and a parameter block.
//!
//! The message is parsed as a request would be on the wire: request line,
//! header section (with obsolete line folding undone), then a body framed by
//! `Transfer-Encoding` or `Content-Length`. Headers are flattened one line per
//! occurrence. Form parameters from the body and the query string are
//! re-encoded into a single `application/x-www-form-urlencoded` string.

mod body;
mod error;
mod form;
mod head;
mod headers;
mod split;
mod target;

pub use error::*;
pub use form::*;
pub use headers::canonical_header_name;
pub use split::*;
