//! Per-record decode-and-transform pipeline.
//!
//! The overall data flow is:
//!
//! RawRecord
//! decode request / decode response
//! split request
//! decode URL
//! normalize
//! OutputRecord → RecordWriter
//!
//! The first failing step skips the record. Skips are counted in
//! [`RunStats`] and never reach the writer.

mod driver;
mod error;
mod stats;
#[cfg(test)]
mod tests;

pub use driver::*;
pub use error::*;
pub use stats::*;
