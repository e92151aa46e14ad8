mod error;
mod writer;

pub use error::*;
pub use writer::*;
