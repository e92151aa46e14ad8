mod args;
mod convert;
mod error;

pub use args::*;
pub use convert::*;
pub use error::*;
