//! Reading the session export that wraps the captured records.
//!
//! The export is an XML document:
//!
//! ```xml
//! <items burpVersion="..." exportTime="...">
//!   <item>
//!     <time>...</time>
//!     <url><![CDATA[...]]></url>
//!     <host ip="...">...</host>
//!     ...
//!     <request base64="true"><![CDATA[...]]></request>
//!     ...
//!   </item>
//! </items>
//! ```
//!
//! Any failure here is fatal for the whole run.

mod error;
mod parse;
#[cfg(test)]
mod tests;
mod types;

pub use error::*;
pub use parse::*;
