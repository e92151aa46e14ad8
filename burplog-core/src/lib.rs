pub mod cli;
pub mod config;
pub mod decode;
pub mod envelope;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod request;
