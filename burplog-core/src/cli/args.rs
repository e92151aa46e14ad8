use crate::config::{InputSource, OutputTarget, RunConfig};
use crate::logging::OutputStyle;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Session export to convert (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Write records to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tab-indented JSON documents
    #[arg(long, conflicts_with = "compact")]
    pub pretty: bool,

    /// One JSON document per line
    #[arg(long)]
    pub compact: bool,
}

impl ConvertArgs {
    pub fn into_config(self) -> RunConfig {
        let style = if self.pretty {
            Some(OutputStyle::Pretty)
        } else if self.compact {
            Some(OutputStyle::Lines)
        } else {
            None
        };

        RunConfig::new(
            InputSource::from_arg(self.input),
            OutputTarget::from_arg(self.output),
            style,
        )
    }
}
