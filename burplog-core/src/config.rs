use crate::envelope::EnvelopeError;
use crate::logging::{OutputStyle, default_output_style};
use crate::output::OutputError;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Where the session export is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` mean standard input.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }

    pub fn open(&self) -> Result<Box<dyn Read>, EnvelopeError> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => File::open(path)
                .map(|f| Box::new(f) as Box<dyn Read>)
                .map_err(|e| EnvelopeError::open(path, e)),
        }
    }
}

/// Where converted records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => OutputTarget::File(path),
            _ => OutputTarget::Stdout,
        }
    }

    pub fn create(&self) -> Result<Box<dyn Write>, OutputError> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputTarget::File(path) => File::create(path)
                .map(|f| Box::new(f) as Box<dyn Write>)
                .map_err(|source| OutputError::Create {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

/// Everything a conversion run needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: InputSource,
    pub output: OutputTarget,
    pub style: OutputStyle,
}

impl RunConfig {
    /// An explicit style wins. Otherwise files get JSON Lines and stdout
    /// depends on whether it is a terminal.
    pub fn new(input: InputSource, output: OutputTarget, style: Option<OutputStyle>) -> Self {
        let style = style.unwrap_or_else(|| match output {
            OutputTarget::File(_) => OutputStyle::Lines,
            OutputTarget::Stdout => default_output_style(),
        });

        Self {
            input,
            output,
            style,
        }
    }
}
