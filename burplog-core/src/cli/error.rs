use crate::envelope::EnvelopeError;
use crate::output::OutputError;
use thiserror::Error;

/// Failures that end a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
