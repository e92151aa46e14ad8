use crate::cli::ConvertError;
use crate::config::RunConfig;
use crate::envelope::read_envelope;
use crate::logging::OutputStyle;
use crate::output::JsonRecordWriter;
use crate::pipeline::{RunStats, run_pipeline};
use crate::record::RawRecord;
use std::io::{Read, Write};

/// Converts the configured input into the configured output.
///
/// The envelope is parsed in full before any record is written, so a
/// malformed export produces no output at all.
pub fn run_convert(config: &RunConfig) -> Result<RunStats, ConvertError> {
    let input = config.input.open()?;
    let records = read_envelope(input)?;

    let output = config.output.create()?;
    let stats = convert_records(records, output, config.style)?;

    tracing::info!(
        read = stats.read,
        emitted = stats.emitted,
        skipped = stats.skipped(),
        skipped_request = stats.skipped_request,
        skipped_response = stats.skipped_response,
        skipped_split = stats.skipped_split,
        skipped_url = stats.skipped_url,
        "conversion finished"
    );

    Ok(stats)
}

/// Reads an export from `input` and writes converted records to `output`.
pub fn convert<R: Read, W: Write>(
    input: R,
    output: W,
    style: OutputStyle,
) -> Result<RunStats, ConvertError> {
    let records = read_envelope(input)?;
    convert_records(records, output, style)
}

fn convert_records<W: Write>(
    records: Vec<RawRecord>,
    output: W,
    style: OutputStyle,
) -> Result<RunStats, ConvertError> {
    let mut writer = JsonRecordWriter::new(output, style);
    Ok(run_pipeline(records, &mut writer)?)
}
