use crate::decode::{decode_binary_field, decode_url_field};
use crate::output::{OutputError, RecordWriter};
use crate::pipeline::{RecordError, RunStats};
use crate::record::{DecodedFields, OutputRecord, RawRecord, normalize};
use crate::request::split_request;

/// Runs every step for one record. The first failure is returned and nothing
/// is built.
pub fn process_record(raw: &RawRecord) -> Result<OutputRecord, RecordError> {
    let request = decode_binary_field(&raw.request).map_err(RecordError::Request)?;
    let response = decode_binary_field(&raw.response).map_err(RecordError::Response)?;
    let split = split_request(&request)?;
    let url = decode_url_field(&raw.url).map_err(RecordError::Url)?;

    let decoded = DecodedFields {
        url,
        request,
        response,
    };

    Ok(normalize(raw, decoded, &split))
}

/// Feeds `records` through the pipeline in order and writes every record
/// that converts. Skipped records are logged at debug level and counted.
///
/// Only a writer failure stops the run.
pub fn run_pipeline<I, W>(records: I, writer: &mut W) -> Result<RunStats, OutputError>
where
    I: IntoIterator<Item = RawRecord>,
    W: RecordWriter + ?Sized,
{
    let mut stats = RunStats::default();

    for (index, raw) in records.into_iter().enumerate() {
        match process_record(&raw) {
            Ok(record) => {
                writer.write_record(&record)?;
                stats.record_emitted();
            }
            Err(err) => {
                tracing::debug!(
                    index,
                    step = err.step(),
                    error = %err,
                    url = %raw.url,
                    "skipping record"
                );
                stats.record_skipped(&err);
            }
        }
    }

    writer.finish()?;
    Ok(stats)
}
