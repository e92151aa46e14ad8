use crate::logging::OutputStyle;
use crate::output::OutputError;
use crate::record::OutputRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{BufWriter, Write};

/// Sink for converted records.
pub trait RecordWriter {
    fn write_record(&mut self, record: &OutputRecord) -> Result<(), OutputError>;

    /// Flushes anything buffered. Called once after the last record.
    fn finish(&mut self) -> Result<(), OutputError>;
}

/// Writes each record as one JSON document followed by a newline.
///
/// [`OutputStyle::Lines`] gives JSON Lines; [`OutputStyle::Pretty`] indents
/// with tabs, one document after another.
pub struct JsonRecordWriter<W: Write> {
    out: BufWriter<W>,
    style: OutputStyle,
}

impl<W: Write> JsonRecordWriter<W> {
    pub fn new(out: W, style: OutputStyle) -> Self {
        Self {
            out: BufWriter::new(out),
            style,
        }
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_inner(self) -> Result<W, OutputError> {
        self.out
            .into_inner()
            .map_err(|e| OutputError::Write(e.into_error()))
    }
}

impl<W: Write> RecordWriter for JsonRecordWriter<W> {
    fn write_record(&mut self, record: &OutputRecord) -> Result<(), OutputError> {
        match self.style {
            OutputStyle::Lines => serde_json::to_writer(&mut self.out, record)?,
            OutputStyle::Pretty => {
                let formatter = PrettyFormatter::with_indent(b"\t");
                let mut ser = Serializer::with_formatter(&mut self.out, formatter);
                record.serialize(&mut ser)?;
            }
        }

        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), OutputError> {
        self.out.flush()?;
        Ok(())
    }
}

