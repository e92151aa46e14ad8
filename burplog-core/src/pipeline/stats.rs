use crate::pipeline::RecordError;

/// Counters for one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub read: u64,
    pub emitted: u64,
    pub skipped_request: u64,
    pub skipped_response: u64,
    pub skipped_split: u64,
    pub skipped_url: u64,
}

impl RunStats {
    pub fn record_emitted(&mut self) {
        self.read += 1;
        self.emitted += 1;
    }

    pub fn record_skipped(&mut self, err: &RecordError) {
        self.read += 1;
        match err {
            RecordError::Request(_) => self.skipped_request += 1,
            RecordError::Response(_) => self.skipped_response += 1,
            RecordError::Split(_) => self.skipped_split += 1,
            RecordError::Url(_) => self.skipped_url += 1,
        }
    }

    pub fn skipped(&self) -> u64 {
        self.skipped_request + self.skipped_response + self.skipped_split + self.skipped_url
    }
}
