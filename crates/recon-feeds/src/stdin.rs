//! Stdin source — JSON Lines piped into the process.

use crate::lines::JsonLines;
use crate::{FeedError, RecordSource};
use recon_core::RawRecord;
use tokio::io::{BufReader, Stdin};

const STDIN_NAME: &str = "stdin";

pub struct StdinSource {
    inner: JsonLines<BufReader<Stdin>>,
}

impl StdinSource {
    pub fn new() -> Self {
        tracing::debug!("reading records from stdin");
        Self {
            inner: JsonLines::new(STDIN_NAME, BufReader::new(tokio::io::stdin())),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for StdinSource {
    async fn next_record(&mut self) -> Option<Result<RawRecord, FeedError>> {
        self.inner.next_record().await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
