//! JSON Lines decoding shared by the file and stdin sources.
//!
//! One JSON object per line; blank lines are skipped.

use crate::{fallback_id, json_kind, FeedError, RecordSource};
use recon_core::RawRecord;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

pub struct JsonLines<R> {
    name: String,
    lines: Lines<R>,
    line_no: usize,
    position: usize,
}

impl<R: AsyncBufRead + Unpin> JsonLines<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            lines: reader.lines(),
            line_no: 0,
            position: 0,
        }
    }

    fn decode(&mut self, line: &str) -> Result<RawRecord, FeedError> {
        self.position += 1;
        let value: serde_json::Value =
            serde_json::from_str(line).map_err(|source| FeedError::Json {
                line: self.line_no,
                source,
            })?;
        RawRecord::from_value(value, fallback_id(&self.name, self.position)).map_err(|value| {
            FeedError::NotAnObject {
                position: self.line_no,
                found: json_kind(&value),
            }
        })
    }
}

impl<R: AsyncBufRead + Unpin + Send> RecordSource for JsonLines<R> {
    async fn next_record(&mut self) -> Option<Result<RawRecord, FeedError>> {
        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) => {
                    self.line_no += 1;
                    if line.trim().is_empty() {
                        continue;
                    }
                    return Some(self.decode(&line));
                }
                Ok(None) => return None,
                Err(err) => return Some(Err(err.into())),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
