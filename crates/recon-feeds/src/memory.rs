//! In-memory source over already-decoded JSON values. Used for JSON array
//! documents and by callers that fetched records themselves.

use crate::{fallback_id, json_kind, FeedError, RecordSource};
use recon_core::RawRecord;
use serde_json::Value;

pub struct MemorySource {
    name: String,
    values: std::vec::IntoIter<Value>,
    position: usize,
}

impl MemorySource {
    pub fn new(values: Vec<Value>) -> Self {
        Self::named("memory", values)
    }

    pub fn named(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter(),
            position: 0,
        }
    }

    fn take_next(&mut self) -> Option<Result<RawRecord, FeedError>> {
        let value = self.values.next()?;
        self.position += 1;
        let record = RawRecord::from_value(value, fallback_id(&self.name, self.position))
            .map_err(|value| FeedError::NotAnObject {
                position: self.position,
                found: json_kind(&value),
            });
        Some(record)
    }
}

impl RecordSource for MemorySource {
    async fn next_record(&mut self) -> Option<Result<RawRecord, FeedError>> {
        self.take_next()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
