//! Test builders — ergonomic constructors for `RawRecord` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, TimeZone, Utc};
use recon_core::RawRecord;
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// RawRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let raw = RawRecordBuilder::new("t-1")
///     .field("name", "Payroll run")
///     .field("status", 1)
///     .field("tags", "finance, monthly")
///     .build();
/// ```
pub struct RawRecordBuilder {
    id: String,
    fields: Map<String, Value>,
}

impl RawRecordBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn status(self, value: impl Into<Value>) -> Self {
        self.field("status", value)
    }

    pub fn priority(self, value: impl Into<Value>) -> Self {
        self.field("priority", value)
    }

    pub fn build(self) -> RawRecord {
        RawRecord::new(self.id, self.fields)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a record from a `json!` object literal. Panics on non-objects.
pub fn raw(id: &str, value: Value) -> RawRecord {
    RawRecord::from_value(value, id).expect("fixture must be a JSON object")
}

/// Decode a corpus of JSON object lines, numbering fallback ids `corpus:<n>`.
pub fn parse_corpus(lines: &[&str]) -> Vec<RawRecord> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let value: Value = serde_json::from_str(line).expect("fixture must be valid JSON");
            raw(&format!("corpus:{}", i + 1), value)
        })
        .collect()
}

/// A fixed `normalized_at` for deterministic output.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
}
