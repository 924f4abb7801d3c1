//! recon-feeds — raw record sources and the batch driver for recon.
//!
//! Each source reads upstream JSON, turns every object into a
//! [`recon_core::RawRecord`], and hands records out one at a time. The
//! [`driver`] feeds a source through a [`recon_core::Normalizer`] and either
//! collects the canonical records or pushes them onto an async channel.

pub mod driver;
pub mod error;
pub mod file;
pub mod lines;
pub mod memory;
pub mod stdin;

pub use error::FeedError;
pub use file::FileSource;
pub use memory::MemorySource;
pub use stdin::StdinSource;

use recon_core::RawRecord;
use std::future::Future;

/// Trait implemented by each raw record source.
///
/// `next_record` yields records in upstream order and `None` once the source
/// is exhausted. A read error is yielded in place of the record that could
/// not be read; callers stop there.
pub trait RecordSource: Send {
    fn next_record(&mut self) -> impl Future<Output = Option<Result<RawRecord, FeedError>>> + Send;

    /// Short label used in fallback ids and log lines.
    fn name(&self) -> &str;
}

/// Id given to records that carry none of their own: `<source>:<position>`.
pub(crate) fn fallback_id(source: &str, position: usize) -> String {
    format!("{source}:{position}")
}

/// Human-readable JSON type name for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
