//! File source — a JSON array document or a JSON Lines file.
//!
//! The format is sniffed from the first non-whitespace byte: `[` means a
//! JSON array, anything else JSON Lines.

use crate::lines::JsonLines;
use crate::memory::MemorySource;
use crate::{FeedError, RecordSource};
use recon_core::RawRecord;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};

pub struct FileSource {
    inner: Inner,
}

enum Inner {
    Lines(JsonLines<BufReader<File>>),
    Array(MemorySource),
}

impl FileSource {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mut reader = BufReader::new(File::open(path).await?);

        let inner = if starts_with_array(&mut reader).await? {
            let mut body = Vec::new();
            reader.read_to_end(&mut body).await?;
            let values: Vec<serde_json::Value> =
                serde_json::from_slice(&body).map_err(|source| FeedError::Json {
                    line: source.line(),
                    source,
                })?;
            tracing::debug!(file = %path.display(), records = values.len(), "opened JSON array");
            Inner::Array(MemorySource::named(name, values))
        } else {
            tracing::debug!(file = %path.display(), "opened JSON Lines");
            Inner::Lines(JsonLines::new(name, reader))
        };
        Ok(Self { inner })
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Peek past a leading BOM and whitespace without consuming anything else.
async fn starts_with_array(reader: &mut BufReader<File>) -> Result<bool, FeedError> {
    let mut at_start = true;
    loop {
        let buf = reader.fill_buf().await?;
        if buf.is_empty() {
            return Ok(false);
        }
        if std::mem::take(&mut at_start) && buf.starts_with(UTF8_BOM) {
            reader.consume(UTF8_BOM.len());
            continue;
        }
        match buf.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(idx) => return Ok(buf[idx] == b'['),
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}

impl RecordSource for FileSource {
    async fn next_record(&mut self) -> Option<Result<RawRecord, FeedError>> {
        match &mut self.inner {
            Inner::Lines(lines) => lines.next_record().await,
            Inner::Array(values) => values.next_record().await,
        }
    }

    fn name(&self) -> &str {
        match &self.inner {
            Inner::Lines(lines) => lines.name(),
            Inner::Array(values) => values.name(),
        }
    }
}
