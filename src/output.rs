//! Output writer — serializes canonical records to JSON or JSON Lines.

use recon_core::CanonicalRecord;
use std::io::Write;

/// How the batch is laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON array.
    Array { pretty: bool },
    /// One compact JSON object per line.
    Lines,
}

impl OutputFormat {
    pub fn from_flags(pretty: bool, lines: bool) -> Self {
        if lines {
            OutputFormat::Lines
        } else {
            OutputFormat::Array { pretty }
        }
    }
}

pub fn write_records<W: Write>(
    mut writer: W,
    records: &[CanonicalRecord],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Array { pretty: true } => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        }
        OutputFormat::Array { pretty: false } => {
            serde_json::to_writer(&mut writer, records)?;
            writeln!(writer)?;
        }
        OutputFormat::Lines => {
            for record in records {
                serde_json::to_writer(&mut writer, record)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
