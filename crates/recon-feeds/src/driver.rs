//! Batch driver — feeds a [`RecordSource`] through a [`Normalizer`].
//!
//! Records come out in source order, one canonical record per raw record.
//! The first read error stops the batch and is returned unchanged.

use crate::{FeedError, RecordSource};
use recon_core::{CanonicalRecord, Normalizer};
use tokio::sync::mpsc;

/// Normalize every record in `source` into a `Vec`.
pub async fn collect<S: RecordSource>(
    mut source: S,
    normalizer: &Normalizer,
) -> Result<Vec<CanonicalRecord>, FeedError> {
    let mut out = Vec::new();
    while let Some(next) = source.next_record().await {
        match next {
            Ok(raw) => out.push(normalizer.normalize(&raw)),
            Err(err) => {
                tracing::warn!(source = source.name(), read = out.len(), error = %err, "batch stopped");
                return Err(err);
            }
        }
    }
    tracing::debug!(source = source.name(), records = out.len(), "batch normalized");
    Ok(out)
}

/// Normalize every record in `source` and push it onto `tx`, returning how
/// many were sent.
pub async fn forward<S: RecordSource>(
    mut source: S,
    normalizer: &Normalizer,
    tx: mpsc::Sender<CanonicalRecord>,
) -> Result<usize, FeedError> {
    let mut sent = 0;
    while let Some(next) = source.next_record().await {
        let raw = next.inspect_err(|err| {
            tracing::warn!(source = source.name(), sent, error = %err, "forwarding stopped");
        })?;
        tx.send(normalizer.normalize(&raw))
            .await
            .map_err(|_| FeedError::ChannelClosed)?;
        sent += 1;
    }
    tracing::debug!(source = source.name(), records = sent, "batch forwarded");
    Ok(sent)
}
