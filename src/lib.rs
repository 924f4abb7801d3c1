//! recon — field reconciliation for loosely-typed task and HR records.
//!
//! This crate re-exports the core and feed layers so that integration tests
//! and the `recon` binary can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! RecordSource ──► driver ──► Normalizer ──► output
//!  (file/stdin)                (resolvers)    (JSON / JSON Lines)
//! ```
//!
//! The normalizer is synchronous and pure; only the sources and the output
//! writer touch I/O.

pub mod output;

pub use recon_core::{CanonicalRecord, Normalizer, RawRecord};
pub use recon_feeds::{FeedError, RecordSource};
