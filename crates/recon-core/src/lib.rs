//! recon-core — field reconciliation for loosely-typed task and HR records.
//!
//! An upstream store hands over [`RawRecord`]s with no enforced schema:
//! several aliases per field, strings and numbers used interchangeably,
//! arbitrary extra keys. The [`Normalizer`] turns each one into a fully
//! populated, strongly-typed [`CanonicalRecord`].
//!
//! # Architecture
//!
//! ```text
//! RawRecord ──► resolvers (title, description, status, priority,
//!                          assignee, due date, tags) ──► CanonicalRecord
//! ```
//!
//! Every resolver is total: it degrades to a default rather than failing.
//! Nothing here performs I/O or holds shared mutable state.

pub mod config;
pub mod normalizer;
pub mod resolvers;
pub mod types;

pub use normalizer::{normalize, normalize_all, Normalizer};
pub use types::{CanonicalRecord, DueDate, Priority, RawRecord, Status};
