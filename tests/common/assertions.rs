//! Domain-specific assertion macros for recon harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! say *which* canonical field was wrong and for *which* input.

use recon_core::{CanonicalRecord, Priority, Status};

// ---------------------------------------------------------------------------
// Enum assertions
// ---------------------------------------------------------------------------

/// Assert the status a raw value normalizes to.
///
/// ```rust
/// assert_status!(json!("pending"), Status::InReview);
/// ```
#[macro_export]
macro_rules! assert_status {
    ($value:expr, $expected:expr) => {{
        let value: serde_json::Value = $value;
        let raw = recon_core::RawRecord::from_value(serde_json::json!({ "status": value.clone() }), "s")
            .expect("object");
        let actual = recon_core::normalize(&raw).status;
        let expected: recon_core::Status = $expected;
        if actual != expected {
            panic!(
                "assert_status! failed:\n  input:    {}\n  expected: {:?}\n  actual:   {:?}",
                value, expected, actual
            );
        }
    }};
}

/// Assert the priority a raw value normalizes to.
#[macro_export]
macro_rules! assert_priority {
    ($value:expr, $expected:expr) => {{
        let value: serde_json::Value = $value;
        let raw = recon_core::RawRecord::from_value(serde_json::json!({ "priority": value.clone() }), "p")
            .expect("object");
        let actual = recon_core::normalize(&raw).priority;
        let expected: recon_core::Priority = $expected;
        if actual != expected {
            panic!(
                "assert_priority! failed:\n  input:    {}\n  expected: {:?}\n  actual:   {:?}",
                value, expected, actual
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Record invariants
// ---------------------------------------------------------------------------

/// Assert everything that must hold for any canonical record, whatever the
/// input looked like.
pub fn assert_canonical_invariants(record: &CanonicalRecord) {
    assert!(
        !record.title.trim().is_empty(),
        "title must never be empty: {record:?}"
    );
    assert!(
        !record.assignee.trim().is_empty(),
        "assignee must never be empty: {record:?}"
    );
    assert!(Status::ALL.contains(&record.status));
    assert!(Priority::ALL.contains(&record.priority));
    for tag in &record.tags {
        assert!(
            !tag.is_empty() && tag.trim() == tag,
            "tags must be trimmed and non-empty, got {tag:?} in {record:?}"
        );
    }
}

/// Assert two batches line up one-to-one by id.
pub fn assert_same_ids(records: &[CanonicalRecord], expected: &[&str]) {
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    pretty_assertions::assert_eq!(ids, expected);
}
