//! Core types for recon-core.
//!
//! This module defines the data structures shared by the resolvers, the
//! normalizer and every caller: the schema-free [`RawRecord`], the fully
//! populated [`CanonicalRecord`], and its typed field values [`Status`],
//! [`Priority`] and [`DueDate`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Keys checked, in order, for an upstream identifier.
const ID_KEYS: &[&str] = &["_id", "id"];

// ---------------------------------------------------------------------------
// RawRecord
// ---------------------------------------------------------------------------

/// A record as handed over by an upstream store, with no enforced schema.
///
/// Any subset of the known aliases may be present and unknown keys are
/// carried but never read. Lookups go through [`RawRecord::get`], which
/// treats JSON `null` the same as a missing key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    /// Upstream identity, carried unchanged into the canonical record.
    pub id: String,
    pub fields: Map<String, Value>,
}

impl RawRecord {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Build a record from a decoded JSON value.
    ///
    /// Only objects are records; anything else is handed back unchanged in
    /// `Err`. The id is read from `_id`, then `id` (strings, numbers, and the
    /// `{"$oid": "..."}` wrapper are understood), falling back to
    /// `fallback_id` when neither yields one.
    pub fn from_value(value: Value, fallback_id: impl Into<String>) -> Result<Self, Value> {
        let Value::Object(fields) = value else {
            return Err(value);
        };
        let id = ID_KEYS
            .iter()
            .find_map(|key| fields.get(*key).and_then(id_text))
            .unwrap_or_else(|| fallback_id.into());
        Ok(Self { id, fields })
    }

    /// Look up a field, treating `null` as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(wrapper) => wrapper.get("$oid").and_then(id_text),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Status / Priority
// ---------------------------------------------------------------------------

/// Board column a task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Backlog,
    InProgress,
    InReview,
    Done,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Backlog,
        Status::InProgress,
        Status::InReview,
        Status::Done,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Backlog => "BACKLOG",
            Status::InProgress => "IN_PROGRESS",
            Status::InReview => "IN_REVIEW",
            Status::Done => "DONE",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse of the canonical name (`IN_REVIEW`); loose labels go through
/// the resolvers instead.
impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown status: {s}"))
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| format!("unknown priority: {s}"))
    }
}

// ---------------------------------------------------------------------------
// DueDate
// ---------------------------------------------------------------------------

/// A resolved due date.
///
/// Values that parse as a date become [`DueDate::Parsed`]; anything else is
/// kept verbatim as [`DueDate::Raw`]. Both serialize as a plain string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueDate {
    Parsed(DateTime<Utc>),
    Raw(String),
}

impl DueDate {
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            DueDate::Parsed(ts) => Some(*ts),
            DueDate::Raw(_) => None,
        }
    }
}

impl std::fmt::Display for DueDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DueDate::Parsed(ts) => f.write_str(&iso_millis(ts)),
            DueDate::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// CanonicalRecord
// ---------------------------------------------------------------------------

/// The normalization target. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub id: String,
    /// Never empty; the configured placeholder when no alias yields text.
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    /// Never empty; the configured sentinel when nobody is assigned.
    pub assignee: String,
    pub due_date: Option<DueDate>,
    pub tags: Vec<String>,
    /// When normalization ran. Not derived from the input.
    #[serde(serialize_with = "serialize_iso_millis")]
    pub normalized_at: DateTime<Utc>,
}

/// ISO-8601 with millisecond precision and a `Z` suffix,
/// e.g. `2024-04-15T00:00:00.000Z`.
pub fn iso_millis(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_iso_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&iso_millis(ts))
}
