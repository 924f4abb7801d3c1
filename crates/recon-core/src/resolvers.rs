//! Field resolvers — one total function per canonical field.
//!
//! Each resolver reads a [`RawRecord`] through a fixed alias list (first
//! match wins) and degrades to a default instead of failing: unknown status
//! and priority labels fall back to [`Status::Backlog`] and
//! [`Priority::Medium`], missing text to a placeholder, unparsable dates to
//! the raw value.

use crate::types::{DueDate, Priority, RawRecord, Status};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use phf::phf_map;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Alias tables
// ---------------------------------------------------------------------------

pub const TITLE_ALIASES: &[&str] = &["title", "name", "task_name"];
pub const DESCRIPTION_ALIASES: &[&str] = &["desc", "description"];
pub const STATUS_ALIASES: &[&str] = &["status", "state"];
pub const PRIORITY_ALIASES: &[&str] = &["priority"];
pub const ASSIGNEE_ALIASES: &[&str] = &["assignee", "owner", "member"];
pub const DUE_DATE_ALIASES: &[&str] = &["due", "due_date", "deadline"];
pub const TAGS_KEY: &str = "tags";

/// Title used when no alias yields text.
pub const DEFAULT_TITLE: &str = "Untitled";
/// Assignee used when no alias yields text.
pub const UNASSIGNED: &str = "unassigned";

// ---------------------------------------------------------------------------
// Code / label tables
// ---------------------------------------------------------------------------

/// Keys are in [`table_key`] form: lower-case, no whitespace, `_` or `-`.
static STATUS_TABLE: phf::Map<&'static str, Status> = phf_map! {
    // not started
    "backlog" => Status::Backlog,
    "todo" => Status::Backlog,
    "notstarted" => Status::Backlog,
    "new" => Status::Backlog,
    "open" => Status::Backlog,
    "0" => Status::Backlog,
    // in progress
    "inprogress" => Status::InProgress,
    "doing" => Status::InProgress,
    "started" => Status::InProgress,
    "active" => Status::InProgress,
    "wip" => Status::InProgress,
    "1" => Status::InProgress,
    // review
    "inreview" => Status::InReview,
    "review" => Status::InReview,
    "reviewing" => Status::InReview,
    "pending" => Status::InReview,
    "2" => Status::InReview,
    // done
    "done" => Status::Done,
    "completed" => Status::Done,
    "complete" => Status::Done,
    "closed" => Status::Done,
    "finished" => Status::Done,
    "resolved" => Status::Done,
    "3" => Status::Done,
};

static PRIORITY_TABLE: phf::Map<&'static str, Priority> = phf_map! {
    "low" => Priority::Low,
    "minor" => Priority::Low,
    "1" => Priority::Low,
    "medium" => Priority::Medium,
    "mid" => Priority::Medium,
    "normal" => Priority::Medium,
    "2" => Priority::Medium,
    "high" => Priority::High,
    "major" => Priority::High,
    "3" => Priority::High,
    "critical" => Priority::Critical,
    "blocker" => Priority::Critical,
    "urgent" => Priority::Critical,
    "4" => Priority::Critical,
};

// ---------------------------------------------------------------------------
// Resolvers
// ---------------------------------------------------------------------------

pub fn resolve_title(raw: &RawRecord, placeholder: &str) -> String {
    first_text(raw, TITLE_ALIASES).unwrap_or_else(|| placeholder.to_string())
}

pub fn resolve_description(raw: &RawRecord) -> String {
    first_text(raw, DESCRIPTION_ALIASES).unwrap_or_default()
}

pub fn resolve_assignee(raw: &RawRecord, sentinel: &str) -> String {
    first_text(raw, ASSIGNEE_ALIASES).unwrap_or_else(|| sentinel.to_string())
}

/// Label or numeric code → [`Status`]. `"2"`, `2`, `"Review"` and
/// `" PENDING "` all land on [`Status::InReview`].
pub fn resolve_status(raw: &RawRecord) -> Status {
    first_table_key(raw, STATUS_ALIASES)
        .and_then(|key| STATUS_TABLE.get(key.as_str()).copied())
        .unwrap_or_default()
}

pub fn resolve_priority(raw: &RawRecord) -> Priority {
    first_table_key(raw, PRIORITY_ALIASES)
        .and_then(|key| PRIORITY_TABLE.get(key.as_str()).copied())
        .unwrap_or_default()
}

/// `None` when no alias is present. A present value that does not parse is
/// passed through as [`DueDate::Raw`].
pub fn resolve_due_date(raw: &RawRecord) -> Option<DueDate> {
    let value = first_value(raw, DUE_DATE_ALIASES)?;
    let due = match value {
        Value::String(s) => parse_date(s)
            .map(DueDate::Parsed)
            .unwrap_or_else(|| DueDate::Raw(s.clone())),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(DueDate::Parsed)
            .unwrap_or_else(|| DueDate::Raw(n.to_string())),
        other => DueDate::Raw(other.to_string()),
    };
    Some(due)
}

/// Arrays keep their order; scalars are split on `,`. Pieces are trimmed and
/// empty pieces dropped either way.
pub fn resolve_tags(raw: &RawRecord) -> Vec<String> {
    match raw.get(TAGS_KEY) {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(coerce_text)
            .filter_map(|tag| non_empty(&tag))
            .collect(),
        Some(other) => coerce_text(other)
            .map(|joined| joined.split(',').filter_map(non_empty).collect())
            .unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// Scalar → text. Whole floats drop their fractional part so `2.0` reads as
/// `"2"`. Null, arrays and objects have no text form.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (None, Some(u), _) => u.to_string(),
            (None, None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            _ => n.to_string(),
        }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Lower-case and drop every whitespace, `_` and `-` character, so
/// `In Review`, `in_review` and `InReview` share one key.
fn table_key(value: &Value) -> Option<String> {
    let key = coerce_text(value)?
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect();
    Some(key)
}

/// First alias whose value yields a non-empty table key.
fn first_table_key(raw: &RawRecord, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|key| raw.get(key))
        .filter_map(table_key)
        .find(|key| !key.is_empty())
}

fn first_value<'a>(raw: &'a RawRecord, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| raw.get(key))
}

fn first_text(raw: &RawRecord, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|key| raw.get(key))
        .filter_map(coerce_text)
        .find_map(|text| non_empty(&text))
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Best-effort date parse. Zone-less forms are taken as UTC; bare dates as
/// UTC midnight.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_rfc2822(input) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Some(ts) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Some(ts.and_utc());
    }
    NAIVE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
