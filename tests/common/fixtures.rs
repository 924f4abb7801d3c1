//! Static record corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of JSON objects shaped the way
//! the two upstream stores actually write them.

use fake::faker::name::en::Name;
use fake::Fake;

/// Task board records with a little of everything. Snapshot-tested.
pub const CORPUS_TASKS: &[&str] = &[
    r#"{"_id":"t-100","title":"Onboard new hire","desc":"Prepare laptop and accounts","status":"In Progress","priority":"high","assignee":"maria","due":"2024-04-15","tags":"hr, onboarding"}"#,
    r#"{"_id":{"$oid":"65f1a2b3c4d5e6f708192a3b"},"name":"Quarterly payroll audit","status":2,"priority":"4","owner":"  devon ","deadline":"2024-06-30T17:00:00+02:00","tags":["finance","audit"]}"#,
    r#"{"id":7,"task_name":"","status":"archived","priority":null,"member":"","due_date":"someday","tags":" , ","extra":{"legacy":true}}"#,
];

/// HR-side records: the older store uses `name`/`owner`/numeric codes.
pub const CORPUS_HR: &[&str] = &[
    r#"{"_id":"hr-1","name":"Benefits enrollment","status":"0","priority":1,"owner":"hr-team"}"#,
    r#"{"_id":"hr-2","name":"Performance review","status":"REVIEW","priority":"Major","owner":"lee","due_date":"04/15/2024"}"#,
    r#"{"_id":"hr-3","name":"Exit interview","status":"closed","priority":"normal","member":"sam","tags":["offboarding"]}"#,
    r#"{"_id":"hr-4","task_name":"Visa renewal","state":"started","priority":"URGENT","deadline":"2024-05-01 09:00:00"}"#,
];

/// Records no sane schema would produce.
pub const CORPUS_MESSY: &[&str] = &[
    r#"{}"#,
    r#"{"title":null,"name":"   ","task_name":42}"#,
    r#"{"status":["done"],"priority":{"level":"high"},"tags":{"a":1}}"#,
    r#"{"status":3.0,"priority":2.5,"due":1713139200000}"#,
    r#"{"due":"","assignee":true,"tags":[1,"",null," two "]}"#,
    r#"{"unknown":"field","another":[1,2,3]}"#,
];

/// Generate `n` task records with realistic assignee names. Status and
/// priority codes cycle so every canonical value appears.
pub fn corpus_high_volume(n: usize) -> Vec<serde_json::Value> {
    (0..n)
        .map(|i| {
            let assignee: String = Name().fake();
            serde_json::json!({
                "_id": format!("hv-{i}"),
                "title": format!("task {i}"),
                "status": i % 4,
                "priority": (i % 4 + 1).to_string(),
                "assignee": assignee,
                "tags": "bulk, generated",
            })
        })
        .collect()
}
