//! Normalizer — runs every field resolver over one [`RawRecord`] and stamps
//! the result.
//!
//! The normalizer holds only immutable defaults, so one instance can be
//! shared freely across threads and requests.

use crate::config::DefaultsConfig;
use crate::resolvers;
use crate::types::{CanonicalRecord, RawRecord};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    defaults: DefaultsConfig,
}

impl Normalizer {
    /// Blank defaults are replaced by the built-in placeholder/sentinel so the
    /// canonical title and assignee are never empty.
    pub fn new(defaults: DefaultsConfig) -> Self {
        let fallback = DefaultsConfig::default();
        let title = non_blank(defaults.title).unwrap_or(fallback.title);
        let assignee = non_blank(defaults.assignee).unwrap_or(fallback.assignee);
        Self {
            defaults: DefaultsConfig { title, assignee },
        }
    }

    pub fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }

    /// Normalize one record, stamping `normalized_at` with the current time.
    pub fn normalize(&self, raw: &RawRecord) -> CanonicalRecord {
        self.normalize_at(raw, Utc::now())
    }

    /// Normalize one record with an explicit `normalized_at`.
    pub fn normalize_at(&self, raw: &RawRecord, now: DateTime<Utc>) -> CanonicalRecord {
        CanonicalRecord {
            id: raw.id.clone(),
            title: resolvers::resolve_title(raw, &self.defaults.title),
            description: resolvers::resolve_description(raw),
            status: resolvers::resolve_status(raw),
            priority: resolvers::resolve_priority(raw),
            assignee: resolvers::resolve_assignee(raw, &self.defaults.assignee),
            due_date: resolvers::resolve_due_date(raw),
            tags: resolvers::resolve_tags(raw),
            normalized_at: now,
        }
    }

    /// Normalize a sequence of records read from an upstream collection.
    ///
    /// Output order matches input order one-to-one. The first read error
    /// stops the batch and is returned as-is; nothing partial is returned.
    pub fn normalize_all<I, E>(&self, raws: I) -> Result<Vec<CanonicalRecord>, E>
    where
        I: IntoIterator<Item = Result<RawRecord, E>>,
    {
        raws.into_iter()
            .map(|raw| raw.map(|raw| self.normalize(&raw)))
            .collect()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Normalize one record with the built-in defaults.
pub fn normalize(raw: &RawRecord) -> CanonicalRecord {
    Normalizer::default().normalize(raw)
}

/// Normalize an in-memory slice with the built-in defaults, preserving order.
pub fn normalize_all(raws: &[RawRecord]) -> Vec<CanonicalRecord> {
    let normalizer = Normalizer::default();
    raws.iter().map(|raw| normalizer.normalize(raw)).collect()
}
