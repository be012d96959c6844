use chrono::{DateTime, Utc};

use digitalme_core::models::{ScoredSample, StyleProfile};

/// A profile at a specific version.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedProfile {
    pub version: u64,
    pub profile: StyleProfile,
}

/// Everything the store keeps for one identity.
#[derive(Debug, Clone)]
pub struct ProfileSlot {
    /// Bumped on every committed change. 0 until the first merge.
    pub version: u64,
    pub profile: Option<StyleProfile>,
    /// Current sources in the order they were first added. Replacing a
    /// source keeps its position; merges see them in this order.
    pub sources: Vec<ScoredSample>,
    pub last_touched: DateTime<Utc>,
    /// Set under the slot lock when the store drops this slot. A writer that
    /// fetched the slot before eviction must not commit into it.
    pub(crate) evicted: bool,
}

impl ProfileSlot {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            version: 0,
            profile: None,
            sources: Vec::new(),
            last_touched: now,
            evicted: false,
        }
    }

    pub fn snapshot(&self) -> Option<VersionedProfile> {
        self.profile.as_ref().map(|profile| VersionedProfile {
            version: self.version,
            profile: profile.clone(),
        })
    }

    pub fn has_source(&self, source_id: &str) -> bool {
        self.sources.iter().any(|s| s.sample.source_id == source_id)
    }

    pub fn source_ids(&self) -> Vec<String> {
        self.sources
            .iter()
            .map(|s| s.sample.source_id.clone())
            .collect()
    }

    /// Sources after adding `scored`, replacing any source with the same id in place.
    pub fn with_source(&self, scored: ScoredSample) -> Vec<ScoredSample> {
        let mut sources = self.sources.clone();
        match sources
            .iter_mut()
            .find(|s| s.sample.source_id == scored.sample.source_id)
        {
            Some(existing) => *existing = scored,
            None => sources.push(scored),
        }
        sources
    }

    /// Sources after dropping `source_id`.
    pub fn without_source(&self, source_id: &str) -> Vec<ScoredSample> {
        self.sources
            .iter()
            .filter(|s| s.sample.source_id != source_id)
            .cloned()
            .collect()
    }

    /// Record a committed change.
    pub(crate) fn bump(&mut self, now: DateTime<Utc>) {
        self.version += 1;
        self.last_touched = now;
    }

    pub fn idle_for(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.last_touched
    }

    pub fn is_evicted(&self) -> bool {
        self.evicted
    }
}
