//! ProfileStore: per-identity profiles with serialized mutation via `DashMap`.

use std::sync::{Arc, Mutex, MutexGuard, TryLockError};

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::debug;

use digitalme_core::errors::{DigitalMeError, DigitalMeResult};
use digitalme_core::models::{ScoredSample, StyleProfile};
use digitalme_core::traits::{IMerger, IRefiner, RefinementOutcome};
use digitalme_core::DigitalMeConfig;
use digitalme_merge::MergeEngine;
use digitalme_observability::tracing_setup::events;
use digitalme_observability::{merge_span, refinement_span, store_span};

use crate::slot::{ProfileSlot, VersionedProfile};

/// Thread-safe holder of every active profile and its sources.
///
/// The map is only locked long enough to fetch a slot; all work on a profile
/// happens under the slot's own mutex, so one profile never blocks another.
/// Eviction never waits on a slot: a slot that is locked is in use.
pub struct ProfileStore {
    profiles: DashMap<String, Arc<Mutex<ProfileSlot>>>,
    merger: Box<dyn IMerger>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::with_merger(Box::new(MergeEngine::default()))
    }

    pub fn from_config(config: &DigitalMeConfig) -> Self {
        Self::with_merger(Box::new(MergeEngine::from_config(config)))
    }

    pub fn with_merger(merger: Box<dyn IMerger>) -> Self {
        Self {
            profiles: DashMap::new(),
            merger,
        }
    }

    /// Add or replace (by `source_id`) a source and re-merge the profile.
    /// The first successful merge creates the profile.
    pub fn add_source(&self, id: &str, scored: ScoredSample) -> DigitalMeResult<VersionedProfile> {
        let _span = store_span!("add_source", id).entered();
        loop {
            let slot = self
                .profiles
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(ProfileSlot::new(Utc::now()))))
                .clone();
            let mut guard = lock(id, &slot)?;
            if guard.evicted {
                // Evicted between fetch and lock: start over on the current entry.
                debug!(profile_id = id, "slot evicted before write, retrying");
                continue;
            }

            let sources = guard.with_source(scored);
            let profile = self.merge_into(id, guard.profile.as_ref(), &sources)?;

            guard.sources = sources;
            guard.profile = Some(profile);
            guard.bump(Utc::now());
            return committed(id, &guard);
        }
    }

    /// Drop a source and re-merge from the rest. The last source cannot be removed.
    pub fn remove_source(&self, id: &str, source_id: &str) -> DigitalMeResult<VersionedProfile> {
        let _span = store_span!("remove_source", id).entered();
        let slot = self.slot(id)?;
        let mut guard = live(id, &slot)?;

        if !guard.has_source(source_id) {
            return Err(DigitalMeError::ValidationError(format!(
                "profile {id} has no source {source_id}"
            )));
        }
        if guard.sources.len() == 1 {
            return Err(DigitalMeError::ValidationError(format!(
                "cannot remove the last source of profile {id}"
            )));
        }

        let sources = guard.without_source(source_id);
        let profile = self.merge_into(id, guard.profile.as_ref(), &sources)?;

        guard.sources = sources;
        guard.profile = Some(profile);
        guard.bump(Utc::now());
        committed(id, &guard)
    }

    /// Refine a profile from a conversation batch. Batches for one profile
    /// run one after another; the version moves only when the batch applied.
    pub fn refine(
        &self,
        id: &str,
        refiner: &dyn IRefiner,
        batch: &[String],
    ) -> DigitalMeResult<RefinementOutcome> {
        let _span = refinement_span!(id, batch.len()).entered();
        let slot = self.slot(id)?;
        let mut guard = live(id, &slot)?;

        let profile = guard.profile.as_mut().ok_or_else(|| not_found(id))?;
        let outcome = refiner.refine(profile, batch)?;
        if outcome.is_applied() {
            guard.bump(Utc::now());
            let delta = outcome.delta();
            events::refinement_applied(id, delta.words_analyzed, delta.confidence_change, guard.version);
        } else {
            debug!(profile_id = id, "batch left profile unchanged");
        }
        Ok(outcome)
    }

    /// Current profile and version, if the profile exists.
    pub fn snapshot(&self, id: &str) -> Option<VersionedProfile> {
        let slot = self.slot(id).ok()?;
        let mut guard = slot.lock().ok()?;
        if guard.evicted {
            return None;
        }
        guard.last_touched = Utc::now();
        guard.snapshot()
    }

    /// Optimistic write: replace the profile only if it is still at
    /// `expected_version`. Returns the new version.
    pub fn replace_if_version(
        &self,
        id: &str,
        expected_version: u64,
        profile: StyleProfile,
    ) -> DigitalMeResult<u64> {
        let _span = store_span!("replace_if_version", id).entered();
        profile.validate()?;
        let slot = self.slot(id)?;
        let mut guard = live(id, &slot)?;

        if guard.profile.is_none() {
            return Err(not_found(id));
        }
        if guard.version != expected_version {
            events::version_conflict(id, expected_version, guard.version);
            return Err(DigitalMeError::VersionConflict {
                expected: expected_version,
                actual: guard.version,
            });
        }
        guard.profile = Some(profile);
        guard.bump(Utc::now());
        Ok(guard.version)
    }

    /// Turn refinement on or off. Returns the (possibly unchanged) version.
    pub fn set_learning_enabled(&self, id: &str, enabled: bool) -> DigitalMeResult<u64> {
        let slot = self.slot(id)?;
        let mut guard = live(id, &slot)?;

        let profile = guard.profile.as_mut().ok_or_else(|| not_found(id))?;
        if profile.learning_metadata.enabled != enabled {
            profile.learning_metadata.enabled = enabled;
            guard.bump(Utc::now());
            debug!(profile_id = id, enabled, "learning toggled");
        }
        Ok(guard.version)
    }

    /// Drop every profile idle for longer than `max_idle` as of `now`.
    pub fn evict_idle(&self, max_idle: Duration, now: DateTime<Utc>) -> Vec<String> {
        let ids: Vec<String> = self.profiles.iter().map(|e| e.key().clone()).collect();
        let mut evicted = Vec::new();
        for id in ids {
            let removed = self.profiles.remove_if(&id, |_, slot| match slot.try_lock() {
                Ok(mut s) => {
                    let idle = s.idle_for(now) > max_idle;
                    if idle {
                        s.evicted = true;
                    }
                    idle
                }
                Err(TryLockError::WouldBlock) => false,
                // A poisoned slot can never be used again.
                Err(TryLockError::Poisoned(_)) => true,
            });
            if removed.is_some() {
                evicted.push(id);
            }
        }
        if !evicted.is_empty() {
            events::profiles_evicted(&evicted);
        }
        evicted
    }

    /// Remove a profile outright, returning its last state.
    pub fn remove(&self, id: &str) -> Option<VersionedProfile> {
        let (_, slot) = self.profiles.remove(id)?;
        let mut guard = slot.lock().ok()?;
        guard.evicted = true;
        guard.snapshot()
    }

    /// Source ids currently merged into a profile.
    pub fn source_ids(&self, id: &str) -> DigitalMeResult<Vec<String>> {
        let slot = self.slot(id)?;
        let guard = live(id, &slot)?;
        Ok(guard.source_ids())
    }

    pub fn ids(&self) -> Vec<String> {
        self.profiles.iter().map(|e| e.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn slot(&self, id: &str) -> DigitalMeResult<Arc<Mutex<ProfileSlot>>> {
        self.profiles
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| not_found(id))
    }

    fn merge_into(
        &self,
        id: &str,
        current: Option<&StyleProfile>,
        samples: &[ScoredSample],
    ) -> DigitalMeResult<StyleProfile> {
        let _span = merge_span!(id, samples.len()).entered();
        match current {
            Some(profile) => {
                let mut next = profile.clone();
                self.merger.remerge(&mut next, samples)?;
                Ok(next)
            }
            None => self.merger.merge(samples),
        }
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<'a>(id: &str, slot: &'a Mutex<ProfileSlot>) -> DigitalMeResult<MutexGuard<'a, ProfileSlot>> {
    slot.lock()
        .map_err(|_| DigitalMeError::LockPoisoned { id: id.to_string() })
}

/// Lock a slot that must still belong to the store.
fn live<'a>(id: &str, slot: &'a Mutex<ProfileSlot>) -> DigitalMeResult<MutexGuard<'a, ProfileSlot>> {
    let guard = lock(id, slot)?;
    if guard.evicted {
        return Err(not_found(id));
    }
    Ok(guard)
}

fn not_found(id: &str) -> DigitalMeError {
    DigitalMeError::ProfileNotFound { id: id.to_string() }
}

fn committed(id: &str, slot: &ProfileSlot) -> DigitalMeResult<VersionedProfile> {
    let snapshot = slot.snapshot().ok_or_else(|| not_found(id))?;
    events::profile_merged(
        id,
        slot.sources.len(),
        snapshot.profile.confidence.value(),
        snapshot.version,
    );
    Ok(snapshot)
}
