//! Idle profile eviction. Evicted profiles are dropped from memory only;
//! persisting them first is the caller's concern.

use chrono::{Duration, Utc};

use crate::store::ProfileStore;

/// Default idle time before a profile is evicted: 1 hour.
pub const DEFAULT_MAX_IDLE: Duration = Duration::hours(1);

/// Evict profiles idle for longer than [`DEFAULT_MAX_IDLE`]. Returns their ids.
pub fn evict_stale_profiles(store: &ProfileStore) -> Vec<String> {
    store.evict_idle(DEFAULT_MAX_IDLE, Utc::now())
}
