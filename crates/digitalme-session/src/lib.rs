//! # digitalme-session
//!
//! Holds one profile per identity together with the scored sources it was
//! merged from. Concurrent access via `DashMap`; every mutation of a profile
//! happens under that profile's slot mutex.
//!
//! ## Modules
//!
//! - `slot`: `ProfileSlot` and the `VersionedProfile` snapshot
//! - `store`: `ProfileStore`: source add/remove with re-merge, refinement, optimistic writes
//! - `cleanup`: idle profile eviction

pub mod cleanup;
pub mod slot;
pub mod store;

pub use cleanup::{evict_stale_profiles, DEFAULT_MAX_IDLE};
pub use slot::{ProfileSlot, VersionedProfile};
pub use store::ProfileStore;
