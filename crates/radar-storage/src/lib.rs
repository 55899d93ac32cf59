//! Persistence for Radar belief state — timestamped JSON snapshots.

pub mod snapshot;

pub use snapshot::SnapshotStore;
