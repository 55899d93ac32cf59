//! Collection aliases — FxHash maps for hot lookup paths.

/// Fast non-cryptographic hash map, used for technique-keyed lookups.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
