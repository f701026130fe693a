//! A hash-map with a fixed hasher, so that mesh construction behaves the same on every run.

/// Hashmap using [`hashbrown::HashMap`]
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V, foldhash::fast::FixedState>;
