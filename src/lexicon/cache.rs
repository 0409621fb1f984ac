//! Append-only memoization keyed by normalized word

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Session-lifetime memo map
///
/// Entries are never invalidated or replaced: the first value stored for a
/// key wins. Two overlapping lookups of the same word may both reach the
/// provider, but only one result is kept.
pub struct MemoCache<V> {
    entries: RwLock<FxHashMap<String, V>>,
}

impl<V: Clone> MemoCache<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.read().get(key).cloned()
    }

    /// Store `value` unless the key is already present; returns the kept value
    pub fn insert(&self, key: &str, value: V) -> V {
        self.entries
            .write()
            .entry(key.to_string())
            .or_insert(value)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<V: Clone> Default for MemoCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_after_insert() {
        let cache = MemoCache::new();
        assert!(cache.is_empty());
        cache.insert("gold", true);
        assert_eq!(cache.get("gold"), Some(true));
        assert_eq!(cache.get("cold"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn first_value_wins() {
        let cache = MemoCache::new();
        assert!(cache.insert("gold", true));
        assert!(cache.insert("gold", false));
        assert_eq!(cache.get("gold"), Some(true));
        assert_eq!(cache.len(), 1);
    }
}
