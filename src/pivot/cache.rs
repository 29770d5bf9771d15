// SPDX-License-Identifier: MPL-2.0
//! Selection-keyed LRU cache for pivot responses.
//!
//! Re-requesting an unchanged selection (e.g. toggling a country on and off
//! again) hits the cache and skips the source round-trip entirely.

use super::PivotTable;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Bounded cache mapping a normalized selection key to its pivot table.
#[derive(Debug)]
pub struct PivotCache {
    entries: LruCache<String, PivotTable>,
}

impl PivotCache {
    /// Creates a cache holding at most `capacity` responses (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Looks up a cached table, marking the entry as recently used.
    pub fn get(&mut self, key: &str) -> Option<&PivotTable> {
        self.entries.get(key)
    }

    /// Stores a response, evicting the least recently used entry if full.
    pub fn put(&mut self, key: String, table: PivotTable) {
        self.entries.put(key, table);
    }

    /// Number of cached responses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(marker: &str) -> PivotTable {
        PivotTable {
            columns: vec![marker.to_string()],
            rows: vec![],
        }
    }

    #[test]
    fn get_returns_stored_table() {
        let mut cache = PivotCache::new(4);
        cache.put("SAU/demographics".into(), table("a"));

        assert_eq!(cache.get("SAU/demographics"), Some(&table("a")));
        assert_eq!(cache.get("ARE/demographics"), None);
    }

    #[test]
    fn capacity_evicts_least_recently_used() {
        let mut cache = PivotCache::new(2);
        cache.put("one".into(), table("1"));
        cache.put("two".into(), table("2"));

        // Touch "one" so "two" becomes the eviction candidate.
        let _ = cache.get("one");
        cache.put("three".into(), table("3"));

        assert!(cache.get("one").is_some());
        assert!(cache.get("two").is_none());
        assert!(cache.get("three").is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut cache = PivotCache::new(0);
        cache.put("only".into(), table("x"));
        assert_eq!(cache.len(), 1);
    }
}
