//! Identity-based deduplication.
//!
//! Sources routinely return the same place twice (overlapping queries,
//! paging). The first occurrence wins, so callers sort before deduping.

use std::collections::HashSet;

/// Keep the first item for each key, preserving order.
pub fn dedup_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: std::hash::Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}
