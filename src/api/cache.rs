use crate::api::types::SubscriptionResponse;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Identifies one cached query result.
///
/// Mirrors the `[scope, view]` tuple keys the service's web clients use, so
/// invalidation semantics line up: a mutation invalidates exactly the
/// `("subscriptions", view)` entry it affects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub scope: &'static str,
    pub view: usize,
}

impl QueryKey {
    /// Key for the per-view subscription listing.
    pub fn subscriptions(view: usize) -> Self {
        Self {
            scope: "subscriptions",
            view,
        }
    }
}

/// Cache capacity. Views are a small fixed set; 8 leaves headroom.
const CACHE_CAPACITY: usize = 8;

/// In-memory query cache for subscription responses.
///
/// This is the client-side stand-in for the external query/cache layer: the
/// UI reads through it, and mutation success handlers call `invalidate` to
/// mark an entry stale. Refetching an invalidated key is the event loop's
/// responsibility, not the cache's.
pub struct QueryCache {
    entries: LruCache<QueryKey, SubscriptionResponse>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: LruCache::new(
                NonZeroUsize::new(CACHE_CAPACITY).expect("capacity is nonzero"),
            ),
        }
    }

    /// Latest known result for `key`, if any.
    pub fn get(&mut self, key: &QueryKey) -> Option<&SubscriptionResponse> {
        self.entries.get(key)
    }

    /// Store a fresh result under `key`.
    pub fn insert(&mut self, key: QueryKey, value: SubscriptionResponse) {
        self.entries.put(key, value);
    }

    /// Drop the entry for `key`. Returns true if an entry was present.
    pub fn invalidate(&mut self, key: &QueryKey) -> bool {
        let removed = self.entries.pop(key).is_some();
        if removed {
            tracing::debug!(scope = key.scope, view = key.view, "Invalidated query cache entry");
        }
        removed
    }

    /// True if a result is cached under `key`.
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains(key)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(unread: u64) -> SubscriptionResponse {
        SubscriptionResponse {
            unread,
            list: Vec::new(),
        }
    }

    #[test]
    fn insert_then_get() {
        let mut cache = QueryCache::new();
        cache.insert(QueryKey::subscriptions(0), resp(5));
        assert_eq!(cache.get(&QueryKey::subscriptions(0)).unwrap().unread, 5);
        assert!(cache.get(&QueryKey::subscriptions(1)).is_none());
    }

    #[test]
    fn invalidate_removes_only_target_key() {
        let mut cache = QueryCache::new();
        cache.insert(QueryKey::subscriptions(0), resp(5));
        cache.insert(QueryKey::subscriptions(1), resp(9));

        assert!(cache.invalidate(&QueryKey::subscriptions(0)));
        assert!(!cache.contains(&QueryKey::subscriptions(0)));
        assert!(cache.contains(&QueryKey::subscriptions(1)));
    }

    #[test]
    fn invalidate_missing_key_is_noop() {
        let mut cache = QueryCache::new();
        assert!(!cache.invalidate(&QueryKey::subscriptions(3)));
    }

    #[test]
    fn reinsert_after_invalidate() {
        let mut cache = QueryCache::new();
        let key = QueryKey::subscriptions(0);
        cache.insert(key.clone(), resp(1));
        cache.invalidate(&key);
        cache.insert(key.clone(), resp(2));
        assert_eq!(cache.get(&key).unwrap().unread, 2);
    }
}
