use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// A cache entry with expiration time
pub struct CacheEntry<T> {
    pub data: T,
    pub expires_at: Instant,
}

/// A generic time-based cache with TTL support and a bounded entry count.
///
/// Entries expire independently; concurrent identical misses may each
/// trigger their own upstream fetch (no single-flight guarantee).
pub struct TimedCache<T> {
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    ttl: Duration,
    max_entries: usize,
}

impl<T: Clone + Send + Sync> TimedCache<T> {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            max_entries,
        }
    }

    /// Get a value from the cache if it exists and hasn't expired
    pub async fn get(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().await;
        if let Some(entry) = entries.get(key) {
            if Instant::now() < entry.expires_at {
                return Some(entry.data.clone());
            }
        }
        None
    }

    /// Store a value in the cache with the configured TTL.
    /// When the cache is full, expired entries are dropped first and the
    /// closest-to-expiry entry is evicted if that was not enough.
    pub async fn set(&self, key: &str, value: T) {
        let mut entries = self.entries.write().await;
        if entries.len() >= self.max_entries && !entries.contains_key(key) {
            let now = Instant::now();
            entries.retain(|_, entry| entry.expires_at > now);

            if entries.len() >= self.max_entries {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.expires_at)
                    .map(|(key, _)| key.to_owned());
                if let Some(oldest) = oldest {
                    entries.remove(&oldest);
                }
            }
        }
        entries.insert(
            key.to_string(),
            CacheEntry {
                data: value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Remove a specific key from the cache
    pub async fn invalidate(&self, key: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(key);
    }

    /// Drop every entry, expired or not
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<T> std::fmt::Debug for TimedCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedCache")
            .field("ttl", &self.ttl)
            .field("max_entries", &self.max_entries)
            .finish()
    }
}
