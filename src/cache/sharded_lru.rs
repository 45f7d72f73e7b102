//! Sharded LRU cache with optional TTL.
//!
//! 256 independently-locked shards, each an LRU keyed by FNV-1a hash of the
//! string key, so concurrent font/CMap lookups from different worker threads
//! rarely contend on the same lock. Statistics (hits/misses/evictions) are
//! tracked with atomics across the whole cache.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

const SHARD_COUNT: usize = 256;

fn fnv1a(key: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    let mut hash = OFFSET_BASIS;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

struct Shard<V> {
    capacity_per_shard: usize,
    /// Front = least recently used, back = most recently used.
    order: Vec<String>,
    map: HashMap<String, Entry<V>>,
}

impl<V> Shard<V> {
    fn new(capacity_per_shard: usize) -> Self {
        Self {
            capacity_per_shard,
            order: Vec::new(),
            map: HashMap::new(),
        }
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            let k = self.order.remove(pos);
            self.order.push(k);
        }
    }

    fn evict_if_needed(&mut self) -> bool {
        if self.map.len() > self.capacity_per_shard {
            if let Some(lru_key) = self.order.first().cloned() {
                self.order.remove(0);
                self.map.remove(&lru_key);
                return true;
            }
        }
        false
    }
}

/// Cache-wide statistics, updated atomically.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    expirations: AtomicU64,
}

impl CacheStats {
    /// Total successful lookups.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Total failed lookups (key absent or expired).
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Total entries evicted to respect per-shard capacity.
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Total entries removed because their TTL elapsed.
    pub fn expirations(&self) -> u64 {
        self.expirations.load(Ordering::Relaxed)
    }
}

/// A sharded LRU cache, keyed by `String`.
///
/// `capacity` is the total cache capacity; each of the 256 shards holds
/// `capacity / 256` entries (minimum 1), so the aggregate cache never
/// exceeds `capacity` live entries by more than `SHARD_COUNT - 1`.
pub struct ShardedLruCache<V> {
    shards: Vec<Mutex<Shard<V>>>,
    ttl: Option<Duration>,
    stats: CacheStats,
}

impl<V: Clone> ShardedLruCache<V> {
    /// Create a new cache with the given total capacity and optional TTL.
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        let per_shard = (capacity / SHARD_COUNT).max(1);
        let shards = (0..SHARD_COUNT)
            .map(|_| Mutex::new(Shard::new(per_shard)))
            .collect();
        Self {
            shards,
            ttl,
            stats: CacheStats::default(),
        }
    }

    fn shard_for(&self, key: &str) -> &Mutex<Shard<V>> {
        let idx = (fnv1a(key) as usize) % self.shards.len();
        &self.shards[idx]
    }

    /// Retrieve a value, returning `None` on miss or TTL expiry.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut shard = self.shard_for(key).lock().unwrap();
        let expired = match (&self.ttl, shard.map.get(key)) {
            (Some(ttl), Some(entry)) => entry.inserted_at.elapsed() > *ttl,
            _ => false,
        };
        if expired {
            shard.map.remove(key);
            if let Some(pos) = shard.order.iter().position(|k| k == key) {
                shard.order.remove(pos);
            }
            self.stats.expirations.fetch_add(1, Ordering::Relaxed);
            self.stats.misses.fetch_add(1, Ordering::Relaxed);
            return None;
        }
        if let Some(entry) = shard.map.get(key) {
            let value = entry.value.clone();
            shard.touch(key);
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            Some(value)
        } else {
            self.stats.misses.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    /// Insert or replace a value, evicting the shard's LRU entry if full.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let mut shard = self.shard_for(&key).lock().unwrap();
        if !shard.map.contains_key(&key) {
            shard.order.push(key.clone());
        } else {
            shard.touch(&key);
        }
        shard.map.insert(
            key,
            Entry {
                value,
                inserted_at: Instant::now(),
            },
        );
        if shard.evict_if_needed() {
            self.stats.evictions.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Total number of live entries across all shards.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.lock().unwrap().map.len()).sum()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Access aggregate hit/miss/eviction statistics.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
