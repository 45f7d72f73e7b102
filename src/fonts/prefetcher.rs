//! Predicts which fonts are about to be needed and warms the cache for them.
//!
//! Tracks, per font key, an exponential moving average of the interval
//! between accesses and a co-occurrence count with every other font seen in
//! the same page. On each access the top co-occurring neighbors not already
//! cached are pushed onto a priority queue, drained by a background worker
//! at a fixed cadence via a caller-supplied loader callback. Prefetching is
//! advisory: a miss just falls through to on-demand resolution, so a wrong
//! or late prediction never produces wrong output, only a wasted load.

use std::collections::{BinaryHeap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Smoothing factor for the inter-access interval EMA. Lower is smoother.
const EMA_ALPHA: f64 = 0.3;

/// Access-pattern map never grows past this many distinct font keys; the
/// least-recently-accessed entry is evicted to make room for a new one.
const MAX_TRACKED_FONTS: usize = 2048;

/// How many top co-occurring neighbors get enqueued per access.
const NEIGHBORS_PER_ACCESS: usize = 3;

struct AccessPattern {
    last_access: Instant,
    mean_interval: Option<Duration>,
    co_occurrence: HashMap<String, u32>,
}

impl AccessPattern {
    fn new(now: Instant) -> Self {
        Self { last_access: now, mean_interval: None, co_occurrence: HashMap::new() }
    }

    fn record_access(&mut self, now: Instant) {
        let gap = now.saturating_duration_since(self.last_access);
        self.mean_interval = Some(match self.mean_interval {
            None => gap,
            Some(prev) => {
                let prev_secs = prev.as_secs_f64();
                let gap_secs = gap.as_secs_f64();
                Duration::from_secs_f64(EMA_ALPHA * gap_secs + (1.0 - EMA_ALPHA) * prev_secs)
            }
        });
        self.last_access = now;
    }

    fn note_co_occurrence(&mut self, other: &str) {
        *self.co_occurrence.entry(other.to_string()).or_insert(0) += 1;
    }

    fn top_neighbors(&self, n: usize) -> Vec<String> {
        let mut pairs: Vec<(&String, &u32)> = self.co_occurrence.iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        pairs.into_iter().take(n).map(|(k, _)| k.clone()).collect()
    }
}

/// A pending prefetch request, ordered by priority (higher first) in the
/// binary heap backing the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PrefetchRequest {
    priority: u32,
    key: String,
}

impl Ord for PrefetchRequest {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority.cmp(&other.priority).then_with(|| other.key.cmp(&self.key))
    }
}

impl PartialOrd for PrefetchRequest {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

struct Shared {
    patterns: Mutex<HashMap<String, AccessPattern>>,
    order: Mutex<Vec<String>>,
    queue: Mutex<BinaryHeap<PrefetchRequest>>,
}

/// Tracks font access patterns and drives a priority queue of prefetch
/// candidates. Disabled instances (`enabled == false`, matching
/// [`crate::config::ExtractionConfig::prefetch_enabled`]) record nothing and
/// cost a branch per call.
pub struct FontPrefetcher {
    shared: Arc<Shared>,
    enabled: bool,
    worker: Mutex<Option<(Arc<AtomicBool>, JoinHandle<()>)>>,
}

impl FontPrefetcher {
    pub fn new(enabled: bool) -> Self {
        Self {
            shared: Arc::new(Shared {
                patterns: Mutex::new(HashMap::new()),
                order: Mutex::new(Vec::new()),
                queue: Mutex::new(BinaryHeap::new()),
            }),
            enabled,
            worker: Mutex::new(None),
        }
    }

    pub fn from_config(config: &crate::config::ExtractionConfig) -> Self {
        Self::new(config.prefetch_enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record that `key` was accessed alongside every key in `co_resident`
    /// (typically the other fonts referenced by the same page's resource
    /// dictionary), then enqueue its top not-yet-queued neighbors.
    pub fn record_access(&self, key: &str, co_resident: &[&str]) {
        if !self.enabled {
            return;
        }
        let now = Instant::now();
        let neighbors = {
            let mut patterns = self.shared.patterns.lock().unwrap();
            self.touch_order(key);
            if !patterns.contains_key(key) && patterns.len() >= MAX_TRACKED_FONTS {
                self.evict_lru(&mut patterns);
            }
            let entry = patterns.entry(key.to_string()).or_insert_with(|| AccessPattern::new(now));
            entry.record_access(now);
            for &other in co_resident {
                if other != key {
                    entry.note_co_occurrence(other);
                }
            }
            entry.top_neighbors(NEIGHBORS_PER_ACCESS)
        };

        let mut queue = self.shared.queue.lock().unwrap();
        for (rank, neighbor) in neighbors.into_iter().enumerate() {
            queue.push(PrefetchRequest { priority: (NEIGHBORS_PER_ACCESS - rank) as u32, key: neighbor });
        }
    }

    fn touch_order(&self, key: &str) {
        let mut order = self.shared.order.lock().unwrap();
        if let Some(pos) = order.iter().position(|k| k == key) {
            let k = order.remove(pos);
            order.push(k);
        } else {
            order.push(key.to_string());
        }
    }

    fn evict_lru(&self, patterns: &mut HashMap<String, AccessPattern>) {
        let mut order = self.shared.order.lock().unwrap();
        if !order.is_empty() {
            let lru_key = order.remove(0);
            patterns.remove(&lru_key);
        }
    }

    /// Mean observed interval between accesses for `key`, if it has been
    /// accessed at least twice.
    pub fn mean_interval(&self, key: &str) -> Option<Duration> {
        self.shared.patterns.lock().unwrap().get(key).and_then(|p| p.mean_interval)
    }

    /// Pop the single highest-priority pending prefetch request, if any.
    pub fn pop_request(&self) -> Option<String> {
        self.shared.queue.lock().unwrap().pop().map(|r| r.key)
    }

    pub fn queue_len(&self) -> usize {
        self.shared.queue.lock().unwrap().len()
    }

    pub fn tracked_font_count(&self) -> usize {
        self.shared.patterns.lock().unwrap().len()
    }

    /// Start a background thread that drains the queue every `cadence`,
    /// calling `loader` for each popped key. No-op if prefetch is disabled
    /// or a worker is already running. `loader` should be cheap to call
    /// when its key is already cached; a default no-op loader is fine for
    /// callers that only want the access-pattern statistics.
    pub fn start_worker<F>(&self, cadence: Duration, loader: F)
    where
        F: Fn(&str) + Send + 'static,
    {
        if !self.enabled {
            return;
        }
        let mut worker = self.worker.lock().unwrap();
        if worker.is_some() {
            return;
        }
        let stop = Arc::new(AtomicBool::new(false));
        let stop_clone = Arc::clone(&stop);
        let shared = Arc::clone(&self.shared);
        let handle = std::thread::spawn(move || {
            while !stop_clone.load(Ordering::Relaxed) {
                std::thread::sleep(cadence);
                while let Some(req) = shared.queue.lock().unwrap().pop() {
                    loader(&req.key);
                }
            }
        });
        *worker = Some((stop, handle));
    }

    /// Stop the background worker, if running, and wait for it to exit.
    pub fn stop_worker(&self) {
        if let Some((stop, handle)) = self.worker.lock().unwrap().take() {
            stop.store(true, Ordering::Relaxed);
            let _ = handle.join();
        }
    }
}

impl Drop for FontPrefetcher {
    fn drop(&mut self) {
        self.stop_worker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_prefetcher_records_nothing() {
        let prefetcher = FontPrefetcher::new(false);
        prefetcher.record_access("Helvetica", &["Arial"]);
        assert_eq!(prefetcher.tracked_font_count(), 0);
        assert_eq!(prefetcher.queue_len(), 0);
    }

    #[test]
    fn co_occurring_fonts_are_enqueued() {
        let prefetcher = FontPrefetcher::new(true);
        prefetcher.record_access("Helvetica", &["Arial", "TimesNewRoman"]);
        assert!(prefetcher.queue_len() >= 2);
        let mut popped = Vec::new();
        while let Some(k) = prefetcher.pop_request() {
            popped.push(k);
        }
        assert!(popped.contains(&"Arial".to_string()));
        assert!(popped.contains(&"TimesNewRoman".to_string()));
    }

    #[test]
    fn repeated_access_builds_mean_interval() {
        let prefetcher = FontPrefetcher::new(true);
        prefetcher.record_access("Helvetica", &[]);
        assert!(prefetcher.mean_interval("Helvetica").is_none());
        std::thread::sleep(Duration::from_millis(5));
        prefetcher.record_access("Helvetica", &[]);
        assert!(prefetcher.mean_interval("Helvetica").is_some());
    }

    #[test]
    fn tracked_fonts_never_exceed_max_and_evict_lru() {
        let prefetcher = FontPrefetcher::new(true);
        for i in 0..(MAX_TRACKED_FONTS + 10) {
            prefetcher.record_access(&format!("Font{i}"), &[]);
        }
        assert_eq!(prefetcher.tracked_font_count(), MAX_TRACKED_FONTS);
        // The earliest fonts should have been evicted.
        assert!(prefetcher.mean_interval("Font0").is_none());
    }

    #[test]
    fn worker_drains_queue_via_loader() {
        let prefetcher = FontPrefetcher::new(true);
        prefetcher.record_access("Helvetica", &["Arial"]);
        let loaded = Arc::new(Mutex::new(Vec::new()));
        let loaded_clone = Arc::clone(&loaded);
        prefetcher.start_worker(Duration::from_millis(5), move |key| {
            loaded_clone.lock().unwrap().push(key.to_string());
        });
        std::thread::sleep(Duration::from_millis(40));
        prefetcher.stop_worker();
        assert!(!loaded.lock().unwrap().is_empty());
    }
}
