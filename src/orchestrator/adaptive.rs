//! Adaptive worker pool: samples process memory pressure and shrinks the
//! effective worker count toward `min_workers` when a high-water mark is
//! crossed, otherwise runs at the pool's normal bound.

use crate::config::{ExtractionConfig, SchedulingMode};
use crate::error::Result;
use crate::orchestrator::cancellation::CancellationToken;
use crate::orchestrator::worker_pool::WorkerPool;

/// A source of process memory usage samples, in bytes.
pub trait MemorySampler: Send + Sync {
    fn sample_bytes(&self) -> Option<u64>;
}

/// Reads `VmRSS` from `/proc/self/status`. Returns `None` on platforms
/// without a `/proc` filesystem or if the field can't be parsed, in which
/// case the adaptive pool falls back to its normal worker bound.
pub struct ProcStatusMemorySampler;

impl MemorySampler for ProcStatusMemorySampler {
    fn sample_bytes(&self) -> Option<u64> {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        for line in status.lines() {
            if let Some(rest) = line.strip_prefix("VmRSS:") {
                let kb: u64 = rest.trim().trim_end_matches("kB").trim().parse().ok()?;
                return Some(kb * 1024);
            }
        }
        None
    }
}

/// Worker pool that samples memory pressure before each run and clamps
/// worker count toward `min_workers` when `high_water_mark_bytes` is crossed.
pub struct AdaptiveWorkerPool {
    base: WorkerPool,
    high_water_mark_bytes: u64,
    sampler: Box<dyn MemorySampler>,
}

impl AdaptiveWorkerPool {
    pub fn new(min_workers: usize, max_workers: usize, scheduling: SchedulingMode, high_water_mark_bytes: u64) -> Self {
        Self {
            base: WorkerPool::new(min_workers, max_workers, scheduling),
            high_water_mark_bytes,
            sampler: Box::new(ProcStatusMemorySampler),
        }
    }

    /// Build from an [`ExtractionConfig`], with an explicit high-water mark
    /// since the config carries no memory budget of its own.
    pub fn from_config(config: &ExtractionConfig, high_water_mark_bytes: u64) -> Self {
        Self::new(config.min_workers, config.max_workers, config.scheduling, high_water_mark_bytes)
    }

    /// Override the memory sampler, e.g. with a deterministic fake in tests.
    pub fn with_sampler(mut self, sampler: Box<dyn MemorySampler>) -> Self {
        self.sampler = sampler;
        self
    }

    fn effective_worker_count(&self, page_count: usize) -> usize {
        let baseline = self.base.worker_count(page_count);
        match self.sampler.sample_bytes() {
            Some(sampled) if sampled >= self.high_water_mark_bytes => {
                self.base.min_workers.min(baseline).max(1)
            }
            _ => baseline,
        }
    }

    pub fn run<T, F>(&self, pages: &[usize], token: &CancellationToken, work: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(usize) -> Result<T> + Sync,
    {
        let worker_count = self.effective_worker_count(pages.len());
        self.base.run_with_worker_count(pages, token, work, worker_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSampler(u64);
    impl MemorySampler for FixedSampler {
        fn sample_bytes(&self) -> Option<u64> {
            Some(self.0)
        }
    }

    #[test]
    fn under_pressure_shrinks_toward_min_workers() {
        let pool = AdaptiveWorkerPool::new(1, 8, SchedulingMode::DynamicWorkStealing, 1_000)
            .with_sampler(Box::new(FixedSampler(2_000)));
        assert_eq!(pool.effective_worker_count(100), 1);
    }

    #[test]
    fn under_budget_uses_normal_bound() {
        let pool = AdaptiveWorkerPool::new(2, 8, SchedulingMode::DynamicWorkStealing, 1_000)
            .with_sampler(Box::new(FixedSampler(10)));
        assert_eq!(pool.effective_worker_count(100), 8);
    }

    #[test]
    fn run_still_processes_all_pages_under_pressure() {
        let pool = AdaptiveWorkerPool::new(1, 4, SchedulingMode::DynamicWorkStealing, 1)
            .with_sampler(Box::new(FixedSampler(1_000_000)));
        let pages: Vec<usize> = (0..12).collect();
        let token = CancellationToken::new();
        let result = pool.run(&pages, &token, |p| Ok(p)).unwrap();
        assert_eq!(result, pages);
    }
}
