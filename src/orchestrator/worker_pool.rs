//! Worker pool scheduling pages across threads, static-batch or
//! dynamic-work-stealing, with cancellation and first-error-wins semantics.

use crate::config::{ExtractionConfig, SchedulingMode};
use crate::error::{Error, Result};
use crate::orchestrator::cancellation::CancellationToken;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;

/// Bounded worker pool over `std::thread::scope`, driven by a
/// [`SchedulingMode`]. Results are always delivered index-ordered, regardless
/// of which worker finished which page first.
pub struct WorkerPool {
    pub(crate) min_workers: usize,
    pub(crate) max_workers: usize,
    scheduling: SchedulingMode,
}

impl WorkerPool {
    pub fn new(min_workers: usize, max_workers: usize, scheduling: SchedulingMode) -> Self {
        let min_workers = min_workers.max(1);
        Self {
            min_workers,
            max_workers: max_workers.max(min_workers),
            scheduling,
        }
    }

    /// Build a pool sized from an [`ExtractionConfig`].
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(config.min_workers, config.max_workers, config.scheduling)
    }

    pub(crate) fn worker_count(&self, page_count: usize) -> usize {
        self.max_workers.min(page_count.max(1)).max(self.min_workers.min(page_count.max(1)))
    }

    /// Process every entry in `pages` with `work`, honoring scheduling mode
    /// and cancellation. The caller-supplied `work` closure receives each
    /// page index and returns the extracted value for it.
    ///
    /// On cancellation, the aggregate result is
    /// [`Error::CancellationRequested`]. On the first processing error, that
    /// error is returned and later errors from still-running workers are
    /// discarded.
    pub fn run<T, F>(&self, pages: &[usize], token: &CancellationToken, work: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(usize) -> Result<T> + Sync,
    {
        let worker_count = self.worker_count(pages.len());
        self.run_with_worker_count(pages, token, work, worker_count)
    }

    pub(crate) fn run_with_worker_count<T, F>(
        &self,
        pages: &[usize],
        token: &CancellationToken,
        work: F,
        worker_count: usize,
    ) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(usize) -> Result<T> + Sync,
    {
        if pages.is_empty() {
            return Ok(Vec::new());
        }
        if token.is_cancelled() {
            return Err(cancelled());
        }

        let results: Mutex<Vec<Option<T>>> = Mutex::new((0..pages.len()).map(|_| None).collect());
        let first_error: Mutex<Option<Error>> = Mutex::new(None);

        match self.scheduling {
            SchedulingMode::StaticBatch { batch_size } => {
                let batch_size = batch_size.max(1);
                let batches = static_batches(pages, batch_size, worker_count.max(1));
                thread::scope(|scope| {
                    for batch in &batches {
                        scope.spawn(|| {
                            for &(result_idx, page) in batch {
                                if token.is_cancelled() || first_error.lock().unwrap().is_some() {
                                    return;
                                }
                                record(&results, &first_error, result_idx, work(page));
                            }
                        });
                    }
                });
            }
            SchedulingMode::DynamicWorkStealing => {
                let cursor = AtomicUsize::new(0);
                thread::scope(|scope| {
                    for _ in 0..worker_count.max(1) {
                        scope.spawn(|| loop {
                            if token.is_cancelled() || first_error.lock().unwrap().is_some() {
                                return;
                            }
                            let idx = cursor.fetch_add(1, Ordering::SeqCst);
                            if idx >= pages.len() {
                                return;
                            }
                            record(&results, &first_error, idx, work(pages[idx]));
                        });
                    }
                });
            }
        }

        if let Some(err) = first_error.into_inner().unwrap() {
            return Err(err);
        }
        if token.is_cancelled() {
            return Err(cancelled());
        }

        results
            .into_inner()
            .unwrap()
            .into_iter()
            .map(|slot| slot.ok_or_else(cancelled))
            .collect()
    }
}

fn cancelled() -> Error {
    Error::CancellationRequested {
        operation: "extraction orchestrator run".to_string(),
    }
}

fn record<T>(
    results: &Mutex<Vec<Option<T>>>,
    first_error: &Mutex<Option<Error>>,
    idx: usize,
    outcome: Result<T>,
) {
    match outcome {
        Ok(value) => results.lock().unwrap()[idx] = Some(value),
        Err(err) => {
            let mut slot = first_error.lock().unwrap();
            if slot.is_none() {
                *slot = Some(err);
            }
        }
    }
}

/// Partition `pages` into `worker_count` runs of up to `batch_size`
/// contiguous pages each, preserving `(result_index, page)` pairs so results
/// land back at their original position.
fn static_batches(pages: &[usize], batch_size: usize, worker_count: usize) -> Vec<Vec<(usize, usize)>> {
    let indexed: Vec<(usize, usize)> = pages.iter().copied().enumerate().collect();
    let chunks: Vec<Vec<(usize, usize)>> = indexed.chunks(batch_size).map(|c| c.to_vec()).collect();

    if chunks.len() <= worker_count {
        return chunks;
    }

    // More chunks than workers: fold extra chunks round-robin onto the first
    // `worker_count` runs so a worker count bound is still honored.
    let mut runs: Vec<Vec<(usize, usize)>> = vec![Vec::new(); worker_count];
    for (i, chunk) in chunks.into_iter().enumerate() {
        runs[i % worker_count].extend(chunk);
    }
    runs.into_iter().filter(|r| !r.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_batching_processes_all_pages_in_order() {
        let pool = WorkerPool::new(1, 4, SchedulingMode::StaticBatch { batch_size: 2 });
        let pages: Vec<usize> = (0..10).collect();
        let token = CancellationToken::new();
        let result = pool.run(&pages, &token, |p| Ok(p * 2)).unwrap();
        assert_eq!(result, (0..10).map(|p| p * 2).collect::<Vec<_>>());
    }

    #[test]
    fn dynamic_work_stealing_processes_all_pages_in_order() {
        let pool = WorkerPool::new(1, 4, SchedulingMode::DynamicWorkStealing);
        let pages: Vec<usize> = (0..25).collect();
        let token = CancellationToken::new();
        let result = pool.run(&pages, &token, |p| Ok(p + 1)).unwrap();
        assert_eq!(result, (0..25).map(|p| p + 1).collect::<Vec<_>>());
    }

    #[test]
    fn first_error_wins() {
        let pool = WorkerPool::new(1, 4, SchedulingMode::DynamicWorkStealing);
        let pages: Vec<usize> = (0..20).collect();
        let token = CancellationToken::new();
        let result: Result<Vec<()>> = pool.run(&pages, &token, |p| {
            if p == 5 {
                Err(Error::Unsupported("boom".to_string()))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn pre_cancelled_token_returns_cancellation_error() {
        let pool = WorkerPool::new(1, 2, SchedulingMode::DynamicWorkStealing);
        let pages: Vec<usize> = (0..5).collect();
        let token = CancellationToken::new();
        token.cancel();
        let result: Result<Vec<()>> = pool.run(&pages, &token, |_| Ok(()));
        assert!(matches!(result, Err(Error::CancellationRequested { .. })));
    }

    #[test]
    fn empty_page_list_returns_empty_result() {
        let pool = WorkerPool::new(1, 4, SchedulingMode::DynamicWorkStealing);
        let token = CancellationToken::new();
        let result: Result<Vec<()>> = pool.run(&[], &token, |_| Ok(()));
        assert_eq!(result.unwrap().len(), 0);
    }
}
