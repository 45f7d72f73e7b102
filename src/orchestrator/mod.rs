//! Concurrent extraction orchestrator: a worker pool for fanning page
//! extraction out across threads, plus a push-based streaming path for
//! bounded-memory consumption of results.
//!
//! - [`worker_pool`]: static-batch or dynamic-work-stealing scheduling over
//!   `std::thread::scope`, first-error-wins, index-ordered results.
//! - [`adaptive`]: a worker pool that samples process memory pressure and
//!   shrinks toward the minimum worker count under load.
//! - [`cancellation`]: the token polled at page/batch boundaries.
//! - [`stream`]: per-page/per-block/per-text callbacks under a memory
//!   budget, and a bounded-chunk writer path.
//!
//! No async runtime or data-parallel crate sits underneath this: the rest of
//! the extraction pipeline is synchronous, so the orchestrator is built from
//! `std::thread` and `std::sync` rather than introducing one.

pub mod adaptive;
pub mod cancellation;
pub mod stream;
pub mod worker_pool;

pub use adaptive::{AdaptiveWorkerPool, MemorySampler, ProcStatusMemorySampler};
pub use cancellation::CancellationToken;
pub use stream::{ChunkedWriter, MemoryBudget, MemoryReservation, StreamProcessor, StreamSink};
pub use worker_pool::WorkerPool;
