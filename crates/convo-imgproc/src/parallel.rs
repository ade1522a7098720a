use std::ops::Range;

use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// A contiguous range of image rows assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    /// The first row of the range.
    pub start_row: usize,
    /// The number of rows in the range.
    pub count: usize,
}

impl RowRange {
    /// One past the last row of the range.
    pub fn end_row(&self) -> usize {
        self.start_row + self.count
    }

    /// The rows of the range.
    pub fn rows(&self) -> Range<usize> {
        self.start_row..self.end_row()
    }

    /// Whether the range holds no rows.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// The number of workers used when the caller does not choose one.
///
/// Matches the hardware concurrency reported by the rayon runtime.
pub fn default_worker_count() -> usize {
    rayon::current_num_threads()
}

/// Split `[0, height)` into at most `worker_count` contiguous row ranges.
///
/// Every range gets `height / worker_count` rows and the first `height % worker_count`
/// ranges get one extra row. Ranges are returned in increasing row order and empty ranges are
/// skipped, so fewer than `worker_count` ranges are returned when `height < worker_count`.
///
/// # Example
///
/// ```
/// use convo_imgproc::parallel::{partition_rows, RowRange};
///
/// let ranges = partition_rows(10, 4);
/// assert_eq!(ranges[0], RowRange { start_row: 0, count: 3 });
/// assert_eq!(ranges[3], RowRange { start_row: 8, count: 2 });
/// ```
pub fn partition_rows(height: usize, worker_count: usize) -> Vec<RowRange> {
    if worker_count == 0 {
        return Vec::new();
    }

    let base = height / worker_count;
    let remainder = height % worker_count;

    let mut ranges = Vec::with_capacity(worker_count.min(height));
    let mut start_row = 0;
    for i in 0..worker_count {
        let count = base + usize::from(i < remainder);
        if count == 0 {
            break;
        }
        ranges.push(RowRange { start_row, count });
        start_row += count;
    }

    ranges
}

/// Run a batch of tasks concurrently on a dedicated pool of at most `worker_count` threads.
///
/// The pool holds one thread per task, capped at `worker_count`, so no thread is started
/// without work to do. It is created for this batch only and torn down before returning. The
/// call blocks until every task has completed.
///
/// # Arguments
///
/// * `worker_count` - The maximum number of threads of the pool, must be > 0.
/// * `tasks` - The tasks to run, each one is spawned exactly once.
pub fn run_batch<F>(worker_count: usize, tasks: Vec<F>) -> Result<(), ParallelError>
where
    F: FnOnce() + Send,
{
    if worker_count == 0 {
        return Err(ParallelError::InvalidThreadCount(worker_count));
    }

    if tasks.is_empty() {
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count.min(tasks.len()))
        .thread_name(|i| format!("convo-worker-{i}"))
        .build()
        .map_err(|e| ParallelError::BuildError(e.to_string()))?;

    log::debug!(
        "dispatching {} tasks on {} threads",
        tasks.len(),
        pool.current_num_threads()
    );

    pool.scope(|s| {
        for task in tasks {
            s.spawn(move |_| task());
        }
    });

    Ok(())
}
