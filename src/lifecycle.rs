//! Completion tracking for workers.
//!
//! A `WaitGroup` counts live workers. Each worker holds a `CompletionGuard`
//! taken from the group; dropping the guard (normal return, early return, or
//! unwind) releases it exactly once. `wait()` resolves when the count is zero.

use tokio_util::task::TaskTracker;
use tokio_util::task::task_tracker::TaskTrackerToken;

/// Counted completion primitive shared between a supervisor and its workers.
#[derive(Debug, Clone, Default)]
pub struct WaitGroup {
    tracker: TaskTracker,
}

impl WaitGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one worker. The returned guard must travel with the worker.
    pub fn guard(&self) -> CompletionGuard {
        CompletionGuard {
            _token: self.tracker.token(),
        }
    }

    /// Workers that have not signalled completion yet.
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Wait until every registered worker has released its guard.
    ///
    /// Guards may still be taken afterwards; a later `wait` covers them too.
    pub async fn wait(&self) {
        self.tracker.close();
        self.tracker.wait().await;
    }
}

/// Releases one slot of its `WaitGroup` when dropped.
#[derive(Debug)]
#[must_use = "dropping the guard signals completion immediately"]
pub struct CompletionGuard {
    _token: TaskTrackerToken,
}
