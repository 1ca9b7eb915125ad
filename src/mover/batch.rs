//! Batching strategy.
//!
//! A `FlushPolicy` decides when accepted paths are handed to the relocation
//! step. Batching never merges renames; it only delays them.

use std::time::Duration;
use tokio::time::Instant;

use crate::config::BatchConfig;

/// Decides whether pending work should be flushed now, and when at the latest.
pub trait FlushPolicy: Send + Sync + std::fmt::Debug {
    /// `pending` items are buffered; the oldest was accepted at `oldest`.
    fn should_flush(&self, pending: usize, oldest: Instant, now: Instant) -> bool;

    /// Instant at which a batch whose oldest item arrived at `oldest` must flush.
    fn deadline(&self, oldest: Instant) -> Option<Instant>;
}

/// Flush every item as soon as it arrives.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl FlushPolicy for Immediate {
    fn should_flush(&self, pending: usize, _oldest: Instant, _now: Instant) -> bool {
        pending > 0
    }

    fn deadline(&self, _oldest: Instant) -> Option<Instant> {
        None
    }
}

/// Flush when `max_items` are pending or the oldest has waited `max_wait`.
#[derive(Debug, Clone, Copy)]
pub struct Batched {
    max_items: usize,
    max_wait: Option<Duration>,
}

impl Batched {
    pub fn new(max_items: usize, max_wait: Duration) -> Self {
        Self {
            max_items: max_items.max(1),
            max_wait: (!max_wait.is_zero()).then_some(max_wait),
        }
    }
}

impl FlushPolicy for Batched {
    fn should_flush(&self, pending: usize, oldest: Instant, now: Instant) -> bool {
        if pending == 0 {
            return false;
        }
        if pending >= self.max_items {
            return true;
        }
        self.deadline(oldest).is_some_and(|d| now >= d)
    }

    fn deadline(&self, oldest: Instant) -> Option<Instant> {
        self.max_wait.map(|w| oldest + w)
    }
}

/// Pick the policy matching the configured thresholds.
pub fn policy_for(cfg: &BatchConfig) -> Box<dyn FlushPolicy> {
    if cfg.is_immediate() {
        Box::new(Immediate)
    } else {
        Box::new(Batched::new(cfg.size, cfg.max_wait))
    }
}

/// Items accepted but not yet relocated.
#[derive(Debug, Default)]
pub struct PendingBatch {
    items: Vec<String>,
    oldest: Option<Instant>,
}

impl PendingBatch {
    pub fn push(&mut self, item: String, now: Instant) {
        if self.items.is_empty() {
            self.oldest = Some(now);
        }
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn oldest(&self) -> Option<Instant> {
        self.oldest
    }

    /// Take everything pending, in arrival order.
    pub fn take(&mut self) -> Vec<String> {
        self.oldest = None;
        std::mem::take(&mut self.items)
    }

    pub fn should_flush(&self, policy: &dyn FlushPolicy, now: Instant) -> bool {
        self.oldest
            .is_some_and(|oldest| policy.should_flush(self.items.len(), oldest, now))
    }

    pub fn deadline(&self, policy: &dyn FlushPolicy) -> Option<Instant> {
        self.oldest.and_then(|oldest| policy.deadline(oldest))
    }
}
