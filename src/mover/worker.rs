//! The mover event loop.
//!
//! Waits on the control and work channels, relocates each accepted path into
//! the destination directory, and releases its completion guard on exit.

use std::path::Path;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::fs_ops::{hint_for, relocate};

use super::batch::{policy_for, PendingBatch};
use super::context::{ControlSignal, MoverContext};
use super::path::destination_path;

/// Counters reported when a mover finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoverStats {
    /// Paths taken off the work channel
    pub received: u64,
    /// Renames that succeeded
    pub moved: u64,
    /// Renames that failed (logged, not retried)
    pub failed: u64,
    /// Paths only logged because of dry-run
    pub skipped: u64,
}

/// Spawn `run` on the current runtime.
pub fn spawn(ctx: MoverContext, config: Config) -> JoinHandle<MoverStats> {
    tokio::spawn(run(ctx, config))
}

/// Run the mover loop until a stop signal arrives or the work channel closes.
///
/// Selection between ready channels is random, so neither input starves.
/// Paths already accepted into a pending batch are relocated before returning;
/// paths still sitting in the work channel are not.
pub async fn run(ctx: MoverContext, config: Config) -> MoverStats {
    let MoverContext {
        mut control,
        mut work,
        completion,
    } = ctx;
    // Released on every exit path, including unwinding.
    let _completion = completion;

    let policy = policy_for(&config.batch);
    let mut relocator = Relocator::new(&config);
    let mut pending = PendingBatch::default();
    let mut control_open = true;

    info!(
        dest_dir = %config.dest_dir,
        batch_size = config.batch.size,
        dry_run = config.dry_run,
        "mover started"
    );

    loop {
        let deadline = pending.deadline(policy.as_ref());

        tokio::select! {
            signal = control.recv(), if control_open => match signal {
                Some(ControlSignal::Stop) => {
                    info!("mover stopping on interrupt.");
                    break;
                }
                Some(ControlSignal::Flush) => {
                    debug!(pending = pending.len(), "flush requested");
                    relocator.flush(&mut pending).await;
                }
                None => {
                    debug!("control channel closed; only the work channel can end the loop now");
                    control_open = false;
                }
            },
            item = work.recv() => match item {
                Some(source) => {
                    relocator.stats.received += 1;
                    let now = Instant::now();
                    pending.push(source, now);
                    if pending.should_flush(policy.as_ref(), now) {
                        relocator.flush(&mut pending).await;
                    }
                }
                None => {
                    info!("work channel closed; no more paths to move");
                    break;
                }
            },
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                debug!(pending = pending.len(), "batch wait elapsed");
                relocator.flush(&mut pending).await;
            }
        }
    }

    if !pending.is_empty() {
        relocator.flush(&mut pending).await;
    }

    let stats = relocator.stats;
    info!(
        received = stats.received,
        moved = stats.moved,
        failed = stats.failed,
        skipped = stats.skipped,
        "mover finished."
    );
    stats
}

struct Relocator {
    dest_dir: String,
    dry_run: bool,
    stats: MoverStats,
}

impl Relocator {
    fn new(config: &Config) -> Self {
        Self {
            dest_dir: config.dest_dir.clone(),
            dry_run: config.dry_run,
            stats: MoverStats::default(),
        }
    }

    async fn flush(&mut self, pending: &mut PendingBatch) {
        for source in pending.take() {
            self.relocate_one(source).await;
        }
    }

    async fn relocate_one(&mut self, source: String) {
        let dest = destination_path(&source, &self.dest_dir);

        if self.dry_run {
            info!(src = %source, dest = %dest, "dry-run: would move file");
            self.stats.skipped += 1;
            return;
        }

        let outcome = {
            let (src, dst) = (source.clone(), dest.clone());
            tokio::task::spawn_blocking(move || relocate(Path::new(&src), Path::new(&dst))).await
        };

        match outcome {
            Ok(Ok(())) => {
                debug!(src = %source, dest = %dest, "file moved");
                self.stats.moved += 1;
            }
            Ok(Err(e)) => {
                error!(
                    src = %source,
                    dest = %dest,
                    code = e.code(),
                    cross_device = e.is_cross_device(),
                    error = %e.source,
                    hint = hint_for(&e.source).unwrap_or(""),
                    "file move failed!"
                );
                self.stats.failed += 1;
            }
            Err(join_err) => {
                error!(src = %source, dest = %dest, error = %join_err, "file move task did not complete");
                self.stats.failed += 1;
            }
        }
    }
}
