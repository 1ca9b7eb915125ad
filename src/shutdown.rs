//! Process-wide shutdown coordination.
//! A ctrlc handler (SIGINT/SIGTERM) sets a flag and tells the mover to stop.
//!
//! Notes:
//! - Relaxed atomics are sufficient for a one-way "stop" flag.
//! - The handler uses `try_send`: it never blocks, and a stop already queued is enough.

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;

use crate::mover::ControlSignal;
use crate::output as out;

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Request a cooperative shutdown (idempotent).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

/// Check whether a shutdown has been requested.
#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Test/utility-only: clear the shutdown flag.
#[cfg(test)]
#[inline]
pub fn reset() {
    SHUTDOWN.store(false, Ordering::Relaxed);
}

/// Deliver a stop to the mover on behalf of a signal. Returns false if the
/// mover is already gone or a signal is already waiting in the channel.
pub fn interrupt(control: &mpsc::Sender<ControlSignal>) -> bool {
    request();
    control.try_send(ControlSignal::Stop).is_ok()
}

/// Install the process signal handler. Can only be called once per process.
pub fn install_interrupt_handler(control: mpsc::Sender<ControlSignal>) -> Result<()> {
    ctrlc::set_handler(move || {
        out::print_warn("Received interrupt; stopping mover...");
        interrupt(&control);
    })
    .context("failed to install signal handler")
}
