//! Channels and context handed to a mover.

use tokio::sync::mpsc;

use crate::errors::MoverClosed;
use crate::lifecycle::{CompletionGuard, WaitGroup};

/// Bound of both mover channels. tokio has no rendezvous channel, so one slot
/// is the closest to an unbuffered hand-off: a sender waits while the mover
/// still holds the previous message.
pub const CHANNEL_CAPACITY: usize = 1;

/// Out-of-band instructions for a running mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ControlSignal {
    /// Leave the loop. Paths still queued on the work channel are not drained.
    Stop,
    /// Relocate everything buffered by the batch policy without stopping.
    Flush,
}

/// Receiving side of a mover, plus the guard it releases on exit.
#[derive(Debug)]
pub struct MoverContext {
    pub(crate) control: mpsc::Receiver<ControlSignal>,
    pub(crate) work: mpsc::Receiver<String>,
    pub(crate) completion: CompletionGuard,
}

impl MoverContext {
    /// Assemble a context from existing receivers.
    pub fn new(
        control: mpsc::Receiver<ControlSignal>,
        work: mpsc::Receiver<String>,
        completion: CompletionGuard,
    ) -> Self {
        Self {
            control,
            work,
            completion,
        }
    }
}

/// Sending side of a mover, held by producers and the supervisor.
#[derive(Debug, Clone)]
pub struct MoverHandle {
    control: mpsc::Sender<ControlSignal>,
    work: mpsc::Sender<String>,
}

impl MoverHandle {
    /// Queue one source path. Waits while the mover is busy.
    pub async fn submit(&self, path: impl Into<String>) -> Result<(), MoverClosed> {
        self.work
            .send(path.into())
            .await
            .map_err(|_| MoverClosed("work items"))
    }

    pub async fn signal(&self, signal: ControlSignal) -> Result<(), MoverClosed> {
        self.control
            .send(signal)
            .await
            .map_err(|_| MoverClosed("control signals"))
    }

    /// Ask the mover to stop.
    pub async fn stop(&self) -> Result<(), MoverClosed> {
        self.signal(ControlSignal::Stop).await
    }

    /// Split into raw senders, e.g. to hand the control side to a signal handler
    /// and let the producer close the work side when its input runs out.
    pub fn into_parts(self) -> (mpsc::Sender<ControlSignal>, mpsc::Sender<String>) {
        (self.control, self.work)
    }
}

/// Create the channel pair for one mover and register it with `pool`.
pub fn channels(pool: &WaitGroup) -> (MoverHandle, MoverContext) {
    let (control_tx, control_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (work_tx, work_rx) = mpsc::channel(CHANNEL_CAPACITY);
    (
        MoverHandle {
            control: control_tx,
            work: work_tx,
        },
        MoverContext::new(control_rx, work_rx, pool.guard()),
    )
}
