//! The mover: consumes source paths from a channel and renames each file into
//! the configured destination directory.

pub mod batch;
mod context;
mod path;
mod worker;

pub use batch::{Batched, FlushPolicy, Immediate, PendingBatch, policy_for};
pub use context::{CHANNEL_CAPACITY, ControlSignal, MoverContext, MoverHandle, channels};
pub use path::{SEPARATOR, destination_path};
pub use worker::{MoverStats, run, spawn};
