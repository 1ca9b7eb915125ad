//! Filesystem operations used by the mover.

mod atomic;
mod helpers;

pub use atomic::relocate;
pub use helpers::{hint_for, is_cross_device};
