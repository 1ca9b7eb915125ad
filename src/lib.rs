//! Core library for `file_mover`.
//!
//! A mover task receives source paths and control signals over channels and
//! renames each file into a configured destination directory, keeping its
//! name. Supporting modules cover config loading, logging, and the CLI.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod lifecycle;
pub mod logging;
pub mod mover;
pub mod output;
pub mod producer;
pub mod shutdown;

pub use config::{
    BatchConfig, Config, LogLevel, default_config_path, default_log_path,
    load_config_from_xml_path, path_has_symlink_ancestor,
};
pub use errors::{MoverClosed, RelocationError};
pub use fs_ops::relocate;
pub use lifecycle::{CompletionGuard, WaitGroup};
pub use mover::{
    ControlSignal, MoverContext, MoverHandle, MoverStats, channels, destination_path,
};
