//! CLI definition and parsing.
//!
//! Notes:
//! - Source paths come from positional arguments; none (or a single `-`) means stdin.
//! - --debug is a shorthand for --log-level debug.
//! - Flags override values from the XML config.

use clap::{Parser, ValueHint};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::types::{Config, LogLevel};

/// Move files into a destination directory, keeping their names.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move files into a destination directory, one rename per path"
)]
pub struct Args {
    /// Files to move. Omit, or pass `-`, to read one path per line from stdin.
    #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub paths: Vec<String>,

    /// Destination directory (overrides config). A trailing '/' is kept as given.
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub dest_dir: Option<String>,

    /// Config file to read instead of $FILE_MOVER_CONFIG or the default location.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Set log level: quiet, normal, info, debug.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,

    /// Relocate once this many paths are pending (1 = immediately).
    #[arg(long, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Relocate once the oldest pending path has waited this many milliseconds.
    #[arg(long, value_name = "MS")]
    pub batch_max_wait_ms: Option<u64>,

    /// Log what would move, but do not touch the filesystem.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the config file location in effect and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Write a template config file at the location in effect and exit.
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// True when paths should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.paths.is_empty() || (self.paths.len() == 1 && self.paths[0] == "-")
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(dir) = &self.dest_dir {
            cfg.dest_dir = dir.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(file.clone());
        }
        if let Some(size) = self.batch_size {
            cfg.batch.size = size;
        }
        if let Some(ms) = self.batch_max_wait_ms {
            cfg.batch.max_wait = Duration::from_millis(ms);
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
