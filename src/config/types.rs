//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::paths;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// When the mover triggers relocations for accepted items.
///
/// `size == 1` with a zero `max_wait` is the immediate, one-at-a-time mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Flush once this many items are pending (must be >= 1)
    pub size: usize,
    /// Flush once the oldest pending item has waited this long (zero = no timer)
    pub max_wait: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            size: 1,
            max_wait: Duration::ZERO,
        }
    }
}

impl BatchConfig {
    pub fn is_immediate(&self) -> bool {
        self.size <= 1
    }
}

/// Runtime configuration used by the mover.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target directory, kept as text so a trailing separator survives.
    /// Empty until a config file or `--dest-dir` names one.
    pub dest_dir: String,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Batching thresholds
    pub batch: BatchConfig,
    /// If true, log what would move but leave the filesystem alone
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dest_dir: String::new(),
            log_level: LogLevel::Normal,
            log_file: paths::default_log_path().ok(),
            batch: BatchConfig::default(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Construct a Config for a destination directory; other fields use defaults.
    pub fn new(dest_dir: impl Into<String>) -> Self {
        Self {
            dest_dir: dest_dir.into(),
            ..Default::default()
        }
    }

    /// Builder-style batch override, handy in tests and embedding code.
    pub fn with_batch(mut self, size: usize, max_wait: Duration) -> Self {
        self.batch = BatchConfig { size, max_wait };
        self
    }
}
