//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request.
//!
//! Notes:
//! - This module only reads/writes the config file; directory validation happens elsewhere.
//! - Unknown XML fields are a hard error so misconfigurations surface early.

use anyhow::{bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{BatchConfig, Config, LogLevel};
use super::CONFIG_ENV_VAR;

/// Example shown in a fresh template. The element itself is left empty so an
/// unedited template fails validation instead of creating this directory.
const DEST_DIR_EXAMPLE: &str = "/srv/files/done";

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    dest_dir: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    #[serde(default, deserialize_with = "de_u64_trimmed_opt")]
    batch_size: Option<u64>,
    #[serde(default, deserialize_with = "de_u64_trimmed_opt")]
    batch_max_wait_ms: Option<u64>,
    dry_run: Option<bool>,
}

// Custom deserializer that trims surrounding whitespace for optional u64
fn de_u64_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| s.trim().parse::<u64>().ok()))
}

/// Outcome of resolving and reading the config file.
#[derive(Debug)]
pub enum LoadResult {
    /// A config file was found and parsed.
    Loaded { config: Config, path: PathBuf },
    /// No file at the default location; built-in defaults apply.
    Defaults { looked_at: PathBuf },
}

impl LoadResult {
    pub fn into_config(self) -> Config {
        match self {
            LoadResult::Loaded { config, .. } => config,
            LoadResult::Defaults { .. } => Config::default(),
        }
    }
}

// Map XmlConfig -> Config
fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    // Keep dest_dir verbatim apart from whitespace: a trailing separator matters.
    if let Some(dir) = parsed.dest_dir.as_deref().map(str::trim) {
        cfg.dest_dir = dir.to_string();
    }

    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }

    if let Some(level) = parsed.log_level.as_deref().and_then(LogLevel::parse) {
        cfg.log_level = level;
    }

    let defaults = BatchConfig::default();
    cfg.batch = BatchConfig {
        size: parsed
            .batch_size
            .map(|n| n as usize)
            .unwrap_or(defaults.size),
        max_wait: parsed
            .batch_max_wait_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.max_wait),
    };
    cfg.dry_run = parsed.dry_run.unwrap_or(false);

    cfg
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    debug!(path = %path.display(), "parsed config xml");
    Ok(xml_to_config(parsed))
}

/// Resolve the config file and load it.
///
/// Precedence: `explicit` (from `--config`), then `$FILE_MOVER_CONFIG`, then the OS default.
/// An explicitly named file must exist; a missing default file just means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadResult> {
    let named = explicit.is_some() || std::env::var_os(CONFIG_ENV_VAR).is_some();
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        if named {
            bail!("config file not found: {}", path.display());
        }
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(LoadResult::Defaults { looked_at: path });
    }

    let config = load_config_from_xml_path(&path)?;
    Ok(LoadResult::Loaded { config, path })
}

fn template_contents() -> String {
    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/file_mover.log".into());

    format!(
        "<!--\n  file_mover configuration (XML)\n\n    dest_dir           -> REQUIRED. directory files are moved into, e.g. {} (a trailing '/' is kept as written)\n    log_level          -> quiet | normal | info | debug\n    log_file           -> path to log file (optional; stdout still used)\n    batch_size         -> relocate once this many paths are pending (1 = immediately)\n    batch_max_wait_ms  -> relocate once the oldest pending path waited this long (0 = no timer)\n    dry_run            -> true to log moves without touching files\n\n  CLI flags override XML values.\n-->\n<config>\n  <dest_dir></dest_dir>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n  <batch_size>1</batch_size>\n  <batch_max_wait_ms>0</batch_max_wait_ms>\n  <dry_run>false</dry_run>\n</config>\n",
        DEST_DIR_EXAMPLE, suggested_log
    )
}

/// Write the default template config (0600 on Unix) and its parent directory.
/// Refuses to overwrite an existing file or to write through a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
        #[cfg(unix)]
        {
            let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));
        }
    }

    let mut opts = OpenOptions::new();
    opts.write(true).create_new(true);
    #[cfg(unix)]
    opts.mode(0o600);
    let mut f = opts
        .open(path)
        .with_context(|| format!("create config file '{}'", path.display()))?;
    f.write_all(template_contents().as_bytes())?;
    f.sync_all()?;

    info!("Created template config at {}", path.display());
    Ok(())
}
