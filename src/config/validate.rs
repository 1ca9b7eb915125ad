//! Config validation logic.
//! Verifies the destination directory exists (creating it if needed) and is writable,
//! and that batching thresholds are usable.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use super::types::Config;

impl Config {
    /// Validate the destination directory and batching settings.
    pub fn validate(&self) -> Result<()> {
        if self.dest_dir.trim().is_empty() {
            bail!("dest_dir must not be empty; set it in the config file or pass --dest-dir");
        }
        if self.batch.size == 0 {
            bail!("batch_size must be at least 1");
        }

        let dest = Path::new(&self.dest_dir);
        ensure_dir_is_or_create(dest, "dest_dir")?;
        ensure_writable(dest, "dest_dir")?;

        info!(
            dest_dir = %self.dest_dir,
            batch_size = self.batch.size,
            batch_max_wait = ?self.batch.max_wait,
            dry_run = self.dry_run,
            "Config validated"
        );
        Ok(())
    }
}

/// Ensure directory exists (create if missing). If exists, it must be a directory.
fn ensure_dir_is_or_create(path: &Path, name: &str) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            error!("{name} exists but isn't a directory: {}", path.display());
            bail!("{name} exists but isn't a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path).with_context(|| {
            format!("Failed to create {name} directory '{}'", path.display())
        })?;
        info!("Created {name} directory: {}", path.display());
    }
    Ok(())
}

/// Ensure directory is writable using a non-destructive probe file.
fn ensure_writable(path: &Path, name: &str) -> Result<()> {
    let probe = path.join(format!(".file_mover_probe_{}.tmp", std::process::id()));
    fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&probe)
        .with_context(|| format!("Cannot write to {name} '{}'; check permissions", path.display()))?;
    let _ = fs::remove_file(&probe);
    debug!("{name} writable: {}", path.display());
    Ok(())
}
