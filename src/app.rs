//! Application orchestrator.
//! Loads/merges config, initializes logging, wires the producer to a mover,
//! installs the signal handler, and waits for the mover to finish.

use anyhow::{Context, Result};
use tracing::{debug, info};

use file_mover::cli::Args;
use file_mover::config::{create_template_config, default_config_path, load_config, LoadResult};
use file_mover::lifecycle::WaitGroup;
use file_mover::logging::init_tracing;
use file_mover::output as out;
use file_mover::{mover, producer, shutdown};

/// Run the CLI application.
pub async fn run(args: Args) -> Result<()> {
    if args.print_config || args.init_config {
        let path = match args.config.clone() {
            Some(p) => p,
            None => default_config_path()?,
        };
        if args.init_config {
            create_template_config(&path)?;
            out::print_success(&format!("A template config was written to: {}", path.display()));
            out::print_info("Edit `dest_dir` (and optionally batching and logging), then re-run.");
        } else {
            out::print_info(&format!("file_mover config path:\n  {}\n", path.display()));
            if !path.exists() {
                out::print_info("No config file exists there yet. Run with --init-config to create a template.");
            }
        }
        return Ok(());
    }

    let loaded = load_config(args.config.as_deref())?;
    let config_path = match &loaded {
        LoadResult::Loaded { path, .. } => Some(path.clone()),
        LoadResult::Defaults { .. } => None,
    };
    let mut cfg = loaded.into_config();
    args.apply_overrides(&mut cfg);

    // Held until return so the file appender flushes.
    let _log_guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    match &config_path {
        Some(p) => info!(path = %p.display(), "Loaded config"),
        None => debug!("No config file; using defaults and CLI flags"),
    }
    debug!("Starting file_mover: {:?}", args);

    cfg.validate()?;

    let pool = WaitGroup::new();
    let (handle, ctx) = mover::channels(&pool);
    let (control, work) = handle.into_parts();
    shutdown::install_interrupt_handler(control.clone())?;

    let mover_task = mover::spawn(ctx, cfg.clone());
    let producer_task = if args.reads_stdin() {
        tokio::spawn(producer::feed_stdin(work))
    } else {
        tokio::spawn(producer::feed_paths(work, args.paths.clone()))
    };

    pool.wait().await;
    let stats = mover_task.await.context("mover task failed")?;
    // The producer may still be parked on stdin after an interrupt.
    producer_task.abort();
    drop(control);

    if stats.failed > 0 {
        out::print_warn(&format!(
            "{} of {} file(s) could not be moved; see log for details",
            stats.failed, stats.received
        ));
    }
    info!(
        received = stats.received,
        moved = stats.moved,
        failed = stats.failed,
        skipped = stats.skipped,
        "Run complete"
    );
    Ok(())
}
