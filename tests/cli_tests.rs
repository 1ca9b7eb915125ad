use clap::Parser;
use file_mover::cli::Args;
use file_mover::config::types::{Config, LogLevel};
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn no_paths_or_dash_means_stdin() {
    assert!(Args::parse_from(["file_mover"]).reads_stdin());
    assert!(Args::parse_from(["file_mover", "-"]).reads_stdin());
    assert!(!Args::parse_from(["file_mover", "a.txt"]).reads_stdin());
    assert!(!Args::parse_from(["file_mover", "-", "a.txt"]).reads_stdin());
}

#[test]
fn positional_paths_are_kept_verbatim() {
    let args = Args::parse_from(["file_mover", "/tmp/in/a.txt", "b.txt"]);
    assert_eq!(args.paths, vec!["/tmp/in/a.txt".to_string(), "b.txt".to_string()]);
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["file_mover", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["file_mover", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["file_mover", "--log-level", "loud"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "file_mover",
        "--dest-dir",
        "/data/out/",
        "--log-level",
        "info",
        "--log-file",
        "/tmp/fm.log",
        "--batch-size",
        "8",
        "--batch-max-wait-ms",
        "250",
        "--dry-run",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.dest_dir, "/data/out/", "trailing separator preserved");
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/fm.log")));
    assert_eq!(cfg.batch.size, 8);
    assert_eq!(cfg.batch.max_wait, Duration::from_millis(250));
    assert!(cfg.dry_run);
}

#[test]
fn unset_flags_leave_config_alone() {
    let args = Args::parse_from(["file_mover", "x"]);
    let mut cfg = Config::new("/keep");
    let before = cfg.clone();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.dest_dir, before.dest_dir);
    assert_eq!(cfg.batch, before.batch);
    assert_eq!(cfg.log_level, before.log_level);
    assert!(!cfg.dry_run);
}
