use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use file_mover::config::{CONFIG_ENV_VAR, LoadResult, default_config_path, load_config};

fn set_env(value: &std::path::Path) {
    unsafe {
        std::env::set_var(CONFIG_ENV_VAR, value);
    }
}

fn clear_env() {
    unsafe {
        std::env::remove_var(CONFIG_ENV_VAR);
    }
}

#[test]
#[serial]
fn env_var_names_the_config_file() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("custom_config.xml");
    let dest = td.path().join("out");
    fs::write(
        &cfg,
        format!("<config><dest_dir>{}/</dest_dir></config>", dest.display()),
    )
    .unwrap();

    set_env(&cfg);
    let resolved = default_config_path().expect("default_config_path");
    let loaded = load_config(None);
    clear_env();

    assert_eq!(resolved, cfg, "config path should equal the env value");
    match loaded.expect("load_config") {
        LoadResult::Loaded { config, path } => {
            assert_eq!(path, cfg);
            assert_eq!(config.dest_dir, format!("{}/", dest.display()));
        }
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
#[serial]
fn env_var_pointing_at_directory_means_config_xml_inside() {
    let td = tempdir().unwrap();
    set_env(td.path());
    let resolved = default_config_path().expect("default_config_path");
    clear_env();
    assert_eq!(resolved, td.path().join("config.xml"));
}

#[test]
#[serial]
fn env_var_naming_missing_file_is_an_error() {
    let td = tempdir().unwrap();
    set_env(&td.path().join("absent.xml"));
    let res = load_config(None);
    clear_env();
    let err = res.expect_err("named config must exist");
    assert!(err.to_string().contains("config file not found"), "{err}");
}

#[test]
#[serial]
fn explicit_path_beats_env_var() {
    let td = tempdir().unwrap();
    let from_env = td.path().join("env.xml");
    let explicit = td.path().join("explicit.xml");
    fs::write(&from_env, "<config><dest_dir>/from/env</dest_dir></config>").unwrap();
    fs::write(&explicit, "<config><dest_dir>/from/flag</dest_dir></config>").unwrap();

    set_env(&from_env);
    let loaded = load_config(Some(&explicit));
    clear_env();

    let cfg = loaded.expect("load_config").into_config();
    assert_eq!(cfg.dest_dir, "/from/flag");
}
