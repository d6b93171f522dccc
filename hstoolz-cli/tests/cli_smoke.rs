//! Smoke tests for the hstoolz binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("hstoolz").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Port to listen on"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_init_creates_asset_folders() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("hstoolz").unwrap();
    cmd.arg("init").arg("--data-dir").arg(tmp.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("librarycache_userdata_config"));

    for name in [
        "stplugin",
        "depotcache",
        "librarycache_appcache",
        "librarycache_userdata_config",
        "sample_files",
    ] {
        assert!(tmp.path().join(name).is_dir(), "{name} missing");
    }
}

#[test]
fn test_init_reads_data_dir_from_env() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("hstoolz").unwrap();
    cmd.env("HSTOOLZ_DATA_DIR", tmp.path()).arg("init");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(tmp.path().join("stplugin").display().to_string()));
    assert!(tmp.path().join("sample_files").is_dir());
}

#[test]
fn test_data_dir_flag_beats_env() {
    let tmp = TempDir::new().unwrap();
    let from_env = tmp.path().join("from-env");
    let from_flag = tmp.path().join("from-flag");

    let mut cmd = Command::cargo_bin("hstoolz").unwrap();
    cmd.env("HSTOOLZ_DATA_DIR", &from_env)
        .arg("init")
        .arg("--data-dir")
        .arg(&from_flag);

    cmd.assert().success();
    assert!(from_flag.join("depotcache").is_dir());
    assert!(!from_env.exists());
}

#[test]
fn test_init_with_config_file() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("assets");
    let config = tmp.path().join("hstoolz.toml");
    std::fs::write(&config, format!("data_dir = {:?}\n", data.display().to_string())).unwrap();

    let mut cmd = Command::cargo_bin("hstoolz").unwrap();
    cmd.env_remove("HSTOOLZ_DATA_DIR")
        .arg("init")
        .arg("--config")
        .arg(&config);

    cmd.assert().success();
    assert!(data.join("stplugin").is_dir());
}

#[test]
fn test_bad_config_fails() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("broken.toml");
    std::fs::write(&config, "data_dir = [").unwrap();

    let mut cmd = Command::cargo_bin("hstoolz").unwrap();
    cmd.arg("init").arg("--config").arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
