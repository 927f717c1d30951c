//! Tests for error reporting and exit codes.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pyscaff(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("pyscaff").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("HOME", dir)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_unwritable_base_reports_error_without_success_line() {
    let temp = TempDir::new().unwrap();
    // A regular file where a directory is needed fails even for root.
    fs::write(temp.path().join("blocker"), "").unwrap();

    pyscaff(temp.path())
        .args(["new", "demo", "--path", "blocker"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("created successfully").not())
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("blocker"));
}

#[test]
fn test_missing_base_directory_is_not_created() {
    let temp = TempDir::new().unwrap();

    pyscaff(temp.path())
        .args(["new", "demo", "--path", "missing/parent"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("created successfully").not())
        .stderr(predicate::str::contains("Ensure the base directory exists"));

    assert!(!temp.path().join("missing").exists());
}

#[test]
fn test_nested_name_without_parent_fails() {
    let temp = TempDir::new().unwrap();

    pyscaff(temp.path())
        .args(["new", "nope/demo"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("created successfully").not());

    assert!(!temp.path().join("nope").exists());
}

#[test]
fn test_existing_root_is_reused() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("demo")).unwrap();
    fs::write(temp.path().join("demo/notes.txt"), "keep").unwrap();

    pyscaff(temp.path())
        .args(["new", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created successfully"));

    assert!(temp.path().join("demo/pyproject.toml").is_file());
    assert_eq!(fs::read_to_string(temp.path().join("demo/notes.txt")).unwrap(), "keep");
}

#[test]
fn test_invalid_date_is_usage_error() {
    let temp = TempDir::new().unwrap();

    pyscaff(temp.path())
        .args(["new", "demo", "--date", "yesterday"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--date"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let temp = TempDir::new().unwrap();
    pyscaff(temp.path()).arg("build").assert().code(2);
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();

    pyscaff(temp.path())
        .args(["--config", "absent.toml", "new", "demo"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("absent.toml"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn test_malformed_config_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bad.toml"), "[defaults\n").unwrap();

    pyscaff(temp.path())
        .args(["--config", "bad.toml", "show"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();

    pyscaff(temp.path())
        .args(["config", "get", "defaults.language"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}
