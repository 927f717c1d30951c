//! Integration tests for the `pyscaff` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SUCCESS_DEMO: &str = "Project structure for 'demo' created successfully!";

/// A command running inside `dir`, isolated from the user's config and env.
fn pyscaff(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("pyscaff").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    pyscaff(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Python project"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    pyscaff(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_creates_project() {
    let temp = TempDir::new().unwrap();

    pyscaff(temp.path())
        .args(["new", "demo", "--date", "2025-08-08"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{SUCCESS_DEMO}\n")));

    let root = temp.path().join("demo");
    assert!(root.join("src/modules/module1.py").is_file());
    assert!(root.join("data/processed").is_dir());
    assert!(root.join(".vscode/launch.json").is_file());

    let readme = fs::read_to_string(root.join("docs/README.md")).unwrap();
    assert!(readme.starts_with("# demo\n"));
    let changelog = fs::read_to_string(root.join("docs/CHANGELOG.md")).unwrap();
    assert!(changelog.contains("2025-08-08"));
}

#[cfg(unix)]
#[test]
fn test_setup_script_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    pyscaff(temp.path()).args(["new", "demo"]).assert().success();

    let script = temp.path().join("demo/scripts/setup_dev_env.sh");
    let mode = fs::metadata(script).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn test_new_with_path_flag() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("projects/python")).unwrap();

    pyscaff(temp.path())
        .args(["new", "demo", "--path", "projects/python"])
        .assert()
        .success()
        .stdout(predicate::str::contains(SUCCESS_DEMO));

    assert!(temp.path().join("projects/python/demo/pyproject.toml").is_file());
}

#[test]
fn test_prompt_reads_name_from_stdin() {
    let temp = TempDir::new().unwrap();

    pyscaff(temp.path())
        .arg("new")
        .write_stdin("from_stdin\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter project name"))
        .stdout(predicate::str::contains(
            "Project structure for 'from_stdin' created successfully!",
        ));

    assert!(temp.path().join("from_stdin/LICENSE").is_file());
}

#[test]
fn test_empty_answer_uses_default_name() {
    let temp = TempDir::new().unwrap();

    pyscaff(temp.path())
        .arg("new")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Project structure for 'my_project' created successfully!",
        ));

    let pyproject = fs::read_to_string(temp.path().join("my_project/pyproject.toml")).unwrap();
    assert!(pyproject.contains("name = \"my_project\""));
}

#[test]
fn test_config_default_name_and_base_dir() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("pyscaff.toml");
    fs::write(
        &config,
        "[defaults]\nproject_name = \"sandbox\"\nbase_dir = \"work\"\n",
    )
    .unwrap();
    fs::create_dir(temp.path().join("work")).unwrap();

    pyscaff(temp.path())
        .args(["--config", "pyscaff.toml", "new"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("'sandbox'"));

    assert!(temp.path().join("work/sandbox/src/main.py").is_file());
}

#[test]
fn test_rerun_overwrites_in_place() {
    let temp = TempDir::new().unwrap();
    pyscaff(temp.path()).args(["new", "demo"]).assert().success();

    let requirements = temp.path().join("demo/requirements.txt");
    let original = fs::read_to_string(&requirements).unwrap();
    fs::write(&requirements, "scribbled").unwrap();

    pyscaff(temp.path()).args(["new", "demo"]).assert().success();
    assert_eq!(fs::read_to_string(&requirements).unwrap(), original);
}

#[test]
fn test_dry_run_creates_nothing() {
    let temp = TempDir::new().unwrap();

    pyscaff(temp.path())
        .args(["new", "demo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("scripts/setup_dev_env.sh (executable)"))
        .stdout(predicate::str::contains("created successfully").not());

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn test_quiet_suppresses_success_line() {
    let temp = TempDir::new().unwrap();

    pyscaff(temp.path())
        .args(["--quiet", "new", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("demo/.gitignore").is_file());
}

#[test]
fn test_show_list_matches_blueprint() {
    let temp = TempDir::new().unwrap();

    let output = pyscaff(temp.path())
        .args(["show", "--format", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 32);
    assert_eq!(lines.first(), Some(&"src/modules"));
    assert_eq!(lines.last(), Some(&".vscode/launch.json"));
}

#[test]
fn test_show_json() {
    let temp = TempDir::new().unwrap();

    let output = pyscaff(temp.path())
        .args(["show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    let script = entries
        .iter()
        .find(|e| e["path"] == "scripts/setup_dev_env.sh")
        .unwrap();
    assert_eq!(script["kind"], "file");
    assert_eq!(script["executable"], true);
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    pyscaff(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pyscaff"));
}

#[test]
fn test_init_then_config_path() {
    let temp = TempDir::new().unwrap();

    pyscaff(temp.path())
        .args(["--config", "cfg/pyscaff.toml", "init"])
        .assert()
        .success();
    assert!(temp.path().join("cfg/pyscaff.toml").is_file());

    pyscaff(temp.path())
        .args(["--config", "cfg/pyscaff.toml", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cfg/pyscaff.toml"));

    pyscaff(temp.path())
        .args(["--config", "cfg/pyscaff.toml", "config", "get", "output.no_color"])
        .assert()
        .success()
        .stdout(predicate::str::diff("false\n"));
}

#[test]
fn test_init_without_force_keeps_existing_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("pyscaff.toml");
    fs::write(&config, "[output]\nno_color = true\n").unwrap();

    pyscaff(temp.path())
        .args(["--config", "pyscaff.toml", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    assert_eq!(
        fs::read_to_string(&config).unwrap(),
        "[output]\nno_color = true\n"
    );
}
