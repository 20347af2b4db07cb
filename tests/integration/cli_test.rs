//! Integration tests for the folio binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::run_folio;

fn folio(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env("FOLIO_CONFIG", config).env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    folio(&dir.path().join("config.toml"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_includes_build_date() {
    let dir = TempDir::new().unwrap();
    folio(&dir.path().join("config.toml"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    folio(&dir.path().join("config.toml"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_folio"));
}

#[test]
fn serve_rejects_non_numeric_port() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) =
        run_folio(&["serve", "--port", "abc"], &dir.path().join("config.toml"));

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("invalid value"));
}

#[test]
fn serve_rejects_bad_host() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_folio(
        &["serve", "--host", "not-an-ip"],
        &dir.path().join("config.toml"),
    );

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("bad server.host"));
}

// ============================================================================
// Config subcommands
// ============================================================================

#[test]
fn config_show_prints_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    folio(&dir.path().join("config.toml"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 5000"))
        .stdout(predicate::str::contains("threshold = 0.1"));
}

#[test]
fn config_show_reflects_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nport = 8080\n").unwrap();

    folio(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 8080"))
        .stdout(predicate::str::contains("stagger_ms = 50"));
}

#[test]
fn config_show_fails_on_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[watcher]\nthreshold = 2.0\n").unwrap();

    folio(&path)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("watcher.threshold"));
}

#[test]
fn config_migrate_without_tty_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    folio(&path)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Non-interactive mode"))
        .stdout(predicate::str::contains("No changes made."));
    assert!(!path.exists());
}

#[test]
fn config_migrate_yes_writes_missing_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# keep me\n[server]\nport = 8080\n").unwrap();

    folio(&path)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ host = \"0.0.0.0\""))
        .stdout(predicate::str::contains("Config updated."));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# keep me"));
    assert!(content.contains("port = 8080"));
    assert!(content.contains("[typewriter]"));

    folio(&path)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}
