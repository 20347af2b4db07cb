//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Directory holding test fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Read a fixture file to a string.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"))
}

/// Run the folio binary with `config` as its config file.
///
/// Returns (stdout, stderr, exit code).
pub fn run_folio(args: &[&str], config: &Path) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .env("FOLIO_CONFIG", config)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute folio");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}
