//! Build script for folio - embeds build date and git commit hash
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA` with the commit hash
//! - Emits `FOLIO_BUILD_DATE` with the build date
//!
//! When the `release` feature IS set (CI/official builds):
//! - Emits the build date only (clean version string without git hash)

use std::process::Command;

/// Current date as YYYY-MM-DD
fn get_build_date() -> String {
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "unknown".to_string()
}

fn main() {
    println!("cargo:rustc-env=FOLIO_BUILD_DATE={}", get_build_date());

    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git = match GitclBuilder::default().sha(true).build() {
            Ok(git) => git,
            Err(e) => {
                println!("cargo:warning=Failed to configure git info: {}", e);
                println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
                return;
            }
        };

        // Outside a git checkout (e.g. a source tarball) fall back to "unknown"
        if let Err(e) = Emitter::default()
            .add_instructions(&git)
            .and_then(|emitter| emitter.emit())
        {
            println!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
