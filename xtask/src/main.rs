//! Development tasks for folio.
//!
//! ```sh
//! cargo run -p xtask -- man            # writes target/man/folio.1
//! cargo run -p xtask -- man --out dir  # custom output directory
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

#[derive(Parser)]
#[command(name = "xtask", about = "folio development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for folio and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man_pages(&out),
    }
}

fn generate_man_pages(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let command = folio::cli::Cli::command();
    write_page(out, "folio", command.clone())?;
    for sub in command.get_subcommands() {
        write_page(out, &format!("folio-{}", sub.get_name()), sub.clone())?;
    }
    Ok(())
}

fn write_page(out: &Path, name: &str, command: clap::Command) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(command).render(&mut buffer)?;

    let path = out.join(format!("{name}.1"));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
