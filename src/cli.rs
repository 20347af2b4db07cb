//! Command-line definitions, shared by the binary and the man-page xtask.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version plus build date, shown by `--version`.
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("FOLIO_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    long_version = LONG_VERSION,
    about = "Portfolio site engine: content server, terminal preview and animation toolkit",
    long_about = "Serves the portfolio document and contact endpoint over HTTP, and previews \
                  the animated hero page (typewriter, letter reveal, easter eggs) in the terminal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP data server
    Serve(ServeArgs),

    /// Preview the animated page in the terminal
    Preview(PreviewArgs),

    /// Show, edit or migrate the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Portfolio JSON to serve instead of the bundled document
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct PreviewArgs {
    /// Seed for the typing rhythm, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Type without simulated typos
    #[arg(long)]
    pub no_typos: bool,

    /// Portfolio JSON to preview instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Open the configuration file in $EDITOR
    Edit,

    /// Add missing fields to the configuration file
    Migrate {
        /// Apply without asking
        #[arg(short, long)]
        yes: bool,
    },
}
