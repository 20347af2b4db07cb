use anyhow::Result;
use clap::Parser;

use folio::cli::{Cli, Commands, ConfigCommands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => commands::serve::handle(args),
        Commands::Preview(args) => commands::preview::handle(args),
        Commands::Config(command) => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
