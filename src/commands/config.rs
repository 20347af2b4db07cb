//! Config subcommands handler

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use folio::config::{migrate_config, MigrationResult};
use folio::theme::{ansi, current_theme};
use folio::Config;

/// Print the effective configuration (file plus defaults) as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    println!(
        "{}",
        theme.secondary_text(&format!("# {}", Config::config_path()?.display()))
    );
    println!("{}", theme.primary_text(&toml::to_string_pretty(&config)?));
    Ok(())
}

/// Open the config file in `$EDITOR` (default `vi`), creating it first.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{editor}'"))?;

    // Report problems now rather than at the next `serve`
    if let Err(e) = Config::load() {
        println!("{}", theme.error_text(&format!("Config is not valid: {e}")));
    }
    Ok(())
}

/// Add missing fields to the config file.
///
/// Shows the added lines and asks before writing, unless `yes` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;
    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    if file_exists {
        println!("{}", theme.primary_text(&summary(&result)));
    } else {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create it with defaults.")
        );
    }
    println!();
    print_added_lines(&result);
    println!();

    let question = if file_exists {
        format!("Apply these changes to {}?", config_path.display())
    } else {
        format!("Create {}?", config_path.display())
    };
    if !yes && !prompt_confirmation(&question)? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("{}", theme.success_text("Config updated."));
    Ok(())
}

fn summary(result: &MigrationResult) -> String {
    match result.sections_added.len() {
        0 => format!("Found {} missing field(s):", result.added_fields.len()),
        sections => format!(
            "Found {} missing field(s) in {} new section(s):",
            result.added_fields.len(),
            sections
        ),
    }
}

/// Print the lines of the migrated file that carry added fields, prefixed
/// with a green `+` and grouped under their section header.
fn print_added_lines(result: &MigrationResult) {
    let mut section = String::new();
    let mut header_printed = false;

    for line in result.content.lines() {
        let trimmed = line.trim();
        if let Some(name) = trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            section = name.to_string();
            header_printed = false;
            continue;
        }

        let Some((key, _)) = trimmed.split_once('=') else {
            continue;
        };
        let field = format!("{}.{}", section, key.trim());
        if !result.added_fields.contains(&field) {
            continue;
        }

        if !header_printed {
            let marker = if result.sections_added.contains(&section) {
                "+"
            } else {
                " "
            };
            println!("{}{} [{}]{}", ansi::GREEN, marker, section, ansi::RESET);
            header_printed = true;
        }
        println!("{}+ {}{}", ansi::GREEN, line, ansi::RESET);
    }
}

/// Ask a yes/no question on stdin. Non-interactive sessions answer no.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
