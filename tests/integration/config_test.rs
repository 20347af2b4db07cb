//! Tests for loading, saving and migrating the config file

use std::time::Duration;

use tempfile::TempDir;

use folio::animation::TypingProfile;
use folio::config::{migrate_config, Config, ConfigError};

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_creates_parent_dirs_and_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("folio").join("config.toml");

    let mut config = Config::default();
    config.server.port = 9000;
    config.server.data_path = Some(dir.path().join("site.json"));
    config.typewriter.typo_probability = 0.0;
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server\nport = ").unwrap();

    assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn wrong_type_is_a_parse_error() {
    assert!(matches!(
        Config::from_toml("[server]\nport = \"five thousand\"\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn reveal_settings_drive_the_sequencer() {
    let config = Config::from_toml("[reveal]\ninitial_delay_ms = 0\nstagger_ms = 10\n").unwrap();
    let mut reveal = config.letter_reveal();
    reveal.start("abcd");

    assert_eq!(reveal.total_duration(), Duration::from_millis(30));
    reveal.advance(Duration::from_millis(30));
    assert!(reveal.is_complete());
}

#[test]
fn zero_typo_probability_types_exactly() {
    let config = Config::from_toml("[typewriter]\ntypo_probability = 0.0\nstart_delay_ms = 0\n")
        .unwrap();
    let mut engine = config.typewriter_engine(TypingProfile::Name, Some(11));
    engine.start("Ian Iglipa");
    engine.advance(Duration::from_secs(60));

    assert_eq!(engine.visible(), "Ian Iglipa");
}

#[test]
fn migrated_content_parses_to_same_values() {
    let original = "[typewriter]\nstart_delay_ms = 250\n";
    let result = migrate_config(original).unwrap();

    let config = Config::from_toml(&result.content).unwrap();
    assert_eq!(config.typewriter.start_delay_ms, 250);
    assert_eq!(config.server, Config::default().server);
    assert!(result.added_fields.contains(&"typewriter.typo_probability".to_string()));
    assert!(result.sections_added.contains(&"watcher".to_string()));
}
