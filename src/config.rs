//! Configuration file handling.
//!
//! The config lives at `<config dir>/folio/config.toml` (override with
//! `FOLIO_CONFIG`). Every field has a default so partial files load.

use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml_edit::{DocumentMut, Item};

use crate::animation::intersection::DEFAULT_THRESHOLD;
use crate::animation::reveal::{DEFAULT_INITIAL_DELAY, DEFAULT_STAGGER};
use crate::animation::typewriter::DEFAULT_TYPO_PROBABILITY;
use crate::animation::{LetterReveal, TypewriterEngine, TypingProfile};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to edit config: {0}")]
    Edit(#[from] toml_edit::TomlError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub typewriter: TypewriterConfig,
    pub reveal: RevealConfig,
    pub watcher: WatcherConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    pub port: u16,
    /// Portfolio JSON to serve instead of the bundled one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            data_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Chance per letter of a simulated typo, 0.0..=1.0
    pub typo_probability: f64,
    /// Pause before the first character
    pub start_delay_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typo_probability: DEFAULT_TYPO_PROBABILITY,
            start_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub initial_delay_ms: u64,
    pub stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: DEFAULT_INITIAL_DELAY.as_millis() as u64,
            stagger_ms: DEFAULT_STAGGER.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    /// Fraction of a section that must be on screen, 0.0 < t <= 1.0
    pub threshold: f64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("folio").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.typewriter.typo_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Invalid(format!(
                "typewriter.typo_probability must be within 0..=1, got {p}"
            )));
        }
        let t = self.watcher.threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "watcher.threshold must be within (0, 1], got {t}"
            )));
        }
        if self.reveal.stagger_ms == 0 {
            return Err(ConfigError::Invalid("reveal.stagger_ms must be > 0".into()));
        }
        Ok(())
    }

    /// Address the server binds.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("bad server.host '{}'", self.server.host)))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// A typewriter configured from `[typewriter]`.
    pub fn typewriter_engine(&self, profile: TypingProfile, seed: Option<u64>) -> TypewriterEngine {
        let engine = match seed {
            Some(seed) => TypewriterEngine::with_seed(profile, seed),
            None => TypewriterEngine::new(profile),
        };
        engine
            .typo_probability(self.typewriter.typo_probability)
            .start_delay(Duration::from_millis(self.typewriter.start_delay_ms))
    }

    /// A letter-reveal sequencer configured from `[reveal]`.
    pub fn letter_reveal(&self) -> LetterReveal {
        LetterReveal::new(
            Duration::from_millis(self.reveal.initial_delay_ms),
            Duration::from_millis(self.reveal.stagger_ms),
        )
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationResult {
    /// Updated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist before
    pub sections_added: Vec<String>,
}

impl MigrationResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add fields missing from `content`, keeping existing values and comments.
pub fn migrate_config(content: &str) -> Result<MigrationResult, ConfigError> {
    let mut document: DocumentMut = content.parse()?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        match document.get_mut(section) {
            None => {
                for (key, _) in default_table.iter() {
                    added_fields.push(format!("{section}.{key}"));
                }
                document.insert(section, Item::Table(default_table.clone()));
                sections_added.push(section.to_string());
            }
            Some(existing) => {
                // A non-table value is left for the parser to reject
                let Some(table) = existing.as_table_like_mut() else {
                    continue;
                };
                for (key, value) in default_table.iter() {
                    if !table.contains_key(key) {
                        table.insert(key, value.clone());
                        added_fields.push(format!("{section}.{key}"));
                    }
                }
            }
        }
    }

    Ok(MigrationResult {
        content: document.to_string(),
        added_fields,
        sections_added,
    })
}
