//! Configuration loading and typed config structures for the Shipyard API.
//!
//! The configuration lives in `shipyard-config.yaml` next to the binary.
//! Every field has a default, so a missing file or a partial file is fine.

use std::path::Path;

use serde::Deserialize;
use shipyard_types::{Weapon, Wing};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held an unusable value.
    #[error("invalid environment override {name}: {message}")]
    Env {
        /// The environment variable name.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level Shipyard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShipyardConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Rule parameters.
    #[serde(default)]
    pub rules: RulesConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Wings and weapons offered by the configurator.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl ShipyardConfig {
    /// Load configuration from a YAML file, then apply environment overrides.
    ///
    /// Overrides:
    /// - `SHIPYARD_HOST` overrides `server.host`
    /// - `SHIPYARD_PORT` overrides `server.port`
    /// - `SHIPYARD_MAX_TAKEOFF_MASS` overrides `rules.max_takeoff_mass`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::Env`] if an override does not parse.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    ///
    /// Environment overrides apply in both cases.
    ///
    /// # Errors
    ///
    /// See [`ShipyardConfig::from_file`].
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::from_file(path);
        }
        let mut config = Self::default();
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides looked up through `lookup` (the process environment in production).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if a numeric override does not parse.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SHIPYARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SHIPYARD_PORT") {
            self.server.port = port.parse().map_err(|e| ConfigError::Env {
                name: "SHIPYARD_PORT",
                message: format!("{e}"),
            })?;
        }
        if let Some(mass) = lookup("SHIPYARD_MAX_TAKEOFF_MASS") {
            self.rules.max_takeoff_mass = mass.parse().map_err(|e| ConfigError::Env {
                name: "SHIPYARD_MAX_TAKEOFF_MASS",
                message: format!("{e}"),
            })?;
        }
        Ok(())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

/// Rule parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RulesConfig {
    /// Absolute ship weight ceiling, independent of licence.
    #[serde(default = "default_max_takeoff_mass")]
    pub max_takeoff_mass: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_takeoff_mass: default_max_takeoff_mass(),
        }
    }
}

const fn default_max_takeoff_mass() -> u32 {
    1000
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    String::from("info")
}

/// Wings and weapons the configurator offers for selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Available wing models.
    #[serde(default)]
    pub wings: Vec<Wing>,

    /// Available weapon models.
    #[serde(default)]
    pub weapons: Vec<Weapon>,
}
