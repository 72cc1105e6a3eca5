//! Listener and logging settings for the dialog hook server.
//!
//! Values start from built-in defaults, are replaced by `robo-advisor.toml`
//! when present, and finally by `ROBO_ADVISOR_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

pub const DEFAULT_CONFIG_PATH: &str = "robo-advisor.toml";

pub const ENV_BIND_ADDRESS: &str = "ROBO_ADVISOR_BIND_ADDRESS";
pub const ENV_PORT: &str = "ROBO_ADVISOR_PORT";
pub const ENV_LOG_LEVEL: &str = "ROBO_ADVISOR_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "ROBO_ADVISOR_LOG_FORMAT";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: "127.0.0.1".to_owned(), port: 8080 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), format: LogFormat::default() }
    }
}

impl LoggingConfig {
    /// Falls back to `INFO`; `AppConfig::validate` rejects unknown levels first.
    pub fn max_level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported log format `{0}` (expected compact|pretty|json)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(UnknownLogFormat(value.to_owned())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("environment variable `{key}` has an invalid value `{value}`")]
    InvalidEnv { key: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl AppConfig {
    /// Loads `path`, or `robo-advisor.toml` from the working directory when no
    /// path is given and that file exists, then applies the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::load`] with the environment supplied by `env`.
    pub fn load_with(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };

        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
        toml::from_str(&raw)
            .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
    }

    // Blank variables count as unset.
    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        let lookup = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = lookup(ENV_BIND_ADDRESS) {
            self.server.bind_address = value;
        }
        if let Some(value) = lookup(ENV_PORT) {
            self.server.port = match value.trim().parse() {
                Ok(port) => port,
                Err(_) => return Err(ConfigError::InvalidEnv { key: ENV_PORT, value }),
            };
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = value;
        }
        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = match value.parse() {
                Ok(format) => format,
                Err(_) => return Err(ConfigError::InvalidEnv { key: ENV_LOG_FORMAT, value }),
            };
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Invalid("server.bind_address must not be empty".to_owned()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be greater than zero".to_owned()));
        }
        if self.logging.level.parse::<Level>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "logging.level `{}` is not one of trace|debug|info|warn|error",
                self.logging.level
            )));
        }
        Ok(())
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}
