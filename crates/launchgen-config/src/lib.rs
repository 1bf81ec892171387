//! Configuration for the `launchgen` tools.
//!
//! The configuration file is optional TOML. Today it only carries the `[logging]` table;
//! conversion behaviour is driven entirely by command line arguments.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod logging;

pub use logging::init_tracing;

/// Environment variable pointing at a config file.
pub const CONFIG_ENV_VAR: &str = "LAUNCHGEN_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchgenConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level for all launchgen crates.
    ///
    /// Either a simple level (`warn`, `debug`, ...) or a full `EnvFilter` directive string.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Emit logs in JSON format.
    #[serde(default)]
    pub json: bool,

    /// Mirror logs to stderr.
    #[serde(default = "LoggingConfig::default_stderr")]
    pub stderr: bool,

    /// Append logs to the given file path.
    ///
    /// If the file cannot be opened, file logging is disabled while stderr logging
    /// remains active.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    fn default_level() -> String {
        "warn".to_owned()
    }

    fn default_stderr() -> bool {
        true
    }

    /// `EnvFilter` directives for `level`.
    ///
    /// Plain level names are matched case-insensitively (`warning` is accepted for `warn`);
    /// any other text is passed through as directive syntax, e.g. `launchgen=debug`.
    pub fn directives(&self) -> String {
        let level = self.level.trim();
        match level.to_ascii_lowercase().as_str() {
            "" => Self::default_level(),
            "warning" => "warn".to_owned(),
            known @ ("trace" | "debug" | "info" | "warn" | "error") => known.to_owned(),
            _ => level.to_owned(),
        }
    }

    /// The filter installed by [`init_tracing`]. `RUST_LOG` refines the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        let configured = self.directives();
        let directives = match std::env::var("RUST_LOG") {
            Ok(env) if !env.trim().is_empty() => format!("{configured},{}", env.trim()),
            _ => configured.clone(),
        };

        EnvFilter::try_new(&directives)
            .or_else(|_| EnvFilter::try_new(&configured))
            .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::WARN.into()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
            stderr: Self::default_stderr(),
            file: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // Keep the message without the source snippet `Display` would add.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl LaunchgenConfig {
    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_str(&text)
    }

    /// Resolve the config path from [`CONFIG_ENV_VAR`].
    ///
    /// Returns `Ok(None)` when the variable is unset or empty.
    pub fn load_from_env() -> Result<Option<Self>, ConfigError> {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty())
        else {
            return Ok(None);
        };
        Self::load_from_path(PathBuf::from(path)).map(Some)
    }
}
