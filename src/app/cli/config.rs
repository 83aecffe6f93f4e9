//! TOML configuration file loading
//!
//! Keys mirror the long CLI flags (`refresh-period`, `settle-delay`,
//! `announcement`, `log-level`, `log-format`, `log-file`, `color`). A value
//! is taken from the file only when the matching flag was not given.

use crate::core::validation::{validate_log_format, validate_log_level};
use crate::queue::api::MAX_PERIOD_SECS;
use std::path::{Path, PathBuf};

use super::args::Args;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}

impl Args {
    /// `<config dir>/Helpqueue/helpqueue.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Helpqueue").join("helpqueue.toml"))
    }

    /// Load the configuration file, if any, into these args
    ///
    /// An explicit `--config-file` must exist; the default location is used
    /// only when present. Returns the path that was loaded.
    pub async fn load_config_file(&mut self) -> ConfigResult<Option<PathBuf>> {
        let path = match self.config_file.clone() {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound { path }),
            Some(path) => path,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        self.load_config_from(&path).await?;
        Ok(Some(path))
    }

    pub async fn load_config_from(&mut self, path: &Path) -> ConfigResult<()> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
        let config =
            toml::from_str::<toml::Table>(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        self.apply_toml_values(&config)
    }

    /// Fill unset args from a parsed TOML table
    pub fn apply_toml_values(&mut self, config: &toml::Table) -> ConfigResult<()> {
        if self.refresh_period.is_none() {
            self.refresh_period = positive_secs(config, "refresh-period")?;
        }
        if self.settle_delay.is_none() {
            self.settle_delay = positive_secs(config, "settle-delay")?;
        }
        if self.announcement.is_none() {
            self.announcement = string_value(config, "announcement")?;
        }
        if self.log_level.is_none() {
            if let Some(level) = string_value(config, "log-level")? {
                self.log_level =
                    Some(validate_log_level(&level).map_err(|e| invalid("log-level", e))?);
            }
        }
        if self.log_format.is_none() {
            if let Some(format) = string_value(config, "log-format")? {
                self.log_format =
                    Some(validate_log_format(&format).map_err(|e| invalid("log-format", e))?);
            }
        }
        if self.log_file.is_none() {
            self.log_file = string_value(config, "log-file")?.map(PathBuf::from);
        }
        if self.color_choice().is_none() {
            match config.get("color") {
                Some(toml::Value::Boolean(true)) => self.color = true,
                Some(toml::Value::Boolean(false)) => self.no_color = true,
                Some(_) => return Err(invalid("color", "expected true or false")),
                None => {}
            }
        }
        Ok(())
    }
}

fn positive_secs(config: &toml::Table, key: &str) -> ConfigResult<Option<u64>> {
    match config.get(key) {
        None => Ok(None),
        Some(toml::Value::Integer(n)) if *n > MAX_PERIOD_SECS as i64 => Err(invalid(
            key,
            format!("{} must not exceed {} seconds", n, MAX_PERIOD_SECS),
        )),
        Some(toml::Value::Integer(n)) if *n > 0 => Ok(Some(*n as u64)),
        Some(toml::Value::Integer(n)) => Err(invalid(key, format!("{} must be greater than 0", n))),
        Some(_) => Err(invalid(key, "expected a whole number of seconds")),
    }
}

fn string_value(config: &toml::Table, key: &str) -> ConfigResult<Option<String>> {
    match config.get(key) {
        None => Ok(None),
        Some(toml::Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid(key, "expected a string")),
    }
}
