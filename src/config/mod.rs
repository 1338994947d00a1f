use crate::core::ledger::DEFAULT_LEDGER_KEY;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_ledger_key")]
    pub ledger_key: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_ledger_key() -> String {
    DEFAULT_LEDGER_KEY.to_string()
}
fn default_export_dir() -> String {
    ".".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            ledger_key: default_ledger_key(),
            export_dir: default_export_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// `~/.workledger`, or `./.workledger` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".workledger")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workledger.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("workledger.sqlite")
    }

    /// Load the configuration file, or defaults when there is none.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the config file and return its path. An existing file is kept
    /// unless `overwrite` is set.
    pub fn write(&self, overwrite: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() && !overwrite {
            return Ok(path);
        }

        fs::write(&path, self.to_yaml()?)?;
        Ok(path)
    }
}
