use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_state_file")]
    pub state_file: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_state_file() -> String {
    Config::state_file_path().to_string_lossy().to_string()
}
fn default_poll_interval_ms() -> u64 {
    750
}
fn default_bar_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            poll_interval_ms: default_poll_interval_ms(),
            bar_width: default_bar_width(),
        }
    }
}

impl Config {
    /// Return the configuration directory (~/.rsleeptime, or ./.rsleeptime without a home)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rsleeptime")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rsleeptime.conf")
    }

    /// Return the default path of the saved selections
    pub fn state_file_path() -> PathBuf {
        Self::config_dir().join("values.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing file means defaults
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("failed to parse configuration: {e}")))?;

        if cfg.poll_interval_ms == 0 {
            return Err(AppError::Config(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }

        Ok(cfg)
    }
}
