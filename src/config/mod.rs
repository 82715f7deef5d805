use crate::core::validator::BreakPolicy;
use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const APP_DIR: &str = ".crewclock";
const CONFIG_FILE: &str = "crewclock.conf";
const DB_FILE: &str = "crewclock.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Worksite attached to punches recorded without `--site`
    #[serde(default)]
    pub default_worksite: Option<String>,
    /// Literal rule: departure needs a closed break even when none was taken
    #[serde(default)]
    pub require_break_before_departure: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: char,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_separator_char() -> char {
    '-'
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_worksite: None,
            require_break_before_departure: false,
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Configuration directory: `~/.crewclock`, or `./.crewclock` without a home.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    pub fn break_policy(&self) -> BreakPolicy {
        BreakPolicy::from_flag(self.require_break_before_departure)
    }

    /// Load the configuration file, or defaults when it does not exist yet.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Create the config directory and file (unless `is_test`) and return the
    /// configuration pointing at the chosen database.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let database = match custom_db {
            Some(name) => resolve_in(&dir, name),
            None => Self::database_file(),
        };

        let config = Config {
            database: database.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), serde_yaml::to_string(&config)?)?;
        }

        if let Some(parent) = database.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
