use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".query-builder-playground";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    // Cube meta JSON, the bundled sample schema is used when unset
    #[serde(default)]
    pub schema_path: Option<PathBuf>,
    // Saved query to start from
    #[serde(default)]
    pub query_path: Option<PathBuf>,
    #[serde(default = "default_add_member_name")]
    pub add_member_name: String,
    #[serde(default)]
    pub disabled: bool,
}

fn default_add_member_name() -> String {
    String::from("Filter")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_path: None,
            query_path: None,
            add_member_name: default_add_member_name(),
            disabled: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    InvalidJson(serde_json::Error),
    UnsupportedOs(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Encountered IO error when loading config: {e}"),
            ConfigError::InvalidJson(e) => write!(f, "Invalid 'config.json': {e}"),
            ConfigError::UnsupportedOs(os) => write!(f, "Unsupported os '{os}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        ConfigError::InvalidJson(value)
    }
}

pub fn get_app_data() -> Result<PathBuf, ConfigError> {
    let dir = match env::consts::OS {
        "linux" => dirs::home_dir(),
        "windows" | "macos" => dirs::config_dir(),
        os => return Err(ConfigError::UnsupportedOs(os.to_string())),
    };
    dir.ok_or_else(|| ConfigError::UnsupportedOs(env::consts::OS.to_string()))
}

// Directory holding the config file and the log
pub fn app_dir() -> Result<PathBuf, ConfigError> {
    Ok(get_app_data()?.join(APP_DIR))
}

impl Config {
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            debug!("Reading config from {:?}", path);
            let config = serde_json::from_slice(&fs::read(path)?)?;
            return Ok(config);
        }

        info!("No config at {:?}, writing defaults", path);
        let config = Config::default();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_vec_pretty(&config)?)?;
        Ok(config)
    }
}
