use crate::persistence::{FileHistoryStore, state_dir};
use crate::source::DEFAULT_ENDPOINT;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

const LOG_FILE: &str = "lazydir.log";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(skip)]
    path: Option<String>,
    /// URL returning the JSON user list.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Where the search history is kept. Defaults to `~/.lazydir/history.json`.
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    /// Where tracing output goes. Defaults to `~/.lazydir/lazydir.log`.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            endpoint: default_endpoint(),
            history_file: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default config dir (~/.config/lazydir/) or a local .lazydir.toml.
    pub fn load() -> Self {
        Self::load_from_path(&Self::default_config_path())
    }

    pub fn load_from_path(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(config_path) {
            Ok(content) => {
                let mut config: Config = toml::from_str(&content).unwrap_or_else(|e| {
                    warn!("Ignoring malformed config {:?}: {}", config_path, e);
                    Self::default()
                });
                config.path = config_path.to_str().map(|s| s.to_string());
                config
            }
            Err(_) => Self::default(),
        }
    }

    /// Get the path of the configuration file if it was loaded from a file.
    pub fn get_path(&self) -> Option<&String> {
        self.path.as_ref()
    }

    fn default_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("lazydir").join("config.toml");
            if config_path.exists() {
                return config_path;
            }
        }
        // Fallback to local .lazydir.toml (might not exist)
        PathBuf::from(".lazydir.toml")
    }

    /// History file store, unless neither a configured path nor a home directory exists.
    pub fn history_store(&self) -> Option<FileHistoryStore> {
        match &self.history_file {
            Some(path) => Some(FileHistoryStore::new(path)),
            None => FileHistoryStore::in_state_dir(),
        }
    }

    /// Log file path, falling back to the working directory.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .or_else(|| state_dir().map(|dir| dir.join(LOG_FILE)))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE))
    }
}
