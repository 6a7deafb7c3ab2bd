use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::level_filters::LevelFilter;

use crate::errors::TallyError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TALLYBOARD_CONFIG";

/// Environment variable overriding `port`.
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP port to listen on.
    pub port: u16,

    /// Log level for tracing (e.g. "info", "debug").
    pub log_level: String,

    /// Reported by GET /version.
    pub server_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            log_level: "info".to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, TallyError> {
        let file = fs::read_to_string(path).map_err(|source| TallyError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str::<AppConfig>(&file).map_err(|source| TallyError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find config.json: `$TALLYBOARD_CONFIG`, the working directory, then
    /// the executable folder and its parent.
    pub fn locate() -> Option<PathBuf> {
        if let Ok(explicit) = env::var(CONFIG_ENV) {
            return Some(PathBuf::from(explicit));
        }

        let mut candidates = vec![PathBuf::from("config.json")];
        if let Some(exe_dir) = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(exe_dir.join("config.json"));
            candidates.push(exe_dir.join("..").join("config.json"));
        }

        candidates.into_iter().find(|p| p.exists())
    }

    /// Load from the located file (or defaults) and apply the `PORT` override.
    ///
    /// Returns the path the config came from, if any.
    pub fn load() -> Result<(Self, Option<PathBuf>), TallyError> {
        let path = Self::locate();
        let mut cfg = match &path {
            Some(p) => Self::load_from_file(p)?,
            None => Self::default(),
        };

        if let Ok(port) = env::var(PORT_ENV) {
            cfg.apply_port_override(&port)?;
        }

        Ok((cfg, path))
    }

    pub fn apply_port_override(&mut self, raw: &str) -> Result<(), TallyError> {
        self.port = raw
            .trim()
            .parse()
            .map_err(|_| TallyError::InvalidPort(raw.to_string()))?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, TallyError> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(LevelFilter::TRACE),
            "debug" => Ok(LevelFilter::DEBUG),
            "info" => Ok(LevelFilter::INFO),
            "warn" => Ok(LevelFilter::WARN),
            "error" => Ok(LevelFilter::ERROR),
            _ => Err(TallyError::InvalidLogLevel(self.log_level.clone())),
        }
    }
}
