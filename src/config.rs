use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use crate::app::users::User;

/// Config file used when `PORTER_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "porter.yaml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    /// Accounts available at startup
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Per-read deadline for client data. Unset means reads wait forever.
    pub read_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_files: StaticFilesConfig::default(),
            users: vec![User::new("admin", "password", "admin@example.com")],
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            read_timeout_secs: None,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("static"),
        }
    }
}

impl Config {
    /// Loads the YAML file named by `PORTER_CONFIG` (or `porter.yaml`),
    /// falling back to defaults when it does not exist. `LISTEN` overrides
    /// the listen address either way.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("PORTER_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut cfg = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.server.read_timeout_secs.map(Duration::from_secs)
    }
}
