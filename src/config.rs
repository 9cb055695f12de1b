use crate::error::{ItemError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file searched for in the current directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".itemql.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemqlConfig {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_url() -> String {
    "sqlite://items.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Path the GraphQL endpoint is mounted at
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_path() -> String {
    "/graphql".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
        }
    }
}

/// Reject endpoint paths the router cannot mount.
pub fn validate_endpoint_path(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(ItemError::Config(format!(
            "server path must start with '/', got '{}'",
            path
        )));
    }
    Ok(())
}

impl ServerSettings {
    pub fn validate(&self) -> Result<()> {
        validate_endpoint_path(&self.path)
    }
}

impl ItemqlConfig {
    /// Load configuration from an explicit file, or from the nearest
    /// `.itemql.yml` above `start_path`. Falls back to defaults when no file exists.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ItemError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => Self::find_config_file(start_path),
        };

        match config_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config");
                Self::from_file(&path)
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ItemqlConfig = serde_yaml::from_str(&content)?;
        config.server.validate()?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
