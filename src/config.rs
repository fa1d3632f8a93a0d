use crate::error::{PokeqlError, Result};
use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".pokeql.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokeqlConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// Resolve `host` (IP literal or hostname) and `port` to bindable addresses.
    pub fn socket_addrs(&self) -> Result<Vec<SocketAddr>> {
        let addrs: Vec<SocketAddr> = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| {
                PokeqlError::Config(format!("Invalid listen address {}: {}", self.host, e))
            })?
            .collect();
        if addrs.is_empty() {
            return Err(PokeqlError::Config(format!(
                "Listen address {} resolved to nothing",
                self.host
            )));
        }
        Ok(addrs)
    }
}

/// Where the dataset comes from. `None` means the embedded dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl PokeqlConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: PokeqlConfig = toml::from_str(&content)?;

        // Relative dataset paths are relative to the config file
        if let Some(data_path) = config.data.path.take() {
            let resolved = match path.parent() {
                Some(dir) if data_path.is_relative() => dir.join(data_path),
                _ => data_path,
            };
            config.data.path = Some(resolved);
        }
        Ok(config)
    }

    /// Load an explicit config file, or discover one upward from `start_path`.
    /// Falls back to defaults when nothing is found.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using config file");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = PokeqlConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4000);
        assert!(config.data.path.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: PokeqlConfig = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    fn settings(host: &str) -> ServerSettings {
        ServerSettings {
            host: host.to_string(),
            port: 4001,
        }
    }

    #[test]
    fn test_socket_addrs_ip_literals() {
        let v4 = settings("127.0.0.1").socket_addrs().unwrap();
        assert_eq!(v4, vec!["127.0.0.1:4001".parse::<SocketAddr>().unwrap()]);

        let v6 = settings("::").socket_addrs().unwrap();
        assert_eq!(v6, vec!["[::]:4001".parse::<SocketAddr>().unwrap()]);
    }

    #[test]
    fn test_socket_addrs_hostname() {
        let addrs = settings("localhost").socket_addrs().unwrap();
        assert!(!addrs.is_empty());
        assert!(addrs.iter().all(|a| a.ip().is_loopback() && a.port() == 4001));
    }

    #[test]
    fn test_discovers_config_in_parent() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[server]\nport = 5000\n\n[data]\npath = \"dex.json\"\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = PokeqlConfig::load(None, &nested).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.data.path, Some(temp_dir.path().join("dex.json")));
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let result = PokeqlConfig::load(Some(&missing), temp_dir.path());
        assert!(matches!(result, Err(PokeqlError::Io(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server\nport = ").unwrap();
        assert!(matches!(
            PokeqlConfig::from_file(&path),
            Err(PokeqlError::Toml(_))
        ));
    }
}
