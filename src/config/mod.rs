//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Server configuration
///
/// Loaded from a YAML file when one is supplied; every field has a default
/// so the service runs with no file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from the path in `SPACEDOCK_CONFIG`, falling back to defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var("SPACEDOCK_CONFIG") {
            Ok(path) => Self::from_yaml_file(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// The socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_from_yaml_str_partial() {
        let config = ServerConfig::from_yaml_str("port: 3000").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host: 127.0.0.1\nport: 9090").unwrap();

        let config = ServerConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_from_yaml_file_missing() {
        assert!(ServerConfig::from_yaml_file("/nonexistent/config.yaml").is_err());
    }
}
