use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::ranker::DEFAULT_LIMIT;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default)]
    pub recommend: RecommendConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: ListenConfig::default(),
            dataset: default_dataset(),
            recommend: RecommendConfig::default(),
        }
    }
}

fn default_port() -> String {
    "5000".to_string()
}

fn default_dataset() -> String {
    "movies_metadata.csv".to_string()
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Config {
    /// Load the config file. A missing file yields the defaults, so the
    /// server can be started with nothing but a dataset next to it.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        Self::parse(path, &content)
    }

    pub fn parse(path: &str, content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        if config.recommend.limit == 0 {
            return Err(ConfigError::Invalid(
                "recommend.limit must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let address = self.listen.address.as_deref().unwrap_or("[::]");
        format!("{}:{}", address, self.listen.port)
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("Invalid listen address: {}", e)))
    }

    pub fn tls_paths(&self) -> Option<(&str, &str)> {
        match (&self.listen.tlscert, &self.listen.tlskey) {
            (Some(cert), Some(key)) => Some((cert.as_str(), key.as_str())),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
listen:
  address: 127.0.0.1
  port: "8080"
dataset: /data/movies.csv
recommend:
  limit: 5
"#;
        let config = Config::parse("test.yaml", yaml).unwrap();
        assert_eq!(config.dataset, "/data/movies.csv");
        assert_eq!(config.recommend.limit, 5);
        assert_eq!(
            config.listen_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
        assert!(config.tls_paths().is_none());
    }

    #[test]
    fn test_defaults() {
        let config = Config::parse("test.yaml", "{}").unwrap();
        assert_eq!(config.listen.port, "5000");
        assert_eq!(config.dataset, "movies_metadata.csv");
        assert_eq!(config.recommend.limit, DEFAULT_LIMIT);
        assert_eq!(config.listen_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = Config::parse("test.yaml", "recommend:\n  limit: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_tls_needs_both_paths() {
        let config = Config::parse("test.yaml", "listen:\n  tlscert: cert.pem\n").unwrap();
        assert!(config.tls_paths().is_none());

        let yaml = "listen:\n  tlscert: cert.pem\n  tlskey: key.pem\n";
        let config = Config::parse("test.yaml", yaml).unwrap();
        assert_eq!(config.tls_paths(), Some(("cert.pem", "key.pem")));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::from_file("/nonexistent/moodflix-server.yaml").unwrap();
        assert_eq!(config.recommend.limit, 10);
    }
}
