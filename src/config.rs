//! Configuration types.

use std::net::{IpAddr, SocketAddr};

use crate::error::ConfigError;

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 9013,
        }
    }
}

impl ServerConfig {
    /// Load from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("VISA_ASSIST_HOST") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|e| ConfigError::InvalidValue {
                key: "VISA_ASSIST_HOST".to_string(),
                message: format!("{e}"),
            })?,
            None => defaults.host,
        };

        let port = match lookup("VISA_ASSIST_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "VISA_ASSIST_PORT".to_string(),
                message: format!("{e}"),
            })?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Sampling parameters for the affirmation responder.
#[derive(Debug, Clone, PartialEq)]
pub struct AffirmationConfig {
    /// LLM temperature.
    pub temperature: f32,
    /// Max tokens for the LLM response.
    pub max_tokens: u32,
}

impl Default for AffirmationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_9013() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9013");
    }

    #[test]
    fn reads_host_and_port() {
        let config = ServerConfig::from_lookup(|key| match key {
            "VISA_ASSIST_HOST" => Some("127.0.0.1".to_string()),
            "VISA_ASSIST_PORT" => Some(" 8080 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(|key| {
            (key == "VISA_ASSIST_PORT").then(|| "eighty".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "VISA_ASSIST_PORT"));
    }

    #[test]
    fn affirmation_defaults() {
        let config = AffirmationConfig::default();
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 1000);
    }
}
