//! Server configuration loaded from environment variables.

use std::net::SocketAddr;

use core_config::{ConfigError, env_or_default, env_parse};
use tonic::codec::CompressionEncoding;

use crate::client::DEFAULT_MAX_MESSAGE_SIZE;

/// Configuration for a gRPC server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    pub port: u16,
    /// Enable Zstd compression (default: true)
    pub enable_compression: bool,
    /// Maximum message size in both directions (default: 8MB)
    pub max_message_size: usize,
}

impl ServerConfig {
    pub fn new(port: u16) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port,
            enable_compression: true,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads:
    /// - `GRPC_HOST` (default: 0.0.0.0)
    /// - `GRPC_PORT` (default: `default_port`)
    /// - `GRPC_COMPRESSION` (default: true)
    /// - `GRPC_MAX_MESSAGE_SIZE` (default: 8388608 / 8MB)
    pub fn from_env(default_port: u16) -> Result<Self, ConfigError> {
        let host = env_or_default("GRPC_HOST", "0.0.0.0");
        let port = env_parse("GRPC_PORT", &default_port.to_string())?;
        let enable_compression = env_or_default("GRPC_COMPRESSION", "true");
        let enable_compression = enable_compression != "false" && enable_compression != "0";
        let max_message_size =
            env_parse("GRPC_MAX_MESSAGE_SIZE", &DEFAULT_MAX_MESSAGE_SIZE.to_string())?;

        Ok(Self {
            host,
            port,
            enable_compression,
            max_message_size,
        })
    }

    /// Set the host to bind to.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Enable or disable compression.
    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    /// Compression encodings to enable on a generated server, if any.
    pub fn compression(&self) -> Option<CompressionEncoding> {
        self.enable_compression.then_some(CompressionEncoding::Zstd)
    }

    /// Get the socket address to bind to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr_string()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::ParseError {
                key: "GRPC_HOST".to_string(),
                details: e.to_string(),
            })
    }

    /// Get the address string (for logging).
    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_env() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", None::<&str>),
                ("GRPC_PORT", None),
                ("GRPC_COMPRESSION", None),
                ("GRPC_MAX_MESSAGE_SIZE", None),
            ],
            || {
                let config = ServerConfig::from_env(50052).unwrap();
                assert_eq!(config.addr_string(), "0.0.0.0:50052");
                assert!(config.enable_compression);
                assert_eq!(config.max_message_size, DEFAULT_MAX_MESSAGE_SIZE);
                assert_eq!(config.compression(), Some(CompressionEncoding::Zstd));
            },
        );
    }

    #[test]
    fn test_overrides_from_env() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", Some("127.0.0.1")),
                ("GRPC_PORT", Some("6000")),
                ("GRPC_COMPRESSION", Some("false")),
            ],
            || {
                let config = ServerConfig::from_env(50051).unwrap();
                assert_eq!(config.socket_addr().unwrap().port(), 6000);
                assert!(config.compression().is_none());
            },
        );
    }

    #[test]
    fn test_invalid_port() {
        temp_env::with_var("GRPC_PORT", Some("http"), || {
            assert!(ServerConfig::from_env(50051).is_err());
        });
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServerConfig::new(8080)
            .with_host("127.0.0.1")
            .with_compression(false);
        assert_eq!(config.addr_string(), "127.0.0.1:8080");
        assert!(!config.enable_compression);
    }
}
