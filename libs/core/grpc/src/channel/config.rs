use std::time::Duration;

use core_config::{ConfigError, FromEnv, env_parse};
use tonic::transport::Endpoint;

use crate::error::{GrpcError, GrpcResult};

/// Configuration for outbound gRPC channels
///
/// Builder-style; defaults favour long-lived connections to in-cluster dependencies.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
  // HTTP/2 Keep-Alive
  pub http2_keep_alive_interval: Option<Duration>,
  pub keep_alive_timeout: Duration,
  pub keep_alive_while_idle: bool,

  // Connection settings
  pub connect_timeout: Duration,
  /// Upper bound per RPC; a shorter caller deadline still wins.
  pub timeout: Duration,

  // Window sizes (HTTP/2 flow control)
  pub initial_connection_window_size: Option<u32>,
  pub initial_stream_window_size: Option<u32>,
  pub http2_adaptive_window: bool,

  // TCP settings
  pub tcp_nodelay: bool,
  pub tcp_keepalive: Option<Duration>,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      http2_keep_alive_interval: Some(Duration::from_secs(30)),
      keep_alive_timeout: Duration::from_secs(10),
      keep_alive_while_idle: true,
      connect_timeout: Duration::from_secs(5),
      timeout: Duration::from_secs(30),
      initial_connection_window_size: Some(1024 * 1024), // 1MB
      initial_stream_window_size: Some(1024 * 1024),     // 1MB
      http2_adaptive_window: true,
      tcp_nodelay: true,
      tcp_keepalive: Some(Duration::from_secs(30)),
    }
  }
}

impl FromEnv for ChannelConfig {
  /// Reads:
  /// - `GRPC_CONNECT_TIMEOUT_SECS` (default: 5)
  /// - `GRPC_REQUEST_TIMEOUT_SECS` (default: 30)
  fn from_env() -> Result<Self, ConfigError> {
    let connect: u64 = env_parse("GRPC_CONNECT_TIMEOUT_SECS", "5")?;
    let request: u64 = env_parse("GRPC_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(
      Self::default()
        .with_connect_timeout(Duration::from_secs(connect))
        .with_request_timeout(Duration::from_secs(request)),
    )
  }
}

impl ChannelConfig {
  /// Create a new configuration with defaults
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the connection timeout
  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  /// Set the request timeout for individual RPCs
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Disable HTTP/2 keep-alive
  pub fn without_keep_alive(mut self) -> Self {
    self.http2_keep_alive_interval = None;
    self
  }

  /// Set both connection and stream window sizes to the same value
  pub fn with_window_size(mut self, size: u32) -> Self {
    self.initial_connection_window_size = Some(size);
    self.initial_stream_window_size = Some(size);
    self
  }

  pub(crate) fn validate(&self) -> GrpcResult<()> {
    if self.connect_timeout.is_zero() || self.timeout.is_zero() {
      return Err(GrpcError::InvalidConfig(
        "connect and request timeouts must be non-zero".to_string(),
      ));
    }
    Ok(())
  }

  pub(crate) fn apply_to_endpoint(self, mut endpoint: Endpoint) -> Endpoint {
    if let Some(interval) = self.http2_keep_alive_interval {
      endpoint = endpoint.http2_keep_alive_interval(interval);
    }
    endpoint = endpoint
      .keep_alive_timeout(self.keep_alive_timeout)
      .keep_alive_while_idle(self.keep_alive_while_idle)
      .connect_timeout(self.connect_timeout)
      .timeout(self.timeout);

    if let Some(size) = self.initial_connection_window_size {
      endpoint = endpoint.initial_connection_window_size(size);
    }
    if let Some(size) = self.initial_stream_window_size {
      endpoint = endpoint.initial_stream_window_size(size);
    }

    endpoint
      .http2_adaptive_window(self.http2_adaptive_window)
      .tcp_nodelay(self.tcp_nodelay)
      .tcp_keepalive(self.tcp_keepalive)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = ChannelConfig::default();
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.initial_stream_window_size, Some(1024 * 1024));
    assert!(config.tcp_nodelay);
  }

  #[test]
  fn test_builder_pattern() {
    let config = ChannelConfig::new()
      .with_connect_timeout(Duration::from_secs(10))
      .with_request_timeout(Duration::from_secs(120))
      .with_window_size(2 * 1024 * 1024)
      .without_keep_alive();

    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.timeout, Duration::from_secs(120));
    assert_eq!(config.initial_connection_window_size, Some(2 * 1024 * 1024));
    assert_eq!(config.http2_keep_alive_interval, None);
  }

  #[test]
  fn test_from_env_overrides() {
    temp_env::with_vars(
      [
        ("GRPC_CONNECT_TIMEOUT_SECS", Some("2")),
        ("GRPC_REQUEST_TIMEOUT_SECS", Some("7")),
      ],
      || {
        let config = ChannelConfig::from_env().unwrap();
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(7));
      },
    );
  }

  #[test]
  fn test_from_env_rejects_garbage() {
    temp_env::with_var("GRPC_REQUEST_TIMEOUT_SECS", Some("forever"), || {
      assert!(ChannelConfig::from_env().is_err());
    });
  }
}
