pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Creates a lazy gRPC channel that connects on first request
///
/// The services start even when a dependency is not reachable yet; the first RPC
/// against it pays the connection cost and surfaces `UNAVAILABLE` if it is still down.
pub fn create_channel_lazy(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_lazy_with_config(addr, ChannelConfig::default())
}

/// Creates a lazy gRPC channel with custom configuration
pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr_string = addr.into();
  let endpoint = endpoint_for(&addr_string, config)?;

  tracing::debug!(
    target: "grpc_client",
    addr = %addr_string,
    "Creating lazy gRPC channel (connects on first request)"
  );

  Ok(endpoint.connect_lazy())
}

fn endpoint_for(addr: &str, config: ChannelConfig) -> GrpcResult<Endpoint> {
  config.validate()?;
  let endpoint = Endpoint::from_shared(addr.to_string()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %addr, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;
  Ok(config.apply_to_endpoint(endpoint))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[tokio::test]
  async fn test_invalid_uri() {
    let result = create_channel_lazy("not a valid uri");
    assert!(matches!(result.unwrap_err(), GrpcError::InvalidUri(_)));
  }

  #[tokio::test]
  async fn test_lazy_channel_does_not_connect() {
    // Nothing listens here; a lazy channel must still be created.
    let result = create_channel_lazy("http://127.0.0.1:1");
    assert!(result.is_ok());
  }

  #[tokio::test]
  async fn test_zero_timeout_is_rejected() {
    let config = ChannelConfig::new().with_request_timeout(Duration::ZERO);
    let result = create_channel_lazy_with_config("http://127.0.0.1:1", config);
    assert!(matches!(result.unwrap_err(), GrpcError::InvalidConfig(_)));
  }
}
