//! Client-side defaults shared by every downstream adapter.
//!
//! tonic generates a distinct client type per service and the orphan rule keeps us from
//! implementing a shared trait for them here, so configuration is applied with a macro
//! that only relies on the builder methods every generated client exposes.

pub use tonic::codec::CompressionEncoding;

/// Message size limit for both directions (8MB)
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 8 * 1024 * 1024;

/// Apply zstd compression and the default message limits to a generated client.
///
/// ## Example
/// ```ignore
/// use grpc_client::{configure_client, TracingInterceptor};
/// use rpc::user::v1::user_service_client::UserServiceClient;
///
/// let client = configure_client!(UserServiceClient::with_interceptor(
///     channel,
///     TracingInterceptor::new(),
/// ));
/// ```
#[macro_export]
macro_rules! configure_client {
  ($client:expr) => {
    $client
      .accept_compressed($crate::client::CompressionEncoding::Zstd)
      .send_compressed($crate::client::CompressionEncoding::Zstd)
      .max_decoding_message_size($crate::client::DEFAULT_MAX_MESSAGE_SIZE)
      .max_encoding_message_size($crate::client::DEFAULT_MAX_MESSAGE_SIZE)
  };
}
