//! # gRPC Client Library
//!
//! Shared gRPC plumbing for the comment, user and stream services.
//!
//! ## Features
//!
//! - **Channel Creation**: HTTP/2 tuned endpoints that connect on first request
//! - **Client Configuration**: zstd compression and message limits via [`configure_client!`]
//! - **Call Context**: caller deadline and request id forwarded to every downstream call
//! - **Interceptors**: request id injection for outbound calls
//! - **Server Helpers**: listen config and health reporting
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_client::{CallContext, configure_client, create_channel_lazy_with_config, ChannelConfig};
//! use rpc::db::v1::database_service_client::DatabaseServiceClient;
//!
//! let channel = create_channel_lazy_with_config("http://db:9090", ChannelConfig::from_env()?)?;
//! let mut client = configure_client!(DatabaseServiceClient::new(channel));
//!
//! // inside a handler
//! let ctx = CallContext::from_request(&request);
//! let record = client.get_comment(ctx.request(RecordId { id })?).await?;
//! ```

pub mod channel;
pub mod client;
pub mod context;
pub mod conversions;
pub mod error;
pub mod interceptors;
pub mod server;

// Re-export main types and functions for convenience
pub use channel::{ChannelConfig, create_channel_lazy, create_channel_lazy_with_config};
pub use client::DEFAULT_MAX_MESSAGE_SIZE;
pub use context::CallContext;
pub use error::{GrpcError, GrpcResult, ToTonicOption};
pub use interceptors::TracingInterceptor;
