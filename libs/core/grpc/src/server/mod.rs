//! gRPC Server helpers
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig, create_health_service};
//! use rpc::comment::v1::comment_service_server::{CommentServiceServer, SERVICE_NAME};
//!
//! let config = ServerConfig::from_env(50051)?;
//! let (health_reporter, health_service) = create_health_service();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! let mut service = CommentServiceServer::new(my_impl)
//!     .max_decoding_message_size(config.max_message_size)
//!     .max_encoding_message_size(config.max_message_size);
//! if let Some(encoding) = config.compression() {
//!     service = service.accept_compressed(encoding).send_compressed(encoding);
//! }
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(service)
//!     .serve_with_shutdown(config.socket_addr()?, shutdown_signal())
//!     .await?;
//! ```

mod builder;
mod config;

pub use builder::{GrpcServer, create_health_service};
pub use config::ServerConfig;
