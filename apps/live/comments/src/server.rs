//! gRPC server initialization and lifecycle management
//!
//! - Tracing initialization
//! - Lazy channels to the database, user and stream services
//! - Health check service (grpc.health.v1.Health)
//! - Graceful shutdown on SIGINT/SIGTERM

use axum_helpers::ShutdownCoordinator;
use core_config::{Environment, FromEnv};
use domain_comments::{
    CommentService, GrpcCommentStore, GrpcStreamDirectory, GrpcUserDirectory,
};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig, create_health_service};
use grpc_client::{ChannelConfig, create_channel_lazy_with_config};
use rpc::comment::v1::comment_service_server::{CommentServiceServer, SERVICE_NAME};
use tonic::transport::Server;
use tracing::info;

use crate::config::CommentsConfig;
use crate::service::CommentServiceImpl;

pub const DEFAULT_GRPC_PORT: u16 = 50051;

/// Run the comment service until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is missing or invalid
/// - A downstream address cannot be turned into an endpoint
/// - Server binding fails
pub async fn run() -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let config = CommentsConfig::from_env()
        .wrap_err("Failed to load comment service configuration")?;
    let server_config = ServerConfig::from_env(DEFAULT_GRPC_PORT)
        .wrap_err("Failed to load gRPC server configuration")?;
    let channel_config = ChannelConfig::from_env()
        .wrap_err("Failed to load channel configuration")?;

    // Channels connect on first use so the service starts before its dependencies
    let db = create_channel_lazy_with_config(&config.db_service_url, channel_config.clone())
        .wrap_err("Invalid database service address")?;
    let users = create_channel_lazy_with_config(&config.user_service_url, channel_config.clone())
        .wrap_err("Invalid user service address")?;
    let streams = create_channel_lazy_with_config(&config.stream_service_url, channel_config)
        .wrap_err("Invalid stream service address")?;

    info!(
        db = %config.db_service_url,
        users = %config.user_service_url,
        streams = %config.stream_service_url,
        stream_policy = %config.stream_policy,
        "Downstream services configured"
    );

    let service = CommentService::new(
        GrpcCommentStore::new(db),
        GrpcUserDirectory::new(users),
        GrpcStreamDirectory::new(streams),
        config.stream_policy,
    );

    let mut comment_server = CommentServiceServer::new(CommentServiceImpl::new(service))
        .max_decoding_message_size(server_config.max_message_size)
        .max_encoding_message_size(server_config.max_message_size);
    if let Some(encoding) = server_config.compression() {
        comment_server = comment_server
            .accept_compressed(encoding)
            .send_compressed(encoding);
    }

    let (health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
    GrpcServer::log_startup(&server_config, SERVICE_NAME);

    let (coordinator, _) = ShutdownCoordinator::new();
    let signals = coordinator.clone();
    tokio::spawn(async move { signals.wait_for_signal().await });

    let addr = server_config.socket_addr().wrap_err("Invalid gRPC listen address")?;
    let shutdown = coordinator.shutdown_future();
    Server::builder()
        .add_service(health_service)
        .add_service(comment_server)
        .serve_with_shutdown(addr, async move {
            shutdown.await;
            GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
        })
        .await
        .wrap_err("gRPC server failed")?;

    info!("Comment service stopped");
    Ok(())
}
