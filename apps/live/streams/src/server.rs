//! gRPC and HTTP server lifecycle
//!
//! - Tracing initialization
//! - Lazy channel to the database service
//! - gRPC server with health checks on `GRPC_HOST`/`GRPC_PORT`
//! - HTTP façade on `HOST`/`PORT`
//! - One shutdown coordinator for both

use axum_helpers::{ShutdownCoordinator, create_app};
use core_config::server::ServerConfig as HttpConfig;
use core_config::{Environment, FromEnv};
use domain_streams::{GrpcStreamRepository, StreamService, handlers};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig, create_health_service};
use grpc_client::{ChannelConfig, create_channel_lazy_with_config};
use rpc::stream::v1::stream_service_server::{SERVICE_NAME, StreamServiceServer};
use tonic::transport::Server;
use tracing::info;

use crate::config::StreamsConfig;
use crate::service::StreamServiceImpl;

pub const DEFAULT_GRPC_PORT: u16 = 50053;

/// Run the gRPC server and the HTTP façade until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if configuration is invalid or either server fails.
/// A failure in one server stops the other.
pub async fn run() -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let config = StreamsConfig::from_env().wrap_err("Failed to load stream service configuration")?;
    let grpc_config = ServerConfig::from_env(DEFAULT_GRPC_PORT)
        .wrap_err("Failed to load gRPC server configuration")?;
    let http_config = HttpConfig::from_env().wrap_err("Failed to load HTTP server configuration")?;
    let channel_config = ChannelConfig::from_env()
        .wrap_err("Failed to load channel configuration")?;

    let db = create_channel_lazy_with_config(&config.db_service_url, channel_config)
        .wrap_err("Invalid database service address")?;
    info!(db = %config.db_service_url, "Database service configured");

    let service = StreamService::new(GrpcStreamRepository::new(db));

    let mut stream_server = StreamServiceServer::new(StreamServiceImpl::new(service.clone()))
        .max_decoding_message_size(grpc_config.max_message_size)
        .max_encoding_message_size(grpc_config.max_message_size);
    if let Some(encoding) = grpc_config.compression() {
        stream_server = stream_server.accept_compressed(encoding).send_compressed(encoding);
    }

    let (health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
    GrpcServer::log_startup(&grpc_config, SERVICE_NAME);

    let (coordinator, _) = ShutdownCoordinator::new();
    let signals = coordinator.clone();
    tokio::spawn(async move { signals.wait_for_signal().await });

    let grpc_addr = grpc_config.socket_addr().wrap_err("Invalid gRPC listen address")?;
    let grpc_shutdown = coordinator.shutdown_future();
    let grpc = {
        let coordinator = coordinator.clone();
        async move {
            let result = Server::builder()
                .add_service(health_service)
                .add_service(stream_server)
                .serve_with_shutdown(grpc_addr, async move {
                    grpc_shutdown.await;
                    GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
                })
                .await
                .wrap_err("gRPC server failed");
            // Stop the HTTP side too if gRPC exits on its own
            coordinator.shutdown();
            result
        }
    };

    let http = {
        let coordinator = coordinator.clone();
        let router = handlers::router(service);
        async move {
            let result = create_app(router, &http_config, coordinator.shutdown_future())
                .await
                .wrap_err("HTTP server failed");
            coordinator.shutdown();
            result
        }
    };

    tokio::try_join!(grpc, http)?;

    info!("Stream service stopped");
    Ok(())
}
