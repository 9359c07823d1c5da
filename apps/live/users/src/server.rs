//! gRPC server initialization and lifecycle management

use axum_helpers::ShutdownCoordinator;
use core_config::{Environment, FromEnv};
use domain_users::{GrpcUserRepository, UserService};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig, create_health_service};
use grpc_client::{ChannelConfig, create_channel_lazy_with_config};
use rpc::user::v1::user_service_server::{SERVICE_NAME, UserServiceServer};
use tonic::transport::Server;
use tracing::info;

use crate::config::UsersConfig;
use crate::service::UserServiceImpl;

pub const DEFAULT_GRPC_PORT: u16 = 50052;

/// Run the user service until a shutdown signal arrives
pub async fn run() -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let config = UsersConfig::from_env().wrap_err("Failed to load user service configuration")?;
    let server_config = ServerConfig::from_env(DEFAULT_GRPC_PORT)
        .wrap_err("Failed to load gRPC server configuration")?;
    let channel_config = ChannelConfig::from_env()
        .wrap_err("Failed to load channel configuration")?;

    let db = create_channel_lazy_with_config(&config.db_service_url, channel_config)
        .wrap_err("Invalid database service address")?;
    info!(db = %config.db_service_url, "Database service configured");

    let service = UserService::new(GrpcUserRepository::new(db));

    let mut user_server = UserServiceServer::new(UserServiceImpl::new(service))
        .max_decoding_message_size(server_config.max_message_size)
        .max_encoding_message_size(server_config.max_message_size);
    if let Some(encoding) = server_config.compression() {
        user_server = user_server.accept_compressed(encoding).send_compressed(encoding);
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
        .add_service(user_server)
        .serve_with_shutdown(addr, async move {
            shutdown.await;
            GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
        })
        .await
        .wrap_err("gRPC server failed")?;

    info!("User service stopped");
    Ok(())
}
