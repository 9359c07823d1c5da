//! Startup logging and health reporting shared by every service binary.

use super::config::ServerConfig;
use tracing::info;

/// Helper for gRPC servers with health checks.
pub struct GrpcServer;

impl GrpcServer {
    /// Log server startup information for a single service.
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            max_message_size = config.max_message_size,
            "gRPC server starting"
        );
        info!("Health check service enabled (grpc.health.v1.Health)");
    }

    /// Mark `service_name` and the empty service name as serving.
    ///
    /// The empty name is what generic probes (`grpc_health_probe` without `-service`) query.
    pub async fn setup_health(
        health_reporter: &tonic_health::server::HealthReporter,
        service_name: &str,
    ) {
        for name in [service_name, ""] {
            health_reporter
                .set_service_status(name, tonic_health::ServingStatus::Serving)
                .await;
        }
        info!(service = service_name, "Service marked as serving");
    }

    /// Flip both names to `NOT_SERVING` once shutdown has begun.
    pub async fn mark_not_serving(
        health_reporter: &tonic_health::server::HealthReporter,
        service_name: &str,
    ) {
        for name in [service_name, ""] {
            health_reporter
                .set_service_status(name, tonic_health::ServingStatus::NotServing)
                .await;
        }
        info!(service = service_name, "Service marked as not serving");
    }
}

// Re-export health_reporter for convenience
pub use tonic_health::server::health_reporter as create_health_service;
