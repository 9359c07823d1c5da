//! # Axum Helpers
//!
//! Utilities for the HTTP surfaces that sit in front of gRPC services.
//!
//! ## Modules
//!
//! - **[`errors`]**: JSON error envelope and the gRPC → HTTP status table
//! - **[`server`]**: serving a router with tracing and graceful shutdown
//! - **[`shutdown`]**: signal handling shared by HTTP and gRPC servers
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::{ShutdownCoordinator, server::create_app};
//! use core_config::server::ServerConfig;
//!
//! let (coordinator, _) = ShutdownCoordinator::new();
//! let shutdown = coordinator.clone();
//! tokio::spawn(async move { shutdown.wait_for_signal().await });
//!
//! create_app(router, &ServerConfig::default(), coordinator.shutdown_future()).await?;
//! ```

pub mod errors;
pub mod server;
pub mod shutdown;

pub use errors::{AppError, ErrorResponse, http_status_for, parse_validation_errors};
pub use server::create_app;
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
