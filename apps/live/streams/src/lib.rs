//! Stream Service
//!
//! Serves `stream.v1.StreamService` over gRPC and the same operations as
//! JSON over HTTP, both backed by one [`domain_streams::StreamService`].
//!
//! ## Architecture
//!
//! ```text
//! gRPC client ─→ StreamServiceImpl ─┐
//!                                   ├─→ StreamService ─→ GrpcStreamRepository ─→ db.v1
//! HTTP client ─→ handlers::router ──┘
//! ```
//!
//! Both servers share one shutdown signal and stop together.

pub mod config;
pub mod server;
pub mod service;

pub use server::run;
pub use service::StreamServiceImpl;
