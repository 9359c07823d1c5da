//! Streams Domain
//!
//! Live stream records: scheduling metadata, ingest settings, and lifecycle status.
//! Storage is delegated to the database service; this crate adds stream key issuance,
//! validation, and list query handling, and serves both gRPC and an HTTP/JSON façade.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  ┌──────────────┐
//! │ HTTP façade  │  │ gRPC adapter │  ← apps/live/streams
//! └──────┬───────┘  └──────┬───────┘
//!        └────────┬────────┘
//!          ┌──────▼──────┐
//!          │   Service   │  ← Key issuance, validation, query defaults
//!          └──────┬──────┘
//!          ┌──────▼──────┐
//!          │ Repository  │  ← Trait + db.v1.DatabaseService implementation
//!          └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_streams::{GrpcStreamRepository, StreamService, handlers};
//!
//! let service = StreamService::new(GrpcStreamRepository::new(db_channel));
//! let app = handlers::router(service.clone());
//! ```

pub mod conversions;
pub mod error;
pub mod grpc_repository;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod stream_key;

// Re-export commonly used types
pub use error::{StreamError, StreamResult};
pub use grpc_repository::GrpcStreamRepository;
pub use models::{
    CreateStream, NewStream, Stream, StreamFilter, StreamPage, StreamQuery, StreamStatus,
    UpdateStream,
};
pub use repository::StreamRepository;
pub use service::StreamService;
