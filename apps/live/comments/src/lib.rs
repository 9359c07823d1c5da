//! Comment gRPC Service
//!
//! Serves `comment.v1.CommentService`. Comments are stored by the database
//! service; user and stream services are consulted before a comment is created.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC with Zstd compression)
//! CommentServiceImpl (service.rs)
//!   ↓ (proto ↔ domain conversions)
//! CommentService (domain_comments)
//!   ├─ UserExists  → user.v1.UserService/GetUser
//!   ├─ StreamOpen  → stream.v1.StreamService/GetStream
//!   ↓
//! GrpcCommentStore → db.v1.DatabaseService
//! ```
//!
//! ## Modules
//!
//! - `config`: downstream addresses and stream policy
//! - `server`: Server initialization and lifecycle
//! - `service`: gRPC service implementation (CommentServiceImpl)

pub mod config;
pub mod server;
pub mod service;

pub use server::run;
pub use service::CommentServiceImpl;
