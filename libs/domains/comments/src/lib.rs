//! Comments Domain
//!
//! Comment lifecycle for live streams: validation, cross-service checks against the
//! user and stream services, and persistence through the database service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  CommentService  │  ← Workflow: validate → preconditions → persist
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐   ┌──────────────────────────┐
//! │  Preconditions   │ → │ UserDirectory            │  ← user.v1.UserService
//! │  (ordered)       │ → │ StreamDirectory          │  ← stream.v1.StreamService
//! └────────┬─────────┘   └──────────────────────────┘
//!          │
//! ┌────────▼─────────┐
//! │  CommentStore    │  ← db.v1.DatabaseService
//! └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_comments::{
//!     CommentService, GrpcCommentStore, GrpcStreamDirectory, GrpcUserDirectory, StreamPolicy,
//! };
//!
//! let service = CommentService::new(
//!     GrpcCommentStore::new(db_channel),
//!     GrpcUserDirectory::new(user_channel),
//!     GrpcStreamDirectory::new(stream_channel),
//!     StreamPolicy::RejectCompleted,
//! );
//!
//! let ctx = CallContext::new();
//! let comment = service.create_comment(&ctx, CreateComment::new("hello", 1, 2)).await?;
//! ```

pub mod clients;
pub mod conversions;
pub mod error;
pub mod models;
pub mod preconditions;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use clients::{
    CommentStore, GrpcCommentStore, GrpcStreamDirectory, GrpcUserDirectory, StreamDirectory,
    UserDirectory,
};
pub use error::{CommentError, CommentResult};
pub use models::{Comment, CommentFilter, CommentPage, CreateComment, NewComment, StreamPolicy};
pub use preconditions::{Precondition, PreconditionPipeline, StreamOpen, UserExists};
pub use service::CommentService;
