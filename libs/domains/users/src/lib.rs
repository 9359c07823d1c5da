//! Users Domain
//!
//! Profiles of people known to the platform. Identity itself lives with an external
//! provider; only its subject id (`external_id`) is stored here.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Validation, uniqueness checks, timestamps
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + db.v1.DatabaseService implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_users::{GrpcUserRepository, UserService};
//!
//! let service = UserService::new(GrpcUserRepository::new(db_channel));
//! let user = service.get_user(&CallContext::new(), 1).await?;
//! ```

pub mod conversions;
pub mod error;
pub mod grpc_repository;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use grpc_repository::GrpcUserRepository;
pub use models::{CreateUser, NewUser, UpdateUser, User, UserFilter, UserPage};
pub use repository::UserRepository;
pub use service::UserService;
