//! User gRPC Service
//!
//! Serves `user.v1.UserService` on top of the database service. Email and
//! username uniqueness is enforced here before anything is written.
//!
//! ```text
//! Client → UserServiceImpl → UserService (domain_users) → GrpcUserRepository → db.v1
//! ```

pub mod config;
pub mod server;
pub mod service;

pub use server::run;
pub use service::UserServiceImpl;
