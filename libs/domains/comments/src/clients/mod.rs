//! Downstream adapters
//!
//! One narrow trait per dependency so the workflow can be exercised with mocks or
//! in-memory fakes; [`grpc`] holds the tonic-backed implementations.

use async_trait::async_trait;
use grpc_client::CallContext;
use rpc::stream::v1::StreamStatus;

use crate::error::CommentResult;
use crate::models::{Comment, CommentFilter, CommentPage, NewComment};

pub mod grpc;

pub use grpc::{GrpcCommentStore, GrpcStreamDirectory, GrpcUserDirectory};

/// Comment persistence (database service)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Persist a new comment and return it with its assigned id
    async fn create(&self, ctx: &CallContext, comment: NewComment) -> CommentResult<Comment>;

    /// `None` when no comment has this id
    async fn get(&self, ctx: &CallContext, id: i32) -> CommentResult<Option<Comment>>;

    async fn update(&self, ctx: &CallContext, comment: Comment) -> CommentResult<Comment>;

    /// `false` when no comment has this id
    async fn delete(&self, ctx: &CallContext, id: i32) -> CommentResult<bool>;

    /// Filter must already be validated
    async fn list(&self, ctx: &CallContext, filter: CommentFilter) -> CommentResult<CommentPage>;
}

/// User lookups (user service)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn user_exists(&self, ctx: &CallContext, user_id: i32) -> CommentResult<bool>;
}

/// Stream lookups (stream service)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StreamDirectory: Send + Sync {
    /// Lifecycle status of a stream, `None` when it does not exist
    async fn stream_status(
        &self,
        ctx: &CallContext,
        stream_id: i32,
    ) -> CommentResult<Option<StreamStatus>>;
}
