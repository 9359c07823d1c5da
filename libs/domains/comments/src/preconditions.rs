//! Cross-service checks that must hold before a comment is written.
//!
//! Each check is independent and yields a typed [`CommentError`] on failure. The
//! pipeline evaluates them in order and stops at the first failure, so later checks
//! (and the write) never run against a rejected request.

use std::sync::Arc;

use async_trait::async_trait;
use grpc_client::CallContext;
use rpc::stream::v1::StreamStatus;
use tracing::{debug, warn};

use crate::clients::{StreamDirectory, UserDirectory};
use crate::error::{CommentError, CommentResult};
use crate::models::{CreateComment, StreamPolicy};

#[async_trait]
pub trait Precondition: Send + Sync {
    /// Short label used in logs
    fn name(&self) -> &'static str;

    async fn check(&self, ctx: &CallContext, input: &CreateComment) -> CommentResult<()>;
}

/// The author must be a known user.
///
/// A failed lookup counts as "not found".
pub struct UserExists<U> {
    users: Arc<U>,
}

impl<U: UserDirectory> UserExists<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U: UserDirectory> Precondition for UserExists<U> {
    fn name(&self) -> &'static str {
        "user_exists"
    }

    async fn check(&self, ctx: &CallContext, input: &CreateComment) -> CommentResult<()> {
        match self.users.user_exists(ctx, input.user_id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(CommentError::UserNotFound(input.user_id)),
            Err(e) => {
                warn!(user_id = input.user_id, error = %e, "User lookup failed");
                Err(CommentError::UserNotFound(input.user_id))
            }
        }
    }
}

/// The target stream must exist and, under [`StreamPolicy::RejectCompleted`], not be complete.
///
/// A failed lookup counts as "not found".
pub struct StreamOpen<D> {
    streams: Arc<D>,
    policy: StreamPolicy,
}

impl<D: StreamDirectory> StreamOpen<D> {
    pub fn new(streams: Arc<D>, policy: StreamPolicy) -> Self {
        Self { streams, policy }
    }
}

#[async_trait]
impl<D: StreamDirectory> Precondition for StreamOpen<D> {
    fn name(&self) -> &'static str {
        "stream_open"
    }

    async fn check(&self, ctx: &CallContext, input: &CreateComment) -> CommentResult<()> {
        match self.streams.stream_status(ctx, input.stream_id).await {
            Ok(Some(StreamStatus::Complete)) if self.policy == StreamPolicy::RejectCompleted => {
                Err(CommentError::StreamCompleted(input.stream_id))
            }
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(CommentError::StreamNotFound(input.stream_id)),
            Err(e) => {
                warn!(stream_id = input.stream_id, error = %e, "Stream lookup failed");
                Err(CommentError::StreamNotFound(input.stream_id))
            }
        }
    }
}

/// Ordered list of [`Precondition`]s
#[derive(Default)]
pub struct PreconditionPipeline {
    checks: Vec<Box<dyn Precondition>>,
}

impl PreconditionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check; checks run in insertion order.
    pub fn with(mut self, check: impl Precondition + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// User first, then stream.
    pub fn for_comments<U, D>(users: Arc<U>, streams: Arc<D>, policy: StreamPolicy) -> Self
    where
        U: UserDirectory + 'static,
        D: StreamDirectory + 'static,
    {
        Self::new()
            .with(UserExists::new(users))
            .with(StreamOpen::new(streams, policy))
    }

    pub async fn run(&self, ctx: &CallContext, input: &CreateComment) -> CommentResult<()> {
        for check in &self.checks {
            check.check(ctx, input).await.inspect_err(|e| {
                debug!(precondition = check.name(), error = %e, "Precondition failed");
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{MockStreamDirectory, MockUserDirectory};
    use mockall::predicate::eq;

    fn input() -> CreateComment {
        CreateComment::new("hello", 1, 2)
    }

    fn users(exists: CommentResult<bool>) -> Arc<MockUserDirectory> {
        let mut users = MockUserDirectory::new();
        let mut outcome = Some(exists);
        users
            .expect_user_exists()
            .with(mockall::predicate::always(), eq(1))
            .times(1)
            .returning(move |_, _| outcome.take().unwrap_or(Ok(true)));
        Arc::new(users)
    }

    fn streams(status: Option<StreamStatus>) -> Arc<MockStreamDirectory> {
        let mut streams = MockStreamDirectory::new();
        streams
            .expect_stream_status()
            .with(mockall::predicate::always(), eq(2))
            .returning(move |_, _| Ok(status));
        Arc::new(streams)
    }

    #[tokio::test]
    async fn test_lookup_failure_counts_as_missing_user() {
        let check = UserExists::new(users(Err(CommentError::Downstream(
            tonic::Status::unavailable("down"),
        ))));
        let err = check.check(&CallContext::new(), &input()).await.unwrap_err();
        assert!(matches!(err, CommentError::UserNotFound(1)));
    }

    #[tokio::test]
    async fn test_completed_stream_depends_on_policy() {
        let ctx = CallContext::new();

        let strict = StreamOpen::new(
            streams(Some(StreamStatus::Complete)),
            StreamPolicy::RejectCompleted,
        );
        assert!(matches!(
            strict.check(&ctx, &input()).await,
            Err(CommentError::StreamCompleted(2))
        ));

        let lenient = StreamOpen::new(
            streams(Some(StreamStatus::Complete)),
            StreamPolicy::AllowCompleted,
        );
        assert!(lenient.check(&ctx, &input()).await.is_ok());
    }

    #[tokio::test]
    async fn test_live_and_missing_streams() {
        let ctx = CallContext::new();
        for status in [StreamStatus::Scheduled, StreamStatus::Online, StreamStatus::Offline] {
            let check = StreamOpen::new(streams(Some(status)), StreamPolicy::RejectCompleted);
            assert!(check.check(&ctx, &input()).await.is_ok(), "{status:?}");
        }

        let check = StreamOpen::new(streams(None), StreamPolicy::RejectCompleted);
        assert!(matches!(
            check.check(&ctx, &input()).await,
            Err(CommentError::StreamNotFound(2))
        ));
    }

    #[tokio::test]
    async fn test_pipeline_stops_at_first_failure() {
        let mut stream_dir = MockStreamDirectory::new();
        stream_dir.expect_stream_status().never();

        let pipeline = PreconditionPipeline::for_comments(
            users(Ok(false)),
            Arc::new(stream_dir),
            StreamPolicy::RejectCompleted,
        );

        let err = pipeline.run(&CallContext::new(), &input()).await.unwrap_err();
        assert!(matches!(err, CommentError::UserNotFound(1)));
    }

    #[tokio::test]
    async fn test_empty_pipeline_passes() {
        let pipeline = PreconditionPipeline::new();
        assert!(pipeline.run(&CallContext::new(), &input()).await.is_ok());
    }
}
