use std::sync::Arc;

use grpc_client::CallContext;
use grpc_client::conversions::wire_now;
use tracing::instrument;

use crate::clients::{CommentStore, StreamDirectory, UserDirectory};
use crate::error::{CommentError, CommentResult};
use crate::models::{Comment, CommentFilter, CommentPage, CreateComment, NewComment, StreamPolicy};
use crate::preconditions::PreconditionPipeline;
use crate::validation::{validate_content, validate_filter};

/// Comment workflow: validation, cross-service preconditions, persistence
pub struct CommentService<S: CommentStore> {
    store: Arc<S>,
    preconditions: Arc<PreconditionPipeline>,
}

impl<S: CommentStore> Clone for CommentService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            preconditions: Arc::clone(&self.preconditions),
        }
    }
}

impl<S: CommentStore> CommentService<S> {
    pub fn new<U, D>(store: S, users: U, streams: D, policy: StreamPolicy) -> Self
    where
        U: UserDirectory + 'static,
        D: StreamDirectory + 'static,
    {
        Self::with_preconditions(
            store,
            PreconditionPipeline::for_comments(Arc::new(users), Arc::new(streams), policy),
        )
    }

    pub fn with_preconditions(store: S, preconditions: PreconditionPipeline) -> Self {
        Self {
            store: Arc::new(store),
            preconditions: Arc::new(preconditions),
        }
    }

    /// Create a comment once its content is valid and every precondition holds
    #[instrument(
        skip(self, ctx, input),
        fields(user_id = input.user_id, stream_id = input.stream_id)
    )]
    pub async fn create_comment(
        &self,
        ctx: &CallContext,
        input: CreateComment,
    ) -> CommentResult<Comment> {
        validate_content(&input.content)?;
        self.preconditions.run(ctx, &input).await?;

        let now = wire_now();
        let comment = NewComment {
            content: input.content,
            user_id: input.user_id,
            stream_id: input.stream_id,
            created_at: now,
            updated_at: now,
        };

        self.store.create(ctx, comment).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_comment(&self, ctx: &CallContext, id: i32) -> CommentResult<Comment> {
        self.store
            .get(ctx, id)
            .await?
            .ok_or(CommentError::NotFound(id))
    }

    /// Replace the content of an existing comment.
    ///
    /// Any caller may edit any comment.
    #[instrument(skip(self, ctx, content))]
    pub async fn update_comment(
        &self,
        ctx: &CallContext,
        id: i32,
        content: String,
    ) -> CommentResult<Comment> {
        validate_content(&content)?;

        let mut comment = self
            .store
            .get(ctx, id)
            .await?
            .ok_or(CommentError::NotFound(id))?;

        comment.content = content;
        comment.updated_at = wire_now();

        self.store.update(ctx, comment).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn delete_comment(&self, ctx: &CallContext, id: i32) -> CommentResult<()> {
        let deleted = self.store.delete(ctx, id).await?;

        if !deleted {
            return Err(CommentError::NotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self, ctx))]
    pub async fn list_comments(
        &self,
        ctx: &CallContext,
        mut filter: CommentFilter,
    ) -> CommentResult<CommentPage> {
        validate_filter(&mut filter)?;
        self.store.list(ctx, filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{MockCommentStore, MockStreamDirectory, MockUserDirectory};
    use chrono::{Duration, Utc};
    use mockall::predicate::{always, eq};
    use rpc::stream::v1::StreamStatus;

    fn stored(id: i32, content: &str) -> Comment {
        let at = Utc::now() - Duration::hours(1);
        Comment {
            id,
            content: content.to_string(),
            user_id: 1,
            stream_id: 2,
            created_at: at,
            updated_at: at,
            deleted_at: None,
        }
    }

    fn known_user() -> MockUserDirectory {
        let mut users = MockUserDirectory::new();
        users.expect_user_exists().returning(|_, _| Ok(true));
        users
    }

    fn stream_with(status: StreamStatus) -> MockStreamDirectory {
        let mut streams = MockStreamDirectory::new();
        streams
            .expect_stream_status()
            .returning(move |_, _| Ok(Some(status)));
        streams
    }

    fn service(
        store: MockCommentStore,
        users: MockUserDirectory,
        streams: MockStreamDirectory,
    ) -> CommentService<MockCommentStore> {
        CommentService::new(store, users, streams, StreamPolicy::RejectCompleted)
    }

    #[tokio::test]
    async fn test_create_comment_success() {
        let mut store = MockCommentStore::new();
        store
            .expect_create()
            .withf(|_, c| {
                c.content == "hello"
                    && c.user_id == 1
                    && c.stream_id == 2
                    && c.created_at == c.updated_at
            })
            .times(1)
            .returning(|_, c| {
                Ok(Comment {
                    id: 10,
                    content: c.content,
                    user_id: c.user_id,
                    stream_id: c.stream_id,
                    created_at: c.created_at,
                    updated_at: c.updated_at,
                    deleted_at: None,
                })
            });

        let service = service(store, known_user(), stream_with(StreamStatus::Online));
        let comment = service
            .create_comment(&CallContext::new(), CreateComment::new("hello", 1, 2))
            .await
            .unwrap();

        assert_eq!(comment.id, 10);
        assert_eq!(comment.created_at, comment.updated_at);
    }

    #[tokio::test]
    async fn test_create_validates_before_any_call() {
        let mut store = MockCommentStore::new();
        store.expect_create().never();
        let mut users = MockUserDirectory::new();
        users.expect_user_exists().never();
        let mut streams = MockStreamDirectory::new();
        streams.expect_stream_status().never();

        let service = service(store, users, streams);
        let ctx = CallContext::new();

        let err = service
            .create_comment(&ctx, CreateComment::new("", 1, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, CommentError::EmptyContent));

        let err = service
            .create_comment(&ctx, CreateComment::new("x".repeat(1001), 1, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, CommentError::ContentTooLong { .. }));
    }

    #[tokio::test]
    async fn test_create_unknown_user_never_persists() {
        let mut store = MockCommentStore::new();
        store.expect_create().never();
        let mut users = MockUserDirectory::new();
        users
            .expect_user_exists()
            .with(always(), eq(99))
            .returning(|_, _| Ok(false));
        let mut streams = MockStreamDirectory::new();
        streams.expect_stream_status().never();

        let err = service(store, users, streams)
            .create_comment(&CallContext::new(), CreateComment::new("hello", 99, 2))
            .await
            .unwrap_err();

        assert!(matches!(err, CommentError::UserNotFound(99)));
    }

    #[tokio::test]
    async fn test_create_on_completed_stream_never_persists() {
        let mut store = MockCommentStore::new();
        store.expect_create().never();

        let err = service(store, known_user(), stream_with(StreamStatus::Complete))
            .create_comment(&CallContext::new(), CreateComment::new("hello", 1, 2))
            .await
            .unwrap_err();

        assert!(matches!(err, CommentError::StreamCompleted(2)));
    }

    #[tokio::test]
    async fn test_create_propagates_store_failure() {
        let mut store = MockCommentStore::new();
        store
            .expect_create()
            .returning(|_, _| Err(CommentError::Downstream(tonic::Status::unavailable("db down"))));

        let err = service(store, known_user(), stream_with(StreamStatus::Scheduled))
            .create_comment(&CallContext::new(), CreateComment::new("hello", 1, 2))
            .await
            .unwrap_err();

        assert_eq!(err.code(), tonic::Code::Internal);
    }

    #[tokio::test]
    async fn test_get_comment_not_found() {
        let mut store = MockCommentStore::new();
        store.expect_get().with(always(), eq(5)).returning(|_, _| Ok(None));

        let err = service(store, MockUserDirectory::new(), MockStreamDirectory::new())
            .get_comment(&CallContext::new(), 5)
            .await
            .unwrap_err();

        assert!(matches!(err, CommentError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_update_comment_success() {
        let original = stored(3, "before");
        let created_at = original.created_at;

        let mut store = MockCommentStore::new();
        store
            .expect_get()
            .with(always(), eq(3))
            .returning(move |_, _| Ok(Some(original.clone())));
        store
            .expect_update()
            .withf(move |_, c| {
                c.id == 3
                    && c.content == "after"
                    && c.created_at == created_at
                    && c.updated_at > created_at
            })
            .times(1)
            .returning(|_, c| Ok(c));

        let comment = service(store, MockUserDirectory::new(), MockStreamDirectory::new())
            .update_comment(&CallContext::new(), 3, "after".to_string())
            .await
            .unwrap();

        assert_eq!(comment.content, "after");
    }

    #[tokio::test]
    async fn test_update_missing_comment_has_no_side_effect() {
        let mut store = MockCommentStore::new();
        store.expect_get().returning(|_, _| Ok(None));
        store.expect_update().never();

        let err = service(store, MockUserDirectory::new(), MockStreamDirectory::new())
            .update_comment(&CallContext::new(), 404, "after".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, CommentError::NotFound(404)));
    }

    #[tokio::test]
    async fn test_update_rejects_empty_content_without_lookup() {
        let mut store = MockCommentStore::new();
        store.expect_get().never();

        let err = service(store, MockUserDirectory::new(), MockStreamDirectory::new())
            .update_comment(&CallContext::new(), 1, String::new())
            .await
            .unwrap_err();

        assert!(matches!(err, CommentError::EmptyContent));
    }

    #[tokio::test]
    async fn test_delete_comment() {
        let mut store = MockCommentStore::new();
        store.expect_delete().with(always(), eq(1)).returning(|_, _| Ok(true));
        store.expect_delete().with(always(), eq(2)).returning(|_, _| Ok(false));

        let service = service(store, MockUserDirectory::new(), MockStreamDirectory::new());
        let ctx = CallContext::new();

        assert!(service.delete_comment(&ctx, 1).await.is_ok());
        assert!(matches!(
            service.delete_comment(&ctx, 2).await,
            Err(CommentError::NotFound(2))
        ));
    }

    #[tokio::test]
    async fn test_list_comments_normalizes_filter() {
        let mut store = MockCommentStore::new();
        store
            .expect_list()
            .withf(|_, f| f.page == 2 && f.page_size == 100 && f.stream_id == Some(2))
            .times(1)
            .returning(|_, _| {
                Ok(CommentPage {
                    comments: vec![],
                    total_count: 250,
                })
            });

        let page = service(store, MockUserDirectory::new(), MockStreamDirectory::new())
            .list_comments(
                &CallContext::new(),
                CommentFilter {
                    stream_id: Some(2),
                    page: 2,
                    page_size: 500,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(page.total_count, 250);
    }

    #[tokio::test]
    async fn test_list_comments_invalid_page() {
        let mut store = MockCommentStore::new();
        store.expect_list().never();

        let err = service(store, MockUserDirectory::new(), MockStreamDirectory::new())
            .list_comments(&CallContext::new(), CommentFilter::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CommentError::InvalidPage(0)));
    }
}
