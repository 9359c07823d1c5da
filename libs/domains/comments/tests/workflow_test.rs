//! Comment workflow against in-memory dependencies.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use domain_comments::{
    Comment, CommentError, CommentFilter, CommentPage, CommentResult, CommentService,
    CommentStore, CreateComment, NewComment, StreamDirectory, StreamPolicy, UserDirectory,
};
use grpc_client::CallContext;
use rpc::stream::v1::StreamStatus;

#[derive(Clone, Default)]
struct InMemoryStore {
    comments: Arc<Mutex<Vec<Comment>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryStore {
    fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommentStore for InMemoryStore {
    async fn create(&self, _ctx: &CallContext, comment: NewComment) -> CommentResult<Comment> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut comments = self.comments.lock().unwrap();
        let created = Comment {
            id: comments.len() as i32 + 1,
            content: comment.content,
            user_id: comment.user_id,
            stream_id: comment.stream_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            deleted_at: None,
        };
        comments.push(created.clone());
        Ok(created)
    }

    async fn get(&self, _ctx: &CallContext, id: i32) -> CommentResult<Option<Comment>> {
        let comments = self.comments.lock().unwrap();
        Ok(comments.iter().find(|c| c.id == id).cloned())
    }

    async fn update(&self, _ctx: &CallContext, comment: Comment) -> CommentResult<Comment> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut comments = self.comments.lock().unwrap();
        let slot = comments
            .iter_mut()
            .find(|c| c.id == comment.id)
            .ok_or(CommentError::NotFound(comment.id))?;
        *slot = comment.clone();
        Ok(comment)
    }

    async fn delete(&self, _ctx: &CallContext, id: i32) -> CommentResult<bool> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        Ok(comments.len() != before)
    }

    async fn list(&self, _ctx: &CallContext, filter: CommentFilter) -> CommentResult<CommentPage> {
        let comments = self.comments.lock().unwrap();
        let matching: Vec<_> = comments
            .iter()
            .filter(|c| filter.user_id.is_none_or(|id| c.user_id == id))
            .filter(|c| filter.stream_id.is_none_or(|id| c.stream_id == id))
            .cloned()
            .collect();
        let total_count = matching.len() as i64;
        let comments = matching
            .into_iter()
            .skip(((filter.page - 1) * filter.page_size) as usize)
            .take(filter.page_size as usize)
            .collect();
        Ok(CommentPage {
            comments,
            total_count,
        })
    }
}

struct Users(Vec<i32>);

#[async_trait]
impl UserDirectory for Users {
    async fn user_exists(&self, _ctx: &CallContext, user_id: i32) -> CommentResult<bool> {
        Ok(self.0.contains(&user_id))
    }
}

struct Streams(HashMap<i32, StreamStatus>);

#[async_trait]
impl StreamDirectory for Streams {
    async fn stream_status(
        &self,
        _ctx: &CallContext,
        stream_id: i32,
    ) -> CommentResult<Option<StreamStatus>> {
        Ok(self.0.get(&stream_id).copied())
    }
}

const LIVE_STREAM: i32 = 2;
const FINISHED_STREAM: i32 = 3;

fn setup(policy: StreamPolicy) -> (InMemoryStore, CommentService<InMemoryStore>) {
    let store = InMemoryStore::default();
    let streams = Streams(HashMap::from([
        (LIVE_STREAM, StreamStatus::Online),
        (FINISHED_STREAM, StreamStatus::Complete),
    ]));
    let service = CommentService::new(store.clone(), Users(vec![1, 2]), streams, policy);
    (store, service)
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (_, service) = setup(StreamPolicy::RejectCompleted);
    let ctx = CallContext::new();

    let created = service
        .create_comment(&ctx, CreateComment::new("hello", 1, LIVE_STREAM))
        .await
        .unwrap();
    let fetched = service.get_comment(&ctx, created.id).await.unwrap();

    assert_eq!(fetched.content, "hello");
    assert_eq!(fetched.user_id, 1);
    assert_eq!(fetched.stream_id, LIVE_STREAM);
    assert_eq!(fetched.created_at, fetched.updated_at);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_unknown_user_is_never_persisted() {
    let (store, service) = setup(StreamPolicy::RejectCompleted);

    let err = service
        .create_comment(&CallContext::new(), CreateComment::new("hello", 42, LIVE_STREAM))
        .await
        .unwrap_err();

    assert!(matches!(err, CommentError::UserNotFound(42)));
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_unknown_stream_is_never_persisted() {
    let (store, service) = setup(StreamPolicy::RejectCompleted);

    let err = service
        .create_comment(&CallContext::new(), CreateComment::new("hello", 1, 77))
        .await
        .unwrap_err();

    assert!(matches!(err, CommentError::StreamNotFound(77)));
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_completed_stream_policy() {
    let (store, strict) = setup(StreamPolicy::RejectCompleted);
    let err = strict
        .create_comment(&CallContext::new(), CreateComment::new("late", 1, FINISHED_STREAM))
        .await
        .unwrap_err();
    assert!(matches!(err, CommentError::StreamCompleted(FINISHED_STREAM)));
    assert_eq!(store.writes(), 0);

    let (store, lenient) = setup(StreamPolicy::AllowCompleted);
    lenient
        .create_comment(&CallContext::new(), CreateComment::new("late", 1, FINISHED_STREAM))
        .await
        .unwrap();
    assert_eq!(store.writes(), 1);
}

#[tokio::test]
async fn test_update_missing_comment_leaves_store_untouched() {
    let (store, service) = setup(StreamPolicy::RejectCompleted);

    let err = service
        .update_comment(&CallContext::new(), 9, "edited".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, CommentError::NotFound(9)));
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_update_then_delete() {
    let (_, service) = setup(StreamPolicy::RejectCompleted);
    let ctx = CallContext::new();

    let created = service
        .create_comment(&ctx, CreateComment::new("first", 2, LIVE_STREAM))
        .await
        .unwrap();
    let updated = service
        .update_comment(&ctx, created.id, "second".to_string())
        .await
        .unwrap();
    assert_eq!(updated.content, "second");
    assert_eq!(updated.created_at, created.created_at);

    service.delete_comment(&ctx, created.id).await.unwrap();
    assert!(matches!(
        service.get_comment(&ctx, created.id).await,
        Err(CommentError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_comment(&ctx, created.id).await,
        Err(CommentError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_with_default_page_size() {
    let (_, service) = setup(StreamPolicy::RejectCompleted);
    let ctx = CallContext::new();

    for i in 0..25 {
        service
            .create_comment(&ctx, CreateComment::new(format!("comment {i}"), 1, LIVE_STREAM))
            .await
            .unwrap();
    }

    let page = service
        .list_comments(
            &ctx,
            CommentFilter {
                page: 1,
                page_size: 0,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(page.comments.len() <= 10);
    assert_eq!(page.comments.len(), 10);
    assert_eq!(page.total_count, 25);

    let last = service
        .list_comments(
            &ctx,
            CommentFilter {
                stream_id: Some(LIVE_STREAM),
                page: 3,
                page_size: 10,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(last.comments.len(), 5);
}
