//! Comment gRPC service implementation
//!
//! Requests are converted into domain inputs, the caller's deadline and request id are
//! captured into a [`CallContext`], and domain errors become statuses via
//! `From<CommentError> for Status`.

use std::sync::Arc;

use domain_comments::{CommentFilter, CommentService, CommentStore, CreateComment};
use grpc_client::CallContext;
use rpc::comment::v1::{
    Comment, CreateCommentRequest, DeleteCommentRequest, DeleteCommentResponse,
    GetCommentRequest, ListCommentsRequest, ListCommentsResponse, UpdateCommentRequest,
    comment_service_server::CommentService as CommentApi,
};
use tonic::{Request, Response, Status};
use tracing::{error, info, warn};

/// Log a failed call at a level matching its code before handing it back to tonic
fn reported(operation: &str, status: Status) -> Status {
    match status.code() {
        tonic::Code::Internal | tonic::Code::Unavailable | tonic::Code::Unknown => {
            error!(operation, code = ?status.code(), "{}", status.message())
        }
        _ => warn!(operation, code = ?status.code(), "{}", status.message()),
    }
    status
}

/// gRPC service implementation for comments
///
/// Generic over the comment store for testability.
pub struct CommentServiceImpl<S>
where
    S: CommentStore + 'static,
{
    service: Arc<CommentService<S>>,
}

impl<S> CommentServiceImpl<S>
where
    S: CommentStore + 'static,
{
    pub fn new(service: CommentService<S>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[tonic::async_trait]
impl<S> CommentApi for CommentServiceImpl<S>
where
    S: CommentStore + 'static,
{
    async fn create_comment(
        &self,
        request: Request<CreateCommentRequest>,
    ) -> Result<Response<Comment>, Status> {
        let ctx = CallContext::from_request(&request);
        let input = CreateComment::from(request.into_inner());

        let comment = self
            .service
            .create_comment(&ctx, input)
            .await
            .map_err(|e| reported("create_comment", e.into()))?;

        info!(id = comment.id, "Created comment");
        Ok(Response::new(comment.into()))
    }

    async fn get_comment(
        &self,
        request: Request<GetCommentRequest>,
    ) -> Result<Response<Comment>, Status> {
        let ctx = CallContext::from_request(&request);
        let id = request.into_inner().id;

        let comment = self
            .service
            .get_comment(&ctx, id)
            .await
            .map_err(|e| reported("get_comment", e.into()))?;

        Ok(Response::new(comment.into()))
    }

    async fn update_comment(
        &self,
        request: Request<UpdateCommentRequest>,
    ) -> Result<Response<Comment>, Status> {
        let ctx = CallContext::from_request(&request);
        let req = request.into_inner();

        let comment = self
            .service
            .update_comment(&ctx, req.id, req.content)
            .await
            .map_err(|e| reported("update_comment", e.into()))?;

        Ok(Response::new(comment.into()))
    }

    async fn delete_comment(
        &self,
        request: Request<DeleteCommentRequest>,
    ) -> Result<Response<DeleteCommentResponse>, Status> {
        let ctx = CallContext::from_request(&request);
        let id = request.into_inner().id;

        self.service
            .delete_comment(&ctx, id)
            .await
            .map_err(|e| reported("delete_comment", e.into()))?;

        info!(id, "Deleted comment");
        Ok(Response::new(DeleteCommentResponse {}))
    }

    async fn list_comments(
        &self,
        request: Request<ListCommentsRequest>,
    ) -> Result<Response<ListCommentsResponse>, Status> {
        let ctx = CallContext::from_request(&request);
        let filter = CommentFilter::from(request.into_inner());

        let page = self
            .service
            .list_comments(&ctx, filter)
            .await
            .map_err(|e| reported("list_comments", e.into()))?;

        Ok(Response::new(ListCommentsResponse {
            comments: page.comments.into_iter().map(Into::into).collect(),
            total_count: page.total_count,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use domain_comments::{
        Comment as DomainComment, CommentPage, CommentResult, NewComment, StreamDirectory,
        StreamPolicy, UserDirectory,
    };
    use rpc::stream::v1::StreamStatus;
    use std::sync::Mutex;
    use tonic::Code;

    #[derive(Default)]
    struct MemoryStore {
        comments: Mutex<Vec<DomainComment>>,
    }

    #[async_trait]
    impl CommentStore for MemoryStore {
        async fn create(
            &self,
            _ctx: &CallContext,
            new: NewComment,
        ) -> CommentResult<DomainComment> {
            let mut comments = self.comments.lock().unwrap();
            let comment = DomainComment {
                id: comments.len() as i32 + 1,
                content: new.content,
                user_id: new.user_id,
                stream_id: new.stream_id,
                created_at: new.created_at,
                updated_at: new.updated_at,
                deleted_at: None,
            };
            comments.push(comment.clone());
            Ok(comment)
        }

        async fn get(&self, _ctx: &CallContext, id: i32) -> CommentResult<Option<DomainComment>> {
            Ok(self.comments.lock().unwrap().iter().find(|c| c.id == id).cloned())
        }

        async fn update(
            &self,
            _ctx: &CallContext,
            comment: DomainComment,
        ) -> CommentResult<DomainComment> {
            let mut comments = self.comments.lock().unwrap();
            if let Some(slot) = comments.iter_mut().find(|c| c.id == comment.id) {
                *slot = comment.clone();
            }
            Ok(comment)
        }

        async fn delete(&self, _ctx: &CallContext, id: i32) -> CommentResult<bool> {
            let mut comments = self.comments.lock().unwrap();
            let before = comments.len();
            comments.retain(|c| c.id != id);
            Ok(before != comments.len())
        }

        async fn list(
            &self,
            _ctx: &CallContext,
            _filter: CommentFilter,
        ) -> CommentResult<CommentPage> {
            let comments = self.comments.lock().unwrap().clone();
            let total_count = comments.len() as i64;
            Ok(CommentPage { comments, total_count })
        }
    }

    /// Users 1..=10 exist
    struct KnownUsers;

    #[async_trait]
    impl UserDirectory for KnownUsers {
        async fn user_exists(&self, _ctx: &CallContext, id: i32) -> CommentResult<bool> {
            Ok((1..=10).contains(&id))
        }
    }

    /// Stream 1 is online, stream 2 is complete, nothing else exists
    struct KnownStreams;

    #[async_trait]
    impl StreamDirectory for KnownStreams {
        async fn stream_status(
            &self,
            _ctx: &CallContext,
            id: i32,
        ) -> CommentResult<Option<StreamStatus>> {
            Ok(match id {
                1 => Some(StreamStatus::Online),
                2 => Some(StreamStatus::Complete),
                _ => None,
            })
        }
    }

    fn api() -> CommentServiceImpl<MemoryStore> {
        CommentServiceImpl::new(CommentService::new(
            MemoryStore::default(),
            KnownUsers,
            KnownStreams,
            StreamPolicy::RejectCompleted,
        ))
    }

    fn create_request(
        content: &str,
        user_id: i32,
        stream_id: i32,
    ) -> Request<CreateCommentRequest> {
        Request::new(CreateCommentRequest {
            content: content.to_string(),
            user_id,
            stream_id,
        })
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let api = api();

        let created = api
            .create_comment(create_request("hello", 1, 1))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(created.created_at, created.updated_at);

        let fetched = api
            .get_comment(Request::new(GetCommentRequest { id: created.id }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(fetched.content, "hello");
        assert_eq!((fetched.user_id, fetched.stream_id), (1, 1));
    }

    #[tokio::test]
    async fn test_status_codes() {
        let api = api();

        let cases = [
            (create_request("", 1, 1), Code::InvalidArgument),
            (create_request(&"x".repeat(1001), 1, 1), Code::InvalidArgument),
            (create_request("hi", 99, 1), Code::NotFound),
            (create_request("hi", 1, 99), Code::NotFound),
            (create_request("hi", 1, 2), Code::FailedPrecondition),
        ];
        for (request, code) in cases {
            let status = api.create_comment(request).await.unwrap_err();
            assert_eq!(status.code(), code, "{}", status.message());
        }
    }

    #[tokio::test]
    async fn test_update_missing_comment() {
        let status = api()
            .update_comment(Request::new(UpdateCommentRequest {
                id: 5,
                content: "edited".to_string(),
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_list_rejects_page_zero() {
        let status = api()
            .list_comments(Request::new(ListCommentsRequest {
                page: 0,
                page_size: 10,
                ..Default::default()
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let api = api();
        let created = api
            .create_comment(create_request("bye", 2, 1))
            .await
            .unwrap()
            .into_inner();

        api.delete_comment(Request::new(DeleteCommentRequest { id: created.id }))
            .await
            .unwrap();

        let status = api
            .get_comment(Request::new(GetCommentRequest { id: created.id }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
    }
}
