use async_trait::async_trait;
use grpc_client::{CallContext, TracingInterceptor, configure_client};
use rpc::db::v1::database_service_client::DatabaseServiceClient;
use rpc::db::v1::{CommentRecord, ListCommentRecordsRequest, RecordId};
use rpc::stream::v1::stream_service_client::StreamServiceClient;
use rpc::stream::v1::{GetStreamRequest, StreamStatus};
use rpc::user::v1::GetUserRequest;
use rpc::user::v1::user_service_client::UserServiceClient;
use tonic::Code;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;
use tracing::instrument;

use super::{CommentStore, StreamDirectory, UserDirectory};
use crate::error::{CommentError, CommentResult};
use crate::models::{Comment, CommentFilter, CommentPage, NewComment};

type Intercepted = InterceptedService<Channel, TracingInterceptor>;

/// `NOT_FOUND` becomes `None`, anything else is a downstream failure.
fn found<T>(result: Result<tonic::Response<T>, tonic::Status>) -> CommentResult<Option<T>> {
    match result {
        Ok(response) => Ok(Some(response.into_inner())),
        Err(status) if status.code() == Code::NotFound => Ok(None),
        Err(status) => Err(CommentError::Downstream(status)),
    }
}

/// [`CommentStore`] backed by `db.v1.DatabaseService`
#[derive(Clone)]
pub struct GrpcCommentStore {
    client: DatabaseServiceClient<Intercepted>,
}

impl GrpcCommentStore {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: configure_client!(DatabaseServiceClient::with_interceptor(
                channel,
                TracingInterceptor::new()
            )),
        }
    }
}

#[async_trait]
impl CommentStore for GrpcCommentStore {
    #[instrument(
        skip(self, ctx, comment),
        fields(user_id = comment.user_id, stream_id = comment.stream_id)
    )]
    async fn create(&self, ctx: &CallContext, comment: NewComment) -> CommentResult<Comment> {
        let record = self
            .client
            .clone()
            .create_comment(ctx.request(CommentRecord::from(comment))?)
            .await?
            .into_inner();
        Comment::try_from(record)
    }

    #[instrument(skip(self, ctx))]
    async fn get(&self, ctx: &CallContext, id: i32) -> CommentResult<Option<Comment>> {
        let result = self
            .client
            .clone()
            .get_comment(ctx.request(RecordId { id })?)
            .await;
        found(result)?.map(Comment::try_from).transpose()
    }

    #[instrument(skip(self, ctx, comment), fields(id = comment.id))]
    async fn update(&self, ctx: &CallContext, comment: Comment) -> CommentResult<Comment> {
        let record = self
            .client
            .clone()
            .update_comment(ctx.request(CommentRecord::from(comment))?)
            .await?
            .into_inner();
        Comment::try_from(record)
    }

    #[instrument(skip(self, ctx))]
    async fn delete(&self, ctx: &CallContext, id: i32) -> CommentResult<bool> {
        let result = self
            .client
            .clone()
            .delete_comment(ctx.request(RecordId { id })?)
            .await;
        Ok(found(result)?.is_some())
    }

    #[instrument(skip(self, ctx))]
    async fn list(&self, ctx: &CallContext, filter: CommentFilter) -> CommentResult<CommentPage> {
        let response = self
            .client
            .clone()
            .list_comments(ctx.request(ListCommentRecordsRequest::from(filter))?)
            .await?
            .into_inner();

        let comments = response
            .comments
            .into_iter()
            .map(Comment::try_from)
            .collect::<CommentResult<Vec<_>>>()?;

        Ok(CommentPage {
            comments,
            total_count: response.total_count,
        })
    }
}

/// [`UserDirectory`] backed by `user.v1.UserService`
#[derive(Clone)]
pub struct GrpcUserDirectory {
    client: UserServiceClient<Intercepted>,
}

impl GrpcUserDirectory {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: configure_client!(UserServiceClient::with_interceptor(
                channel,
                TracingInterceptor::new()
            )),
        }
    }
}

#[async_trait]
impl UserDirectory for GrpcUserDirectory {
    #[instrument(skip(self, ctx))]
    async fn user_exists(&self, ctx: &CallContext, user_id: i32) -> CommentResult<bool> {
        let result = self
            .client
            .clone()
            .get_user(ctx.request(GetUserRequest { id: user_id })?)
            .await;
        Ok(found(result)?.is_some())
    }
}

/// [`StreamDirectory`] backed by `stream.v1.StreamService`
#[derive(Clone)]
pub struct GrpcStreamDirectory {
    client: StreamServiceClient<Intercepted>,
}

impl GrpcStreamDirectory {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: configure_client!(StreamServiceClient::with_interceptor(
                channel,
                TracingInterceptor::new()
            )),
        }
    }
}

#[async_trait]
impl StreamDirectory for GrpcStreamDirectory {
    #[instrument(skip(self, ctx))]
    async fn stream_status(
        &self,
        ctx: &CallContext,
        stream_id: i32,
    ) -> CommentResult<Option<StreamStatus>> {
        let result = self
            .client
            .clone()
            .get_stream(ctx.request(GetStreamRequest { id: stream_id })?)
            .await;

        // Unknown enum values read as Unspecified: the stream exists in an unrecognised state
        Ok(found(result)?.map(|stream| {
            StreamStatus::try_from(stream.status).unwrap_or(StreamStatus::Unspecified)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_absent() {
        let result: Result<tonic::Response<()>, _> = Err(tonic::Status::not_found("gone"));
        assert!(found(result).unwrap().is_none());
    }

    #[test]
    fn test_other_errors_propagate() {
        let result: Result<tonic::Response<()>, _> = Err(tonic::Status::unavailable("down"));
        assert!(matches!(
            found(result),
            Err(CommentError::Downstream(s)) if s.code() == Code::Unavailable
        ));
    }

    #[tokio::test]
    async fn test_expired_context_fails_before_sending() {
        let channel = grpc_client::create_channel_lazy("http://127.0.0.1:1").unwrap();
        let store = GrpcCommentStore::new(channel);
        let ctx = CallContext::new().with_timeout(std::time::Duration::ZERO);

        let err = store.get(&ctx, 1).await.unwrap_err();
        assert!(matches!(err, CommentError::Downstream(s) if s.code() == Code::DeadlineExceeded));
    }
}
