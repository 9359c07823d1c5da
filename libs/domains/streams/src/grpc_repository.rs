use async_trait::async_trait;
use grpc_client::{CallContext, TracingInterceptor, configure_client};
use rpc::db::v1::database_service_client::DatabaseServiceClient;
use rpc::db::v1::{ListStreamRecordsRequest, RecordId, StreamRecord};
use tonic::Code;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;
use tracing::instrument;

use crate::error::{StreamError, StreamResult};
use crate::models::{NewStream, Stream, StreamQuery};
use crate::repository::StreamRepository;

/// [`StreamRepository`] backed by `db.v1.DatabaseService`
#[derive(Clone)]
pub struct GrpcStreamRepository {
    client: DatabaseServiceClient<InterceptedService<Channel, TracingInterceptor>>,
}

impl GrpcStreamRepository {
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
impl StreamRepository for GrpcStreamRepository {
    #[instrument(skip(self, ctx, stream), fields(user_id = stream.user_id))]
    async fn create(&self, ctx: &CallContext, stream: NewStream) -> StreamResult<Stream> {
        let record = self
            .client
            .clone()
            .create_stream(ctx.request(StreamRecord::from(stream))?)
            .await?
            .into_inner();
        Stream::try_from(record)
    }

    #[instrument(skip(self, ctx))]
    async fn get_by_id(&self, ctx: &CallContext, id: i32) -> StreamResult<Option<Stream>> {
        match self.client.clone().get_stream(ctx.request(RecordId { id })?).await {
            Ok(response) => Stream::try_from(response.into_inner()).map(Some),
            Err(status) if status.code() == Code::NotFound => Ok(None),
            Err(status) => Err(StreamError::Downstream(status)),
        }
    }

    #[instrument(skip(self, ctx, stream), fields(id = stream.id))]
    async fn update(&self, ctx: &CallContext, stream: Stream) -> StreamResult<Stream> {
        let record = self
            .client
            .clone()
            .update_stream(ctx.request(StreamRecord::from(stream))?)
            .await?
            .into_inner();
        Stream::try_from(record)
    }

    #[instrument(skip(self, ctx))]
    async fn delete(&self, ctx: &CallContext, id: i32) -> StreamResult<bool> {
        match self.client.clone().delete_stream(ctx.request(RecordId { id })?).await {
            Ok(_) => Ok(true),
            Err(status) if status.code() == Code::NotFound => Ok(false),
            Err(status) => Err(StreamError::Downstream(status)),
        }
    }

    #[instrument(skip(self, ctx, query), fields(page = query.page, page_size = query.page_size))]
    async fn list(
        &self,
        ctx: &CallContext,
        query: StreamQuery,
    ) -> StreamResult<(Vec<Stream>, i64)> {
        let response = self
            .client
            .clone()
            .list_streams(ctx.request(ListStreamRecordsRequest::from(query))?)
            .await?
            .into_inner();

        let streams = response
            .streams
            .into_iter()
            .map(Stream::try_from)
            .collect::<StreamResult<Vec<_>>>()?;

        Ok((streams, response.total_count))
    }
}
