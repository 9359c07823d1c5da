//! Stream gRPC service implementation
//!
//! Request validation that depends on the wire format (timestamps, enum values)
//! happens in the `TryFrom` conversions of `domain_streams::conversions`;
//! everything else is left to [`StreamService`].

use std::sync::Arc;

use domain_streams::{
    CreateStream, StreamError, StreamQuery, StreamRepository, StreamService, UpdateStream,
};
use grpc_client::CallContext;
use rpc::stream::v1::{
    CreateStreamRequest, DeleteStreamRequest, DeleteStreamResponse, GetStreamRequest,
    ListStreamsRequest, ListStreamsResponse, Stream, UpdateStreamRequest,
    stream_service_server::StreamService as StreamApi,
};
use tonic::{Request, Response, Status};
use tracing::{error, info, warn};

fn reported(operation: &str, err: StreamError) -> Status {
    match &err {
        StreamError::Downstream(status) => {
            error!(
                operation,
                code = ?status.code(),
                "Database service call failed: {}",
                status.message()
            )
        }
        StreamError::InvalidRecord(details) => error!(operation, "{}", details),
        other => warn!(operation, "{}", other),
    }
    err.into()
}

/// gRPC service implementation for streams
pub struct StreamServiceImpl<R>
where
    R: StreamRepository + 'static,
{
    service: Arc<StreamService<R>>,
}

impl<R> StreamServiceImpl<R>
where
    R: StreamRepository + 'static,
{
    pub fn new(service: StreamService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[tonic::async_trait]
impl<R> StreamApi for StreamServiceImpl<R>
where
    R: StreamRepository + 'static,
{
    async fn create_stream(
        &self,
        request: Request<CreateStreamRequest>,
    ) -> Result<Response<Stream>, Status> {
        let ctx = CallContext::from_request(&request);
        let input = CreateStream::try_from(request.into_inner())
            .map_err(|e| reported("create_stream", e))?;

        let stream = self
            .service
            .create_stream(&ctx, input)
            .await
            .map_err(|e| reported("create_stream", e))?;

        info!(id = stream.id, user_id = stream.user_id, "Created stream");
        Ok(Response::new(stream.into()))
    }

    async fn get_stream(
        &self,
        request: Request<GetStreamRequest>,
    ) -> Result<Response<Stream>, Status> {
        let ctx = CallContext::from_request(&request);
        let id = request.into_inner().id;

        let stream = self
            .service
            .get_stream(&ctx, id)
            .await
            .map_err(|e| reported("get_stream", e))?;

        Ok(Response::new(stream.into()))
    }

    async fn update_stream(
        &self,
        request: Request<UpdateStreamRequest>,
    ) -> Result<Response<Stream>, Status> {
        let ctx = CallContext::from_request(&request);
        let req = request.into_inner();
        let id = req.id;
        let changes = UpdateStream::try_from(req).map_err(|e| reported("update_stream", e))?;

        let stream = self
            .service
            .update_stream(&ctx, id, changes)
            .await
            .map_err(|e| reported("update_stream", e))?;

        Ok(Response::new(stream.into()))
    }

    async fn delete_stream(
        &self,
        request: Request<DeleteStreamRequest>,
    ) -> Result<Response<DeleteStreamResponse>, Status> {
        let ctx = CallContext::from_request(&request);
        let id = request.into_inner().id;

        self.service
            .delete_stream(&ctx, id)
            .await
            .map_err(|e| reported("delete_stream", e))?;

        info!(id, "Deleted stream");
        Ok(Response::new(DeleteStreamResponse {}))
    }

    async fn list_streams(
        &self,
        request: Request<ListStreamsRequest>,
    ) -> Result<Response<ListStreamsResponse>, Status> {
        let ctx = CallContext::from_request(&request);
        let query = StreamQuery::try_from(request.into_inner())
            .map_err(|e| reported("list_streams", e))?;

        let page = self
            .service
            .list_streams(&ctx, query)
            .await
            .map_err(|e| reported("list_streams", e))?;

        Ok(Response::new(page.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use domain_streams::{NewStream, Stream as DomainStream, StreamResult};
    use rpc::stream::v1::{StreamFilter, StreamStatus};
    use std::sync::Mutex;
    use tonic::Code;

    #[derive(Default)]
    struct MemoryStreams {
        streams: Mutex<Vec<DomainStream>>,
    }

    #[async_trait]
    impl StreamRepository for MemoryStreams {
        async fn create(&self, _ctx: &CallContext, new: NewStream) -> StreamResult<DomainStream> {
            let mut streams = self.streams.lock().unwrap();
            let stream = DomainStream {
                id: streams.len() as i32 + 1,
                title: new.title,
                description: new.description,
                start_time: new.start_time,
                end_time: new.end_time,
                stream_key: new.stream_key,
                resolution: new.resolution,
                bitrate: new.bitrate,
                frame_rate: new.frame_rate,
                codec: new.codec,
                view_count: 0,
                protocol: new.protocol,
                status: new.status,
                user_id: new.user_id,
                created_at: new.created_at,
                updated_at: new.updated_at,
                deleted_at: None,
            };
            streams.push(stream.clone());
            Ok(stream)
        }

        async fn get_by_id(
            &self,
            _ctx: &CallContext,
            id: i32,
        ) -> StreamResult<Option<DomainStream>> {
            Ok(self.streams.lock().unwrap().iter().find(|s| s.id == id).cloned())
        }

        async fn update(
            &self,
            _ctx: &CallContext,
            stream: DomainStream,
        ) -> StreamResult<DomainStream> {
            let mut streams = self.streams.lock().unwrap();
            if let Some(slot) = streams.iter_mut().find(|s| s.id == stream.id) {
                *slot = stream.clone();
            }
            Ok(stream)
        }

        async fn delete(&self, _ctx: &CallContext, id: i32) -> StreamResult<bool> {
            let mut streams = self.streams.lock().unwrap();
            let before = streams.len();
            streams.retain(|s| s.id != id);
            Ok(before != streams.len())
        }

        async fn list(
            &self,
            _ctx: &CallContext,
            _query: StreamQuery,
        ) -> StreamResult<(Vec<DomainStream>, i64)> {
            let streams = self.streams.lock().unwrap().clone();
            let total = streams.len() as i64;
            Ok((streams, total))
        }
    }

    fn api() -> StreamServiceImpl<MemoryStreams> {
        StreamServiceImpl::new(StreamService::new(MemoryStreams::default()))
    }

    fn create_request() -> CreateStreamRequest {
        let start = Utc::now().timestamp() + 3600;
        CreateStreamRequest {
            title: "Launch".to_string(),
            start_time: start,
            end_time: start + 7200,
            protocol: "rtmp".to_string(),
            user_id: 5,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_issues_key_and_defaults_status() {
        let stream = api()
            .create_stream(Request::new(create_request()))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(stream.stream_key.len(), 32);
        assert_eq!(stream.status(), StreamStatus::Scheduled);
        assert_eq!(stream.created_at, stream.updated_at);
    }

    #[tokio::test]
    async fn test_short_key_is_invalid_argument() {
        let status = api()
            .create_stream(Request::new(CreateStreamRequest {
                stream_key: "short".to_string(),
                ..create_request()
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_update_status() {
        let api = api();
        let created = api
            .create_stream(Request::new(create_request()))
            .await
            .unwrap()
            .into_inner();

        let updated = api
            .update_stream(Request::new(UpdateStreamRequest {
                id: created.id,
                status: Some(StreamStatus::Online as i32),
                ..Default::default()
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(updated.status(), StreamStatus::Online);
        assert_eq!(updated.title, "Launch");
    }

    #[tokio::test]
    async fn test_delete_missing_stream() {
        let status = api()
            .delete_stream(Request::new(DeleteStreamRequest { id: 12 }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_list_applies_defaults_and_filter() {
        let response = api()
            .list_streams(Request::new(ListStreamsRequest {
                page: 0,
                page_size: -3,
                filter: Some(StreamFilter {
                    codec: "h264".to_string(),
                    status: vec![StreamStatus::Online as i32],
                    ..Default::default()
                }),
                ..Default::default()
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!((response.page, response.page_size), (1, 10));
        assert_eq!(response.total_count, 0);
    }
}
