use std::sync::Arc;

use grpc_client::CallContext;
use grpc_client::conversions::wire_now;
use tracing::{debug, instrument};
use validator::Validate;

use crate::error::{StreamError, StreamResult};
use crate::models::{CreateStream, NewStream, Stream, StreamPage, StreamQuery, UpdateStream};
use crate::repository::StreamRepository;
use crate::stream_key::generate_stream_key;

/// Service layer for Stream business logic
pub struct StreamService<R: StreamRepository> {
    repository: Arc<R>,
}

impl<R: StreamRepository> Clone for StreamService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: StreamRepository> StreamService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a stream, issuing a stream key when the caller left it empty
    #[instrument(skip(self, ctx, input), fields(user_id = input.user_id))]
    pub async fn create_stream(
        &self,
        ctx: &CallContext,
        mut input: CreateStream,
    ) -> StreamResult<Stream> {
        if input.stream_key.is_empty() {
            input.stream_key = generate_stream_key();
            debug!("Issued a new stream key");
        }
        input.validate()?;

        self.repository
            .create(ctx, NewStream::from_input(input, wire_now()))
            .await
    }

    #[instrument(skip(self, ctx))]
    pub async fn get_stream(&self, ctx: &CallContext, id: i32) -> StreamResult<Stream> {
        self.repository
            .get_by_id(ctx, id)
            .await?
            .ok_or(StreamError::NotFound(id))
    }

    #[instrument(skip(self, ctx, input))]
    pub async fn update_stream(
        &self,
        ctx: &CallContext,
        id: i32,
        input: UpdateStream,
    ) -> StreamResult<Stream> {
        input.validate()?;

        let mut stream = self
            .repository
            .get_by_id(ctx, id)
            .await?
            .ok_or(StreamError::NotFound(id))?;

        stream.apply_update(input);
        stream.updated_at = wire_now();

        self.repository.update(ctx, stream).await
    }

    #[instrument(skip(self, ctx))]
    pub async fn delete_stream(&self, ctx: &CallContext, id: i32) -> StreamResult<()> {
        let deleted = self.repository.delete(ctx, id).await?;

        if !deleted {
            return Err(StreamError::NotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self, ctx, query))]
    pub async fn list_streams(
        &self,
        ctx: &CallContext,
        query: StreamQuery,
    ) -> StreamResult<StreamPage> {
        let query = query.normalized();
        let (page, page_size) = (query.page, query.page_size);

        let (streams, total_count) = self.repository.list(ctx, query).await?;

        Ok(StreamPage {
            streams,
            total_count,
            page,
            page_size,
        })
    }
}
