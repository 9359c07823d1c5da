use async_trait::async_trait;
use grpc_client::CallContext;

use crate::error::StreamResult;
use crate::models::{NewStream, Stream, StreamQuery};

/// Repository trait for Stream persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StreamRepository: Send + Sync {
    async fn create(&self, ctx: &CallContext, stream: NewStream) -> StreamResult<Stream>;

    /// `None` when no stream has this id
    async fn get_by_id(&self, ctx: &CallContext, id: i32) -> StreamResult<Option<Stream>>;

    async fn update(&self, ctx: &CallContext, stream: Stream) -> StreamResult<Stream>;

    /// `false` when no stream has this id
    async fn delete(&self, ctx: &CallContext, id: i32) -> StreamResult<bool>;

    /// Matching streams for the requested page, plus the total match count
    async fn list(&self, ctx: &CallContext, query: StreamQuery) -> StreamResult<(Vec<Stream>, i64)>;
}
