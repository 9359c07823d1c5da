//! HTTP/JSON façade over [`StreamService`](crate::service::StreamService)
//!
//! Requests carry their arguments in a JSON body (ids included) or, for
//! listing, in the query string. Failures are rendered by
//! [`axum_helpers::AppError`] using the gRPC code of the underlying error.

mod http;
mod query;

pub use http::router;
pub use query::parse_stream_query;
