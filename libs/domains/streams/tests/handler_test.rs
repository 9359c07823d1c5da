//! HTTP façade tests against an in-memory repository.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use domain_streams::{
    NewStream, Stream, StreamError, StreamQuery, StreamRepository, StreamResult, StreamService,
    StreamStatus, handlers,
};
use grpc_client::CallContext;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

#[derive(Clone, Default)]
struct InMemoryStreams {
    streams: Arc<Mutex<Vec<Stream>>>,
    unavailable: bool,
}

impl InMemoryStreams {
    fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    fn check(&self) -> StreamResult<()> {
        if self.unavailable {
            return Err(StreamError::Downstream(tonic::Status::unavailable("database is down")));
        }
        Ok(())
    }
}

#[async_trait]
impl StreamRepository for InMemoryStreams {
    async fn create(&self, _ctx: &CallContext, stream: NewStream) -> StreamResult<Stream> {
        self.check()?;
        let mut streams = self.streams.lock().unwrap();
        let created = Stream {
            id: streams.len() as i32 + 1,
            title: stream.title,
            description: stream.description,
            start_time: stream.start_time,
            end_time: stream.end_time,
            stream_key: stream.stream_key,
            resolution: stream.resolution,
            bitrate: stream.bitrate,
            frame_rate: stream.frame_rate,
            codec: stream.codec,
            view_count: 0,
            protocol: stream.protocol,
            status: stream.status,
            user_id: stream.user_id,
            created_at: stream.created_at,
            updated_at: stream.updated_at,
            deleted_at: None,
        };
        streams.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, _ctx: &CallContext, id: i32) -> StreamResult<Option<Stream>> {
        self.check()?;
        Ok(self.streams.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn update(&self, _ctx: &CallContext, stream: Stream) -> StreamResult<Stream> {
        self.check()?;
        let mut streams = self.streams.lock().unwrap();
        let slot = streams
            .iter_mut()
            .find(|s| s.id == stream.id)
            .ok_or(StreamError::NotFound(stream.id))?;
        *slot = stream.clone();
        Ok(stream)
    }

    async fn delete(&self, _ctx: &CallContext, id: i32) -> StreamResult<bool> {
        self.check()?;
        let mut streams = self.streams.lock().unwrap();
        let before = streams.len();
        streams.retain(|s| s.id != id);
        Ok(streams.len() != before)
    }

    async fn list(
        &self,
        _ctx: &CallContext,
        query: StreamQuery,
    ) -> StreamResult<(Vec<Stream>, i64)> {
        self.check()?;
        let streams = self.streams.lock().unwrap();
        let matching: Vec<_> = streams
            .iter()
            .filter(|s| query.filter.status.is_empty() || query.filter.status.contains(&s.status))
            .filter(|s| query.filter.user_id.is_none_or(|id| s.user_id == id))
            .cloned()
            .collect();
        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(((query.page - 1) * query.page_size) as usize)
            .take(query.page_size as usize)
            .collect();
        Ok((page, total))
    }
}

fn app(repo: InMemoryStreams) -> Router {
    handlers::router(StreamService::new(repo))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn new_stream_body(title: &str, user_id: i32) -> Value {
    json!({
        "title": title,
        "start_time": "2024-05-01T18:00:00Z",
        "end_time": "2024-05-01T20:00:00Z",
        "resolution": "1920x1080",
        "protocol": "rtmp",
        "user_id": user_id
    })
}

#[tokio::test]
async fn test_create_then_get() {
    let repo = InMemoryStreams::default();

    let response = app(repo.clone())
        .oneshot(json_request(Method::POST, "/v1/api/stream", new_stream_body("Launch", 3)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["status"], "SCHEDULED");
    assert_eq!(created["stream_key"].as_str().unwrap().len(), 32);

    let response = app(repo)
        .oneshot(json_request(Method::GET, "/v1/api/stream", json!({ "id": created["id"] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Launch");
}

#[tokio::test]
async fn test_create_with_short_key_is_bad_request() {
    let mut body = new_stream_body("Launch", 3);
    body["stream_key"] = json!("abc");

    let response = app(InMemoryStreams::default())
        .oneshot(json_request(Method::POST, "/v1/api/stream", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Failed to create stream");
    assert_eq!(body["details"], "invalid stream key: at least 10 characters required");
}

#[tokio::test]
async fn test_malformed_json() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/api/stream")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let response = app(InMemoryStreams::default()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid request format");
}

#[tokio::test]
async fn test_get_missing_stream() {
    let response = app(InMemoryStreams::default())
        .oneshot(json_request(Method::GET, "/v1/api/stream", json!({ "id": 41 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Failed to retrieve stream");
    assert_eq!(body["details"], "Stream not found: 41");
}

#[tokio::test]
async fn test_patch_updates_only_given_fields() {
    let repo = InMemoryStreams::default();
    app(repo.clone())
        .oneshot(json_request(Method::POST, "/v1/api/stream", new_stream_body("Launch", 3)))
        .await
        .unwrap();

    let response = app(repo)
        .oneshot(json_request(
            Method::PATCH,
            "/v1/api/stream",
            json!({ "id": 1, "status": "ONLINE", "codec": "av1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ONLINE");
    assert_eq!(body["codec"], "av1");
    assert_eq!(body["title"], "Launch");
}

#[tokio::test]
async fn test_delete_stream() {
    let repo = InMemoryStreams::default();
    app(repo.clone())
        .oneshot(json_request(Method::POST, "/v1/api/stream", new_stream_body("Launch", 3)))
        .await
        .unwrap();

    let response = app(repo.clone())
        .oneshot(json_request(Method::DELETE, "/v1/api/stream", json!({ "id": 1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "success", "message": "Stream deleted successfully" })
    );

    let response = app(repo)
        .oneshot(json_request(Method::DELETE, "/v1/api/stream", json!({ "id": 1 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_with_filters_and_paging() {
    let repo = InMemoryStreams::default();
    for (i, status) in [
        StreamStatus::Online,
        StreamStatus::Complete,
        StreamStatus::Online,
        StreamStatus::Offline,
        StreamStatus::Online,
    ]
    .into_iter()
    .enumerate()
    {
        let mut body = new_stream_body(&format!("Stream {i}"), 3);
        body["status"] = json!(status.to_string());
        app(repo.clone())
            .oneshot(json_request(Method::POST, "/v1/api/stream", body))
            .await
            .unwrap();
    }

    let request = Request::builder()
        .uri("/v1/api/streams?status=ONLINE&status=OFFLINE&page=2&page_size=2&user_id=abc")
        .body(Body::empty())
        .unwrap();
    let response = app(repo).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_count"], 4);
    assert_eq!(body["page"], 2);
    assert_eq!(body["page_size"], 2);
    assert_eq!(body["streams"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_defaults() {
    let request = Request::builder()
        .uri("/v1/api/streams")
        .body(Body::empty())
        .unwrap();
    let response = app(InMemoryStreams::default()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "streams": [], "total_count": 0, "page": 1, "page_size": 10 })
    );
}

#[tokio::test]
async fn test_downstream_failure_maps_to_internal_error() {
    let request = Request::builder()
        .uri("/v1/api/streams")
        .body(Body::empty())
        .unwrap();
    let response = app(InMemoryStreams::unavailable()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Failed to list streams");
    assert_eq!(body["details"], "database is down");
    assert!(body.get("validation_errors").is_none());
}
