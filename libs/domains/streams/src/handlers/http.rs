use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::AppError;
use grpc_client::CallContext;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tonic::Status;

use super::query::parse_stream_query;
use crate::models::{CreateStream, Stream, StreamPage, UpdateStream};
use crate::repository::StreamRepository;
use crate::service::StreamService;

/// 10 MiB
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Deserialize)]
struct StreamIdBody {
    id: i32,
}

#[derive(Debug, Deserialize)]
struct UpdateStreamBody {
    id: i32,
    #[serde(flatten)]
    changes: UpdateStream,
}

/// Create the stream router with all HTTP endpoints
pub fn router<R: StreamRepository + 'static>(service: StreamService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/v1/api/stream",
            get(get_stream::<R>)
                .post(create_stream::<R>)
                .patch(update_stream::<R>)
                .delete(delete_stream::<R>),
        )
        .route("/v1/api/streams", get(list_streams::<R>))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(shared_service)
}

async fn create_stream<R: StreamRepository>(
    State(service): State<Arc<StreamService<R>>>,
    payload: Result<Json<CreateStream>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;

    let stream = service
        .create_stream(&CallContext::new(), input)
        .await
        .map_err(|e| AppError::grpc("Failed to create stream", Status::from(e)))?;

    Ok((StatusCode::CREATED, Json(stream)))
}

async fn get_stream<R: StreamRepository>(
    State(service): State<Arc<StreamService<R>>>,
    payload: Result<Json<StreamIdBody>, JsonRejection>,
) -> Result<Json<Stream>, AppError> {
    let Json(body) = payload?;

    let stream = service
        .get_stream(&CallContext::new(), body.id)
        .await
        .map_err(|e| AppError::grpc("Failed to retrieve stream", Status::from(e)))?;

    Ok(Json(stream))
}

async fn update_stream<R: StreamRepository>(
    State(service): State<Arc<StreamService<R>>>,
    payload: Result<Json<UpdateStreamBody>, JsonRejection>,
) -> Result<Json<Stream>, AppError> {
    let Json(body) = payload?;

    let stream = service
        .update_stream(&CallContext::new(), body.id, body.changes)
        .await
        .map_err(|e| AppError::grpc("Failed to update stream", Status::from(e)))?;

    Ok(Json(stream))
}

async fn delete_stream<R: StreamRepository>(
    State(service): State<Arc<StreamService<R>>>,
    payload: Result<Json<StreamIdBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload?;

    service
        .delete_stream(&CallContext::new(), body.id)
        .await
        .map_err(|e| AppError::grpc("Failed to delete stream", Status::from(e)))?;

    Ok(Json(json!({
        "status": "success",
        "message": "Stream deleted successfully"
    })))
}

async fn list_streams<R: StreamRepository>(
    State(service): State<Arc<StreamService<R>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<StreamPage>, AppError> {
    let query = parse_stream_query(&pairs);

    let page = service
        .list_streams(&CallContext::new(), query)
        .await
        .map_err(|e| AppError::grpc_with_validation("Failed to list streams", Status::from(e)))?;

    Ok(Json(page))
}
