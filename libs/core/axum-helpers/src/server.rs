use axum::Router;
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

/// Serve `router` on the configured address until `shutdown` resolves.
///
/// Every request gets an INFO-level trace span.
///
/// # Errors
/// Fails when the address is invalid, the listener cannot bind, or the
/// server stops with an I/O error.
///
/// # Example
/// ```ignore
/// use axum_helpers::{server::create_app, shutdown_signal};
/// use core_config::server::ServerConfig;
///
/// create_app(Router::new(), &ServerConfig::default(), shutdown_signal()).await?;
/// ```
pub async fn create_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = server_config
        .socket_addr()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    info!("HTTP server listening on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!("HTTP server encountered an error: {:?}", e);
        })?;

    info!("HTTP server stopped");
    Ok(())
}
