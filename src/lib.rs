use axum::{middleware::map_response, routing::get, Router};
use tower_http::trace::TraceLayer;

use std::fmt;

pub mod handlers;
pub mod middleware;
pub mod models;

pub const BIND_HOST: &str = "0.0.0.0";
pub const PORT: u16 = 8000;

/// Builds the router: three GET routes behind the JSON content-type middleware.
///
/// Paths that match no route get axum's default 404, and a known path with
/// the wrong method gets its default 405. `/hello/` with an empty name does
/// not match `/hello/:name` and therefore 404s.
pub fn app() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/hello/:name", get(handlers::hello))
        .layer(map_response(middleware::json_content_type))
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug)]
pub enum ServerError {
    Bind(std::io::Error),
    Serve(std::io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Bind(e) => write!(f, "failed to bind listener: {}", e),
            ServerError::Serve(e) => write!(f, "server error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Bind(e) | ServerError::Serve(e) => Some(e),
        }
    }
}

/// Binds `host:port` and serves [`app`] until the listener fails.
pub async fn serve(host: &str, port: u16) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!("Server starting on port {}", port);
    tracing::info!("Try: curl http://localhost:{}/", port);

    axum::serve(listener, app())
        .await
        .map_err(ServerError::Serve)
}
