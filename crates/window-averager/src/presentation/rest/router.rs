use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::get,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::{ApiError, handlers};
use crate::application::{NumberSource, UpstreamFetcher};
use crate::infrastructure::InMemoryWindowStore;

/// Application state shared across handlers
pub struct AppState<S: NumberSource> {
    pub fetcher: Arc<UpstreamFetcher<S>>,
    pub windows: Arc<InMemoryWindowStore>,
}

impl<S: NumberSource> AppState<S> {
    pub fn new(fetcher: Arc<UpstreamFetcher<S>>, windows: Arc<InMemoryWindowStore>) -> Self {
        AppState { fetcher, windows }
    }
}

/// Create the REST API router
pub fn create_router<S: NumberSource + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/numbers/{number_id}", get(handlers::numbers::<S>))
        // Middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    tracing::error!("Request handler panicked: {}", detail);

    ApiError::internal("Internal server error").into_response()
}
