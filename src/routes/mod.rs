//! API Routes
//!
//! - `POST /upload` - Upload a document (multipart field `pdf`) and store its text
//! - `POST /ask` - Ask a question about the stored text
//! - `GET /api/health` - Liveness and document status

pub mod ask;
pub mod health;
pub mod upload;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::{apply_security_headers, catch_panic_layer};
use crate::models::AppState;

/// Create the main application router
///
/// Layers, outermost first: security headers, request tracing, panic recovery.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let router = Router::new()
        .merge(upload::router(state.clone()))
        .merge(ask::router(state.clone()))
        .merge(health::router(state))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http());

    apply_security_headers(router)
}
