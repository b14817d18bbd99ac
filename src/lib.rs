// PDF QA - answer questions about an uploaded document through a chat completion API

pub mod config;
pub mod models;
pub mod types;
pub mod agents;
pub mod llm;
pub mod search;    // Keyword relevance filter
pub mod documents; // Upload text extraction
pub mod storage;   // Single-slot document context
pub mod routes;
pub mod middleware;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
