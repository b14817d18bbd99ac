use std::sync::Arc;

use crate::config::Config;
use crate::documents::{LopdfExtractor, TextExtractor};
use crate::llm::{create_adapter, LLMAdapter};
use crate::storage::DocumentStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub documents: DocumentStore,
    pub llm: Arc<dyn LLMAdapter>,
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    /// Production wiring: empty store, OpenAI backend, lopdf extraction
    pub fn new(config: Config) -> Self {
        let llm = create_adapter(&config.llm);
        Self::with_collaborators(config, llm, Arc::new(LopdfExtractor))
    }

    pub fn with_collaborators(
        config: Config,
        llm: Arc<dyn LLMAdapter>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            config,
            documents: DocumentStore::new(),
            llm,
            extractor,
        }
    }
}

// API Request/Response types

#[derive(Debug, serde::Deserialize)]
pub struct AskRequest {
    /// Optional at the type level so the document check can run first
    #[serde(default)]
    pub question: Option<String>,
}

/// Envelope for every ask outcome that is not a plain-text client error
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

impl AnswerResponse {
    pub fn new(answer: impl Into<String>) -> Self {
        Self { answer: answer.into() }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct UploadResponse {
    pub message: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub document_loaded: bool,
    pub document_chars: usize,
}
