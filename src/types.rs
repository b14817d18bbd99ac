// Type definitions shared by the LLM layer and the HTTP boundary

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::models::AnswerResponse;

pub const NO_FILE_MESSAGE: &str = "No file uploaded.";
pub const NO_DOCUMENT_MESSAGE: &str = "No PDF text available for answering questions.";
pub const NOT_FOUND_ANSWER: &str = "Sorry, I couldn't find relevant information.";
pub const PROCESSING_FAILED_ANSWER: &str = "Sorry, I couldn't process your question.";
pub const UNHANDLED_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LLMRequest {
    pub model: String,
    pub messages: Vec<LLMMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LLMMessage {
    pub role: String, // "user", "assistant", "system"
    pub content: String,
}

impl LLMMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LLMResponse {
    pub content: String,
    pub finish_reason: Option<String>,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Upload request carried no `pdf` file field
    #[error("No file uploaded")]
    NoFile,

    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Ask request arrived before any document text was stored
    #[error("No document text available")]
    NoDocument,

    /// No question token matched the stored text. A negative result, not a fault.
    #[error("No relevant text found")]
    NotFound,

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NoFile => (StatusCode::BAD_REQUEST, NO_FILE_MESSAGE).into_response(),
            AppError::Extraction(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error extracting PDF: {}", message),
            )
                .into_response(),
            AppError::NoDocument => {
                (StatusCode::BAD_REQUEST, NO_DOCUMENT_MESSAGE).into_response()
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(AnswerResponse::new(NOT_FOUND_ANSWER)),
            )
                .into_response(),
            AppError::LLMApi(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AnswerResponse::new(PROCESSING_FAILED_ANSWER)),
            )
                .into_response(),
            AppError::InvalidRequest(ref detail) | AppError::Internal(ref detail) => {
                error!(error = %detail, "Unhandled request error");
                (StatusCode::INTERNAL_SERVER_ERROR, UNHANDLED_MESSAGE).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_extraction_error_carries_underlying_message() {
        let response = AppError::Extraction("Invalid file header".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Error extracting PDF: Invalid file header");
    }

    #[tokio::test]
    async fn test_ask_failures_use_answer_envelope() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["answer"], NOT_FOUND_ANSWER);

        let response = AppError::LLMApi("status 401".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["answer"], PROCESSING_FAILED_ANSWER);
    }

    #[tokio::test]
    async fn test_client_errors_are_plain_text() {
        let response = AppError::NoFile.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, NO_FILE_MESSAGE);

        let response = AppError::NoDocument.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, NO_DOCUMENT_MESSAGE);
    }

    #[tokio::test]
    async fn test_internal_detail_is_not_leaked() {
        let response = AppError::Internal("stack trace here".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, UNHANDLED_MESSAGE);
    }
}
