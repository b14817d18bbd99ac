//! Answer Agent
//!
//! Answers a question about the stored document in four steps: require a
//! document, require at least one relevant excerpt, send the prompt to the
//! completion backend, return the trimmed completion.
//!
//! The excerpt only gates the request. The prompt carries the question
//! alone, restated twice, and no document text.

use tracing::{debug, error, info};

use crate::llm::LLMAdapter;
use crate::search::find_relevant_text;
use crate::storage::DocumentStore;
use crate::types::{AppError, AppResult, LLMMessage, LLMRequest};

pub struct AnswerAgent;

impl AnswerAgent {
    /// User prompt sent to the completion backend
    pub fn build_prompt(question: &str) -> String {
        format!(
            "Based on the following text from a PDF, please answer the question:\n\n{}\n\nQuestion: {}",
            question, question
        )
    }

    pub async fn answer(
        documents: &DocumentStore,
        llm: &dyn LLMAdapter,
        model: &str,
        question: &str,
    ) -> AppResult<String> {
        let text = documents.get_document();
        if text.is_empty() {
            return Err(AppError::NoDocument);
        }

        let Some(excerpt) = find_relevant_text(question, &text) else {
            info!(question_len = question.len(), "No relevant text for question");
            return Err(AppError::NotFound);
        };
        debug!(excerpt_chars = excerpt.chars().count(), "Relevant text found");

        let request = LLMRequest {
            model: model.to_string(),
            messages: vec![LLMMessage::user(Self::build_prompt(question))],
            max_tokens: None,
            temperature: None,
        };

        let response = llm
            .create_chat_completion(&request)
            .await
            .inspect_err(|e| error!(error = %e, "Chat completion failed"))?;

        info!(
            finish_reason = ?response.finish_reason,
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "Answer generated"
        );

        Ok(response.content.trim().to_string())
    }
}
