use async_trait::async_trait;
use std::sync::Arc;

use crate::config::LLMConfig;
use crate::types::{AppResult, LLMRequest, LLMResponse};

/// Chat completion backend. Prompt in, completion text out, or a typed failure.
#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

/// Build the production adapter from configuration.
pub fn create_adapter(config: &LLMConfig) -> Arc<dyn LLMAdapter> {
    Arc::new(crate::llm::openai::OpenAIAdapter::with_base_url(
        &config.openai_api_key,
        &config.base_url,
    ))
}
