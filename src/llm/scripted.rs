// Scripted adapter for tests: replays canned results and records every request

use crate::llm::provider::LLMAdapter;
use crate::types::{AppError, AppResult, LLMRequest, LLMResponse};
use async_trait::async_trait;
use parking_lot::Mutex;

pub struct ScriptedAdapter {
    reply: Result<String, String>,
    requests: Mutex<Vec<LLMRequest>>,
}

impl ScriptedAdapter {
    pub fn replying(content: &str) -> Self {
        Self {
            reply: Ok(content.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<LLMRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl LLMAdapter for ScriptedAdapter {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.requests.lock().push(request.clone());
        match &self.reply {
            Ok(content) => Ok(LLMResponse {
                content: content.clone(),
                finish_reason: Some("stop".to_string()),
                usage: None,
            }),
            Err(message) => Err(AppError::LLMApi(message.clone())),
        }
    }
}
