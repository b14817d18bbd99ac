// LLM abstraction layer

pub mod provider;
pub mod openai;
#[cfg(test)]
pub mod scripted;

pub use provider::*;
pub use crate::types::{LLMMessage, LLMRequest, LLMResponse, TokenUsage};
