//! Agent System
//!
//! - **Answer Agent**: gates a question on the stored document and the
//!   relevance filter, then asks the completion backend for an answer

pub mod answer;

pub use answer::AnswerAgent;
