//! Search Module
//!
//! Keyword relevance filtering over the stored document text.

pub mod relevance;

pub use relevance::{find_relevant_text, EXCERPT_RADIUS, EXCERPT_SEPARATOR};
