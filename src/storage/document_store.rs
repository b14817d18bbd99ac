//! Single-slot document context
//!
//! Holds the full text of the most recently extracted document. The slot is
//! empty at startup, replaced wholesale on every successful upload and never
//! cleared. Clones share the same slot, so one handle lives in `AppState`
//! and every request reads through it.

use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    text: Arc<RwLock<String>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored text. Last writer wins; nothing is merged.
    pub fn set_document(&self, text: impl Into<String>) {
        *self.text.write() = text.into();
    }

    /// Snapshot of the current text, possibly empty.
    pub fn get_document(&self) -> String {
        self.text.read().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.text.read().is_empty()
    }

    /// Length of the stored text in characters.
    pub fn len(&self) -> usize {
        self.text.read().chars().count()
    }
}
