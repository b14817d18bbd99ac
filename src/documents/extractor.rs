//! Text extraction
//!
//! Turns raw upload bytes into plain text. PDFs go through `lopdf`; text
//! uploads are decoded as UTF-8 with invalid sequences replaced.

use lopdf::Document;
use tracing::debug;

use super::DocumentFormat;
use crate::types::{AppError, AppResult};

/// Extraction backend. Called from a blocking thread.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, data: &[u8], format: DocumentFormat) -> AppResult<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    fn extract_pdf(data: &[u8]) -> AppResult<String> {
        let document = Document::load_mem(data)
            .map_err(|e| AppError::Extraction(format!("Failed to load PDF: {}", e)))?;

        if document.is_encrypted() {
            return Err(AppError::Extraction("PDF is encrypted".to_string()));
        }

        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        if page_numbers.is_empty() {
            return Err(AppError::Extraction("PDF contains no pages".to_string()));
        }

        debug!(pages = page_numbers.len(), "Extracting PDF text");

        document
            .extract_text(&page_numbers)
            .map_err(|e| AppError::Extraction(e.to_string()))
    }
}

impl TextExtractor for LopdfExtractor {
    fn extract(&self, data: &[u8], format: DocumentFormat) -> AppResult<String> {
        match format {
            DocumentFormat::Pdf => Self::extract_pdf(data),
            DocumentFormat::PlainText => Ok(String::from_utf8_lossy(data).into_owned()),
        }
    }
}
