// Document ingestion: extract text from an upload and publish it to the store

use bytes::Bytes;
use std::sync::Arc;
use tracing::{error, info};

use super::{DocumentFormat, TextExtractor};
use crate::storage::DocumentStore;
use crate::types::{AppError, AppResult};

pub struct DocumentProcessor;

impl DocumentProcessor {
    /// Extract `data` and replace the stored document with the result.
    ///
    /// The store is written only after extraction succeeds, so a failed
    /// upload leaves the previous document in place. Returns the number of
    /// characters stored.
    pub async fn ingest(
        store: &DocumentStore,
        extractor: Arc<dyn TextExtractor>,
        data: Bytes,
        format: DocumentFormat,
    ) -> AppResult<usize> {
        let bytes = data.len();

        let text = tokio::task::spawn_blocking(move || extractor.extract(&data, format))
            .await
            .map_err(|e| AppError::Internal(format!("extraction task failed: {}", e)))?
            .inspect_err(|e| error!(error = %e, %format, bytes, "Error extracting document"))?;

        let chars = text.chars().count();
        store.set_document(text);

        info!(%format, bytes, chars, "Document text stored");
        Ok(chars)
    }
}
