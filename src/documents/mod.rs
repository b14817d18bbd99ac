// Document ingestion: format detection, text extraction and storage handoff

pub mod document_processor;
pub mod extractor;
pub mod format;

pub use document_processor::DocumentProcessor;
pub use extractor::{LopdfExtractor, TextExtractor};
pub use format::DocumentFormat;
