use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::documents::{DocumentFormat, DocumentProcessor};
use crate::models::{AppState, UploadResponse};
use crate::types::{AppError, AppResult};

/// Multipart field carrying the document
pub const UPLOAD_FIELD: &str = "pdf";

pub fn router(state: AppState) -> Router {
    let limit = state.config.server.max_upload_bytes;
    Router::new()
        .route("/upload", post(upload_document))
        .layer(DefaultBodyLimit::max(limit))
        .with_state(state)
}

/// POST /upload - Extract text from the `pdf` file field and store it
async fn upload_document(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let mut multipart = multipart.map_err(|e| {
        warn!(error = %e, "Upload without multipart body");
        AppError::NoFile
    })?;

    let (format, data) = read_upload(&mut multipart).await?.ok_or(AppError::NoFile)?;
    info!(%format, bytes = data.len(), "File upload received");

    DocumentProcessor::ingest(&state.documents, state.extractor.clone(), data, format).await?;

    Ok(Json(UploadResponse {
        message: "PDF uploaded and text extracted successfully.".to_string(),
    }))
}

/// The single file part named `pdf`, with its claimed format
///
/// Plain form values are ignored. A file part under any other name, or a
/// second `pdf` file, is an unexpected field.
async fn read_upload(multipart: &mut Multipart) -> AppResult<Option<(DocumentFormat, Bytes)>> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.file_name().is_none() {
            continue;
        }

        let name = field.name().unwrap_or_default().to_string();
        if name != UPLOAD_FIELD || upload.is_some() {
            return Err(AppError::InvalidRequest(format!("Unexpected field: {}", name)));
        }

        let format = DocumentFormat::resolve(field.content_type(), field.file_name());
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidRequest(format!("Failed to read file: {}", e)))?;

        upload = Some((format, data));
    }

    Ok(upload)
}
