use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::info;

use crate::agents::AnswerAgent;
use crate::models::{AnswerResponse, AppState, AskRequest};
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask_question))
        .with_state(state)
}

/// POST /ask - Answer a question about the stored document
async fn ask_question(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<AnswerResponse>> {
    // The document check precedes any inspection of the body.
    if state.documents.is_empty() {
        return Err(AppError::NoDocument);
    }

    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let question = request
        .question
        .ok_or_else(|| AppError::InvalidRequest("missing `question` field".to_string()))?;

    info!(question_len = question.len(), "Question received");

    let answer = AnswerAgent::answer(
        &state.documents,
        state.llm.as_ref(),
        &state.config.llm.model,
        &question,
    )
    .await?;

    Ok(Json(AnswerResponse { answer }))
}
