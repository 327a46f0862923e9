use std::{sync::Arc, time::Instant};

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{app_state::AppState, error::AppError, normalize::normalize};

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

pub async fn handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, AppError> {
    let Json(req) = body?;
    let ollama = state.ollama.as_ref().ok_or(AppError::NotReady)?;

    let question = req.question.as_deref().unwrap_or_default().trim();
    if question.is_empty() {
        return Err(AppError::MissingQuestion);
    }

    let query = normalize(question);

    let start  = Instant::now();
    let answer = ollama.complete(&state.system_prompt, &query).await?;

    tracing::info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        query = %query.chars().take(40).collect::<String>(),
        chars = answer.len(),
        "Answer received"
    );

    Ok(Json(AskResponse { answer }))
}
