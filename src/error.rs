use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ollama::OllamaError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing \"question\".")]
    MissingQuestion,

    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error("HTTP client not initialized.")]
    NotReady,

    #[error("{0}")]
    Gateway(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody { status: rejection.status(), message: rejection.body_text() }
    }
}

impl From<OllamaError> for AppError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Unreachable { url, source } => {
                AppError::Gateway(format!("Cannot reach Ollama at {url}: {source}"))
            }
            OllamaError::Backend { body, .. } => AppError::Gateway(format!("Ollama error: {body}")),
            e @ OllamaError::InvalidResponse(_) => AppError::Gateway(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingQuestion => StatusCode::BAD_REQUEST,
            AppError::InvalidBody { status, .. } => *status,
            AppError::NotReady        => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Gateway(_)      => StatusCode::BAD_GATEWAY,
        };

        tracing::error!(error = %self);

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
