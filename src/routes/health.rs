use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::app_state::AppState;

pub async fn handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "ok":      true,
        "model":   state.config.model,
        "service": "profesor-bridge",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
