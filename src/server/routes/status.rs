//! System status route.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::catalog::{KokoroLanguage, KokoroVoice, MAX_TEXT_CHARS};
use crate::server::server_core::AppState;
use crate::server::types::StatusResponse;

/// System status endpoint
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        kokoro_available: state.engine_available,
        voices: KokoroVoice::ALL.iter().map(|v| v.as_str()).collect(),
        languages: KokoroLanguage::ALL.iter().map(|l| l.code()).collect(),
        max_text_length: MAX_TEXT_CHARS,
    })
}
