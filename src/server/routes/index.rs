//! Front-page configuration listing.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::catalog::{KokoroLanguage, KokoroVoice, MAX_TEXT_CHARS};
use crate::server::server_core::AppState;
use crate::server::types::{IndexResponse, LanguageEntry, VoiceEntry};

/// Static configuration for clients: voices, languages, availability
pub async fn index(State(state): State<Arc<AppState>>) -> Json<IndexResponse> {
    let voices = KokoroVoice::ALL
        .iter()
        .map(|v| VoiceEntry {
            id: v.as_str(),
            label: v.label(),
        })
        .collect();

    let languages = KokoroLanguage::ALL
        .iter()
        .map(|l| LanguageEntry {
            code: l.code(),
            label: l.label(),
        })
        .collect();

    Json(IndexResponse {
        service: "Kokoro Studio".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        kokoro_available: state.engine_available,
        voices,
        languages,
        max_text_length: MAX_TEXT_CHARS,
    })
}
