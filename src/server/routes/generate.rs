//! Speech generation route.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use crate::audio;
use crate::catalog::MAX_TEXT_CHARS;
use crate::server::error::ApiError;
use crate::server::server_core::AppState;
use crate::server::types::{GenerateRequest, GenerateResponse};

/// Synthesize speech and store it as a downloadable WAV file.
///
/// Validation happens before any engine call or filesystem side effect: a
/// rejected request writes nothing.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    if !state.engine_available {
        return Err(ApiError::engine_unavailable());
    }

    let text = request.text.trim();
    if text.is_empty() {
        return Err(ApiError::validation("Text is required"));
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(ApiError::validation("Text too long (max 5000 characters)"));
    }

    let file_id = Uuid::new_v4().to_string();
    let filename = format!("kokoro_output_{}.wav", file_id);
    let output_path = state.output_dir.join(&filename);

    let engine = state
        .engines
        .get(&request.language)
        .await
        .map_err(ApiError::generation)?;
    let segments = engine
        .synthesize(text, &request.voice, request.speed)
        .await
        .map_err(ApiError::generation)?;
    let waveform = audio::assemble(&segments).map_err(ApiError::generation)?;
    audio::write_wav(&waveform, &output_path).map_err(ApiError::generation)?;

    Ok(Json(GenerateResponse {
        success: true,
        download_url: format!("/download/{}", file_id),
        file_id,
        filename,
        text: text.to_string(),
        voice: request.voice,
        language: request.language,
        speed: request.speed,
    }))
}
