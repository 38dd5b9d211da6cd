//! Download route for generated audio.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::server::error::ApiError;
use crate::server::server_core::AppState;

/// Serve a previously generated WAV file as an attachment.
///
/// The id is parsed as a UUID before touching the filesystem, so a crafted
/// id cannot escape the output directory.
pub async fn download(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
) -> Result<Response, ApiError> {
    let file_id = Uuid::parse_str(&file_id).map_err(|_| ApiError::file_not_found())?;
    let path = state.output_dir.join(format!("kokoro_output_{}.wav", file_id));

    if !path.exists() {
        return Err(ApiError::file_not_found());
    }

    let bytes = tokio::fs::read(&path).await.map_err(ApiError::download)?;

    let download_name = format!(
        "kokoro_speech_{}.wav",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );

    Ok((
        [
            (header::CONTENT_TYPE, "audio/wav".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", download_name),
            ),
        ],
        bytes,
    )
        .into_response())
}
