//! Handler-boundary error conversion.
//!
//! Every failing endpoint answers with `{"error": <message>}`; this type
//! carries the status/message pair and knows the message formats each error
//! class uses on the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::core::error::TtsError;

use super::types::ErrorBody;

/// A failed request, ready to serialize
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 400 with the raw validation message
    pub fn validation(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    /// 500 reported when the sidecar was unreachable at startup
    pub fn engine_unavailable() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: TtsError::EngineUnavailable.to_string(),
        }
    }

    /// 500 wrapping any failure on the synthesis path
    pub fn generation(err: TtsError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Generation failed: {}", err),
        }
    }

    /// 404 for a missing or malformed file id
    pub fn file_not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "File not found".to_string(),
        }
    }

    /// 500 wrapping a failure while serving a stored file
    pub fn download(err: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Download failed: {}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_message_wraps_the_error() {
        let err = ApiError::generation(TtsError::EmptySynthesis);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Generation failed: No audio generated");
    }

    #[test]
    fn test_validation_keeps_the_raw_message() {
        let err = ApiError::validation("Text is required");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Text is required");
    }

    #[test]
    fn test_unavailable_message() {
        assert_eq!(
            ApiError::engine_unavailable().message,
            "Kokoro TTS is not available"
        );
    }
}
