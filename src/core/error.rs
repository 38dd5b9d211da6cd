//! Structured error handling for Kokoro Studio.
//!
//! One error type covers the whole orchestration layer: validation at the
//! request edge, sidecar failures, audio assembly and file I/O. Both front
//! ends convert these into their own surface (a JSON payload or a status
//! line) at the handler boundary.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias with TtsError
pub type Result<T> = std::result::Result<T, TtsError>;

/// Main error type for Kokoro Studio
#[derive(Error, Debug, Clone)]
pub enum TtsError {
    /// The Kokoro sidecar was not reachable when the process started.
    #[error("Kokoro TTS is not available")]
    EngineUnavailable,

    /// The sidecar rejected a request: unsupported language code, synthesis
    /// failure, or a transport error on the way there.
    #[error("Engine error: {message}")]
    Engine {
        message: String,
        lang_code: Option<String>,
    },

    /// The engine returned an empty segment sequence.
    #[error("No audio generated")]
    EmptySynthesis,

    /// Audio processing errors
    #[error("Audio processing error ({operation}): {message}")]
    Audio {
        message: String,
        operation: AudioOperation,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// I/O errors
    #[error("I/O error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

/// Audio operation types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioOperation {
    Decoding,
    Saving,
    Playback,
}

impl fmt::Display for AudioOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioOperation::Decoding => write!(f, "decoding"),
            AudioOperation::Saving => write!(f, "saving"),
            AudioOperation::Playback => write!(f, "playback"),
        }
    }
}

impl From<std::io::Error> for TtsError {
    fn from(err: std::io::Error) -> Self {
        TtsError::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

impl From<reqwest::Error> for TtsError {
    fn from(err: reqwest::Error) -> Self {
        TtsError::Engine {
            message: err.to_string(),
            lang_code: None,
        }
    }
}

impl From<hound::Error> for TtsError {
    fn from(err: hound::Error) -> Self {
        TtsError::Audio {
            message: err.to_string(),
            operation: AudioOperation::Saving,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TtsError::Engine {
            message: "unsupported language code 'q'".to_string(),
            lang_code: Some("q".to_string()),
        };
        assert!(err.to_string().contains("Engine error"));
        assert!(err.to_string().contains("unsupported language code"));
    }

    #[test]
    fn test_empty_synthesis_message() {
        assert_eq!(TtsError::EmptySynthesis.to_string(), "No audio generated");
    }

    #[test]
    fn test_audio_operation_display() {
        assert_eq!(AudioOperation::Saving.to_string(), "saving");
    }
}
