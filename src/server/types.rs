//! JSON shapes for the web surface.

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Body of `POST /generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Text to synthesize
    #[serde(default)]
    pub text: String,

    /// Voice ID
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Language code
    #[serde(default = "default_language")]
    pub language: String,

    /// Speed multiplier
    #[serde(default = "default_speed")]
    pub speed: f32,
}

/// Success body of `POST /generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub file_id: String,
    pub filename: String,
    pub download_url: String,
    pub text: String,
    pub voice: String,
    pub language: String,
    pub speed: f32,
}

/// Error body shared by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// One voice row in the `GET /` listing
#[derive(Debug, Clone, Serialize)]
pub struct VoiceEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// One language row in the `GET /` listing
#[derive(Debug, Clone, Serialize)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub label: &'static str,
}

/// Body of `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct IndexResponse {
    pub service: String,
    pub version: String,
    pub kokoro_available: bool,
    pub voices: Vec<VoiceEntry>,
    pub languages: Vec<LanguageEntry>,
    pub max_text_length: usize,
}

/// Body of `GET /status`
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub kokoro_available: bool,
    pub voices: Vec<&'static str>,
    pub languages: Vec<&'static str>,
    pub max_text_length: usize,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
    pub timestamp: String,
}

fn default_voice() -> String {
    catalog::DEFAULT_VOICE.to_string()
}

fn default_language() -> String {
    catalog::DEFAULT_LANGUAGE.to_string()
}

fn default_speed() -> f32 {
    catalog::DEFAULT_SPEED
}
