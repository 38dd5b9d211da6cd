//! HTTP adapter to the Kokoro sidecar.
//!
//! The sidecar serves the engine over a small JSON API:
//!
//! - `POST /v1/pipelines {"lang_code"}` loads (or rejects) a pipeline for a
//!   language code; this backs pipeline construction.
//! - `POST /v1/synthesize {"lang_code","text","voice","speed"}` answers with
//!   the ordered segment list; each segment carries its grapheme and phoneme
//!   chunks plus the audio as base64 little-endian f32 PCM at 24 kHz.
//! - `GET /health` answers 2xx while the engine is loaded.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{AudioOperation, Result, TtsError};

use super::traits::{EngineFactory, Segment, SpeechEngine};

/// Factory for sidecar-backed engine pipelines
pub struct RemoteEngineFactory {
    client: Client,
    base_url: String,
}

impl RemoteEngineFactory {
    /// Build a factory against `base_url`, e.g. `http://127.0.0.1:8880`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TtsError::Engine {
                message: format!("failed to create HTTP client: {}", e),
                lang_code: None,
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Probe the sidecar's health endpoint
    pub async fn is_available(&self) -> bool {
        let result = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        result.is_ok_and(|r| r.status().is_success())
    }
}

#[derive(Debug, Serialize)]
struct PipelineBody<'a> {
    lang_code: &'a str,
}

#[async_trait]
impl EngineFactory for RemoteEngineFactory {
    async fn create(&self, lang_code: &str) -> Result<Arc<dyn SpeechEngine>> {
        let response = self
            .client
            .post(format!("{}/v1/pipelines", self.base_url))
            .json(&PipelineBody { lang_code })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TtsError::Engine {
                message: error_message(response).await,
                lang_code: Some(lang_code.to_string()),
            });
        }

        debug!("sidecar loaded pipeline for language '{}'", lang_code);
        Ok(Arc::new(RemoteEngine {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            lang_code: lang_code.to_string(),
        }))
    }
}

/// A sidecar pipeline bound to one language code
pub struct RemoteEngine {
    client: Client,
    base_url: String,
    lang_code: String,
}

#[derive(Debug, Serialize)]
struct SynthesizeBody<'a> {
    lang_code: &'a str,
    text: &'a str,
    voice: &'a str,
    speed: f32,
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    segments: Vec<WireSegment>,
}

#[derive(Debug, Deserialize)]
struct WireSegment {
    #[serde(default)]
    graphemes: String,
    #[serde(default)]
    phonemes: String,
    audio: String,
}

#[derive(Debug, Deserialize)]
struct WireError {
    error: String,
}

#[async_trait]
impl SpeechEngine for RemoteEngine {
    fn lang_code(&self) -> &str {
        &self.lang_code
    }

    async fn synthesize(&self, text: &str, voice: &str, speed: f32) -> Result<Vec<Segment>> {
        let response = self
            .client
            .post(format!("{}/v1/synthesize", self.base_url))
            .json(&SynthesizeBody {
                lang_code: &self.lang_code,
                text,
                voice,
                speed,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TtsError::Engine {
                message: error_message(response).await,
                lang_code: Some(self.lang_code.clone()),
            });
        }

        let wire: SynthesizeResponse = response.json().await.map_err(|e| TtsError::Engine {
            message: format!("malformed sidecar response: {}", e),
            lang_code: Some(self.lang_code.clone()),
        })?;

        wire.segments
            .into_iter()
            .map(|segment| {
                Ok(Segment {
                    graphemes: segment.graphemes,
                    phonemes: segment.phonemes,
                    samples: decode_pcm(&segment.audio)?,
                })
            })
            .collect()
    }
}

/// Pull a readable message out of a failed sidecar response
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());

    match serde_json::from_str::<WireError>(&body) {
        Ok(wire) => format!("kokoro sidecar ({}): {}", status, wire.error),
        Err(_) => format!("kokoro sidecar ({}): {}", status, body),
    }
}

/// Decode base64 little-endian f32 PCM
fn decode_pcm(audio: &str) -> Result<Vec<f32>> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(audio)
        .map_err(|e| TtsError::Audio {
            message: format!("invalid base64 audio: {}", e),
            operation: AudioOperation::Decoding,
        })?;

    if bytes.len() % 4 != 0 {
        return Err(TtsError::Audio {
            message: format!("PCM payload of {} bytes is not frame-aligned", bytes.len()),
            operation: AudioOperation::Decoding,
        });
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
