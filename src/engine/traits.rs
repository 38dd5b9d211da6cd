//! The collaborator contract with the Kokoro engine.
//!
//! A pipeline is constructed per language code and invoked with
//! `(text, voice, speed)`. It answers with a finite sequence of segments,
//! one per internally chosen unit of the input text. Segment boundaries are
//! engine-dependent and opaque; callers may rely only on emission order.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::Result;

/// One synthesized unit of input text, as segmented by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// The slice of input text this segment covers
    pub graphemes: String,
    /// The engine's phoneme rendering of that slice
    pub phonemes: String,
    /// PCM frames for this segment, normalized to [-1, 1]
    pub samples: Vec<f32>,
}

/// A constructed engine pipeline, bound to one language code
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// The language code this pipeline was constructed for
    fn lang_code(&self) -> &str;

    /// Synthesize `text` and return the engine's segments in emission order
    async fn synthesize(&self, text: &str, voice: &str, speed: f32) -> Result<Vec<Segment>>;
}

/// Constructs engine pipelines; called once per previously-unseen language
///
/// Construction fails by propagating the engine's rejection, typically for
/// an unsupported language code. There is no retry.
#[async_trait]
pub trait EngineFactory: Send + Sync {
    async fn create(&self, lang_code: &str) -> Result<Arc<dyn SpeechEngine>>;
}
