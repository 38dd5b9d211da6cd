//! # Kokoro Studio
//!
//! Two thin front ends over a Kokoro text-to-speech sidecar: a JSON web
//! server and a terminal desktop app. Both collect the same parameters
//! (text, voice, language, speed), invoke the engine through a per-language
//! pipeline cache, concatenate the returned audio segments, and write a
//! 24 kHz WAV file.
//!
//! The engine itself is an opaque, out-of-process collaborator; see
//! [`engine`] for the contract and the HTTP adapter that speaks it.
//!
//! ## Web surface
//!
//! ```rust,ignore
//! use kokoro_studio::server::{AppConfig, TtsServer};
//!
//! let server = TtsServer::new(AppConfig::default());
//! server.run().await?;
//! ```
//!
//! ## Desktop surface
//!
//! ```rust,ignore
//! use kokoro_studio::desktop::DesktopApp;
//!
//! let mut app = DesktopApp::new(AppConfig::default()).await?;
//! app.run().await?;
//! ```

pub mod audio;
pub mod catalog;
pub mod core;
pub mod desktop;
pub mod engine;
pub mod server;

// Re-exports for convenience
pub use crate::core::error::{Result, TtsError};
pub use audio::{assemble, write_wav, SAMPLE_RATE};
pub use engine::{EngineCache, EngineFactory, RemoteEngineFactory, Segment, SpeechEngine};
pub use server::{AppConfig, TtsServer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
