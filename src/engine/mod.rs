//! Engine adapter layer.
//!
//! The Kokoro engine itself is an opaque, out-of-process collaborator; this
//! module owns the contract with it (`traits`), the HTTP adapter that speaks
//! it (`remote`), and the per-language handle cache (`cache`).

pub mod cache;
pub mod remote;
pub mod traits;

pub use cache::EngineCache;
pub use remote::{RemoteEngine, RemoteEngineFactory};
pub use traits::{EngineFactory, Segment, SpeechEngine};
