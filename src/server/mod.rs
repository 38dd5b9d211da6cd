//! The web surface.
//!
//! Stateless JSON endpoints over shared state: a configuration listing,
//! speech generation with file storage, downloads, and introspection.

pub mod config;
pub mod error;
pub mod routes;
pub mod server_core;
pub mod types;

pub use config::{AppConfig, EngineSettings, LoggingConfig};
pub use error::ApiError;
pub use server_core::{create_router, AppState, TtsServer};
pub use types::*;
