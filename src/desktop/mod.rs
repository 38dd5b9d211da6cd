//! The desktop surface: a terminal UI over the same synthesis pipeline.

pub mod app;
pub mod input;
pub mod state;
pub mod ui;

pub use app::DesktopApp;
pub use state::{DesktopState, GenerationPhase, PlaybackPhase};
