//! Core infrastructure shared by both front ends.

pub mod error;

pub use error::{AudioOperation, Result, TtsError};
