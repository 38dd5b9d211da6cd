//! Audio assembly, WAV output and desktop playback.

pub mod assembler;
pub mod output;
pub mod player;

pub use assembler::assemble;
pub use output::{duration_secs, write_wav, SAMPLE_RATE};
pub use player::AudioPlayer;
