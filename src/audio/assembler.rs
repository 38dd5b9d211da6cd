//! Joins engine segments into one waveform.

use crate::core::error::{Result, TtsError};
use crate::engine::Segment;

/// Concatenate segment audio along the time axis, in emission order.
///
/// Grapheme and phoneme members are discarded. No cross-fade or silence is
/// inserted at segment boundaries. An empty segment sequence is a generation
/// failure.
pub fn assemble(segments: &[Segment]) -> Result<Vec<f32>> {
    if segments.is_empty() {
        return Err(TtsError::EmptySynthesis);
    }

    let total: usize = segments.iter().map(|s| s.samples.len()).sum();
    let mut samples = Vec::with_capacity(total);
    for segment in segments {
        samples.extend_from_slice(&segment.samples);
    }

    Ok(samples)
}
