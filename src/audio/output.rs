//! WAV file output.

use std::path::Path;

use crate::core::error::{AudioOperation, Result, TtsError};

/// Kokoro's output sample rate
pub const SAMPLE_RATE: u32 = 24_000;

/// Save audio samples to a WAV file (16-bit mono PCM at 24 kHz)
///
/// Samples are expected normalized to [-1, 1]; values outside are clamped.
pub fn write_wav<P: AsRef<Path>>(samples: &[f32], path: P) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer =
        hound::WavWriter::create(path.as_ref(), spec).map_err(|e| TtsError::Audio {
            message: format!("failed to create WAV file {:?}: {}", path.as_ref(), e),
            operation: AudioOperation::Saving,
        })?;

    for &sample in samples {
        let scaled = (sample.clamp(-1.0, 1.0) * 32767.0) as i16;
        writer.write_sample(scaled)?;
    }

    writer.finalize()?;
    Ok(())
}

/// Playback duration of a waveform at the fixed output rate
pub fn duration_secs(samples: &[f32]) -> f32 {
    samples.len() as f32 / SAMPLE_RATE as f32
}
