//! UI state for the desktop surface.
//!
//! Two independent state machines: generation
//! (`Idle -> Generating -> Complete | Failed`) and playback
//! (`Stopped -> Playing <-> Paused -> Stopped`). Widget code reads this
//! state; it is mutated only on the UI task, either from key actions or
//! from worker messages drained by the event loop.

use std::path::PathBuf;

use crate::catalog::{KokoroLanguage, KokoroVoice, MAX_SPEED, MIN_SPEED};

/// Generation lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Generating,
    Complete,
    Failed,
}

/// Playback lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Stopped,
    Playing,
    Paused,
}

/// What a path prompt is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAudio,
    LoadText,
}

/// A one-line path prompt shown over the footer
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

pub struct DesktopState {
    pub phase: GenerationPhase,
    pub playback: PlaybackPhase,
    /// Ticks spent in the current playback phase; playback end is only
    /// trusted after the player thread had a tick to pick the file up
    playback_ticks: u32,
    pub voice_index: usize,
    pub language_index: usize,
    pub speed: f32,
    pub engine_available: bool,
    /// Temp WAV of the last successful generation
    pub current_audio: Option<PathBuf>,
    /// Summary of the last successful generation
    pub audio_info: Option<String>,
    pub status_line: String,
    pub prompt: Option<Prompt>,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl DesktopState {
    pub fn new(engine_available: bool) -> Self {
        let status_line = if engine_available {
            "Kokoro TTS ready".to_string()
        } else {
            "Kokoro TTS not available - is the sidecar running?".to_string()
        };

        Self {
            phase: GenerationPhase::Idle,
            playback: PlaybackPhase::Stopped,
            playback_ticks: 0,
            voice_index: 0,
            language_index: 0,
            speed: 1.0,
            engine_available,
            current_audio: None,
            audio_info: None,
            status_line,
            prompt: None,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    pub fn voice(&self) -> KokoroVoice {
        KokoroVoice::ALL[self.voice_index]
    }

    pub fn language(&self) -> KokoroLanguage {
        KokoroLanguage::ALL[self.language_index]
    }

    /// The generate action is enabled outside `Generating` only
    pub fn can_generate(&self) -> bool {
        self.engine_available && self.phase != GenerationPhase::Generating
    }

    pub fn can_play(&self) -> bool {
        self.current_audio.is_some() && self.phase != GenerationPhase::Generating
    }

    pub fn begin_generation(&mut self) {
        self.phase = GenerationPhase::Generating;
        self.status_line = "Generating speech...".to_string();
    }

    /// Worker reported success; replaces (and yields) any previous temp file
    pub fn finish_generation(&mut self, path: PathBuf, info: String) -> Option<PathBuf> {
        let previous = self.current_audio.replace(path);
        self.phase = GenerationPhase::Complete;
        self.playback = PlaybackPhase::Stopped;
        self.playback_ticks = 0;
        self.audio_info = Some(info);
        self.status_line = "Generation complete!".to_string();
        previous
    }

    /// Worker reported failure; the UI stays actionable
    pub fn fail_generation(&mut self, message: &str) {
        self.phase = GenerationPhase::Failed;
        self.status_line = format!("Speech generation failed: {}", message);
    }

    pub fn cycle_voice(&mut self) {
        self.voice_index = (self.voice_index + 1) % KokoroVoice::ALL.len();
    }

    pub fn cycle_language(&mut self) {
        self.language_index = (self.language_index + 1) % KokoroLanguage::ALL.len();
    }

    pub fn adjust_speed(&mut self, delta: f32) {
        self.speed = ((self.speed + delta) * 10.0).round() / 10.0;
        self.speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn start_playback(&mut self) {
        self.playback = PlaybackPhase::Playing;
        self.playback_ticks = 0;
    }

    pub fn pause_playback(&mut self) {
        self.playback = PlaybackPhase::Paused;
    }

    pub fn resume_playback(&mut self) {
        self.playback = PlaybackPhase::Playing;
    }

    pub fn stop_playback(&mut self) {
        self.playback = PlaybackPhase::Stopped;
        self.playback_ticks = 0;
    }

    /// Called on every UI tick with the player's busy flag. Returns true
    /// when playback just ran off the end of the file.
    pub fn note_playback_tick(&mut self, busy: bool) -> bool {
        if self.phase == GenerationPhase::Generating {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }

        if self.playback != PlaybackPhase::Playing {
            return false;
        }

        self.playback_ticks = self.playback_ticks.saturating_add(1);
        if self.playback_ticks > 2 && !busy {
            self.stop_playback();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generating_disables_the_generate_action() {
        let mut state = DesktopState::new(true);
        assert!(state.can_generate());

        state.begin_generation();
        assert_eq!(state.phase, GenerationPhase::Generating);
        assert!(!state.can_generate());
        assert!(!state.can_play());
    }

    #[test]
    fn test_completion_enables_playback_and_records_the_path() {
        let mut state = DesktopState::new(true);
        state.begin_generation();

        let previous = state.finish_generation(PathBuf::from("/tmp/out.wav"), "info".to_string());
        assert!(previous.is_none());
        assert_eq!(state.phase, GenerationPhase::Complete);
        assert!(state.can_play());
        assert!(state.can_generate());
        assert_eq!(state.current_audio.as_deref(), Some(std::path::Path::new("/tmp/out.wav")));
    }

    #[test]
    fn test_replacing_audio_yields_the_previous_file() {
        let mut state = DesktopState::new(true);
        state.finish_generation(PathBuf::from("/tmp/first.wav"), String::new());
        let previous = state.finish_generation(PathBuf::from("/tmp/second.wav"), String::new());
        assert_eq!(previous, Some(PathBuf::from("/tmp/first.wav")));
    }

    #[test]
    fn test_failure_returns_to_an_actionable_state() {
        let mut state = DesktopState::new(true);
        state.begin_generation();
        state.fail_generation("engine exploded");

        assert_eq!(state.phase, GenerationPhase::Failed);
        assert!(state.can_generate());
        assert!(state.status_line.contains("engine exploded"));
    }

    #[test]
    fn test_unavailable_engine_disables_generation() {
        let state = DesktopState::new(false);
        assert!(!state.can_generate());
    }

    #[test]
    fn test_playback_cycle() {
        let mut state = DesktopState::new(true);
        state.finish_generation(PathBuf::from("/tmp/out.wav"), String::new());

        state.start_playback();
        assert_eq!(state.playback, PlaybackPhase::Playing);
        state.pause_playback();
        assert_eq!(state.playback, PlaybackPhase::Paused);
        state.resume_playback();
        assert_eq!(state.playback, PlaybackPhase::Playing);
        state.stop_playback();
        assert_eq!(state.playback, PlaybackPhase::Stopped);
    }

    #[test]
    fn test_playback_end_is_detected_after_a_grace_period() {
        let mut state = DesktopState::new(true);
        state.finish_generation(PathBuf::from("/tmp/out.wav"), String::new());
        state.start_playback();

        // idle flag during the grace period does not end playback
        assert!(!state.note_playback_tick(false));
        assert!(!state.note_playback_tick(false));
        assert_eq!(state.playback, PlaybackPhase::Playing);

        assert!(state.note_playback_tick(false));
        assert_eq!(state.playback, PlaybackPhase::Stopped);
    }

    #[test]
    fn test_busy_player_keeps_playing() {
        let mut state = DesktopState::new(true);
        state.start_playback();
        for _ in 0..10 {
            assert!(!state.note_playback_tick(true));
        }
        assert_eq!(state.playback, PlaybackPhase::Playing);
    }

    #[test]
    fn test_pause_is_not_ended_by_the_idle_poll() {
        let mut state = DesktopState::new(true);
        state.start_playback();
        state.pause_playback();
        for _ in 0..10 {
            assert!(!state.note_playback_tick(false));
        }
        assert_eq!(state.playback, PlaybackPhase::Paused);
    }

    #[test]
    fn test_speed_clamps_to_the_slider_range() {
        let mut state = DesktopState::new(true);
        for _ in 0..30 {
            state.adjust_speed(0.1);
        }
        assert_eq!(state.speed, MAX_SPEED);

        for _ in 0..30 {
            state.adjust_speed(-0.1);
        }
        assert_eq!(state.speed, MIN_SPEED);
    }

    #[test]
    fn test_cycling_wraps_around() {
        let mut state = DesktopState::new(true);
        for _ in 0..KokoroVoice::ALL.len() {
            state.cycle_voice();
        }
        assert_eq!(state.voice_index, 0);

        for _ in 0..KokoroLanguage::ALL.len() {
            state.cycle_language();
        }
        assert_eq!(state.language_index, 0);
    }
}
