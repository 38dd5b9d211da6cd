//! Event loop for the desktop surface.
//!
//! Synthesis runs on a spawned task so the event loop stays responsive; the
//! task reports back only through a message channel drained here, never by
//! touching UI state from the worker side. Playback end is noticed by
//! polling the player's busy flag on the UI tick.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::debug;
use tui_textarea::TextArea;
use uuid::Uuid;

use crate::audio::{self, AudioPlayer};
use crate::catalog::{self, MAX_TEXT_CHARS};
use crate::engine::{EngineCache, RemoteEngineFactory};
use crate::server::config::AppConfig;

use super::input::{configure_textarea, handle_key, Action};
use super::state::{DesktopState, PlaybackPhase, PromptKind};
use super::ui::draw;

/// Message from the synthesis task back to the UI
enum WorkerEvent {
    Finished { path: PathBuf, info: String },
    Failed { message: String },
}

pub struct DesktopApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: DesktopState,
    textarea: TextArea<'static>,
    player: Option<AudioPlayer>,
    engines: Arc<EngineCache>,
    worker_tx: mpsc::UnboundedSender<WorkerEvent>,
    worker_rx: mpsc::UnboundedReceiver<WorkerEvent>,
}

impl DesktopApp {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let factory = RemoteEngineFactory::new(&config.engine.base_url, config.engine.timeout())?;
        let available = factory.is_available().await;
        let engines = Arc::new(EngineCache::new(Box::new(factory)));

        let mut state = DesktopState::new(available);
        let player = match AudioPlayer::new() {
            Ok(player) => Some(player),
            Err(e) => {
                state.status_line = format!("Audio playback unavailable: {}", e);
                None
            }
        };

        let mut textarea = TextArea::default();
        configure_textarea(&mut textarea);

        let (worker_tx, worker_rx) = mpsc::unbounded_channel();

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state,
            textarea,
            player,
            engines,
            worker_tx,
            worker_rx,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Restore the terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let mut tick = tokio::time::interval(Duration::from_millis(250));
        let mut events = EventStream::new();

        loop {
            let state = &self.state;
            let textarea = &self.textarea;
            self.terminal.draw(|frame| draw(frame, state, textarea))?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                Some(worker_event) = self.worker_rx.recv() => {
                    self.on_worker_event(worker_event);
                }

                Some(Ok(crossterm_event)) = events.next() => {
                    if let CrosstermEvent::Key(key) = crossterm_event {
                        if key.kind == KeyEventKind::Press {
                            let action = handle_key(key, &mut self.textarea, &mut self.state);
                            self.dispatch(action);
                        }
                    }
                }

                _ = tick.tick() => {
                    let busy = self.player.as_ref().map(|p| p.is_busy()).unwrap_or(false);
                    if self.state.note_playback_tick(busy) {
                        debug!("playback reached end of file");
                    }
                }
            }
        }

        self.cleanup();
        Ok(())
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.state.should_quit = true,
            Action::Generate => self.start_generation(),
            Action::PlayPause => self.toggle_playback(),
            Action::StopPlayback => {
                if let Some(player) = &self.player {
                    player.stop();
                }
                self.state.stop_playback();
            }
            Action::ClearText => {
                self.textarea = TextArea::default();
                configure_textarea(&mut self.textarea);
            }
            Action::CycleVoice => self.state.cycle_voice(),
            Action::CycleLanguage => self.state.cycle_language(),
            Action::SpeedDown => self.state.adjust_speed(-0.1),
            Action::SpeedUp => self.state.adjust_speed(0.1),
            Action::ConfirmPrompt(PromptKind::SaveAudio, path) => self.save_audio(path),
            Action::ConfirmPrompt(PromptKind::LoadText, path) => self.load_text(path),
        }
    }

    /// Kick off a synthesis task; ignored while one is already in flight
    fn start_generation(&mut self) {
        if !self.state.can_generate() {
            return;
        }

        let text = self.textarea.lines().join("\n").trim().to_string();
        if text.is_empty() {
            self.state.status_line = "Please enter some text to convert.".to_string();
            return;
        }
        if text.chars().count() > MAX_TEXT_CHARS {
            self.state.status_line = "Text is too long (max 5000 characters).".to_string();
            return;
        }

        self.state.begin_generation();

        let engines = Arc::clone(&self.engines);
        let tx = self.worker_tx.clone();
        let voice = self.state.voice().as_str().to_string();
        let language = self.state.language().code().to_string();
        let speed = self.state.speed;

        tokio::spawn(async move {
            let event = match synthesize_to_temp(&engines, &text, &voice, &language, speed).await {
                Ok(path) => WorkerEvent::Finished {
                    path,
                    info: format!(
                        "Generated: {} | {} | {:.1}x speed",
                        catalog::voice_label(&voice),
                        catalog::language_label(&language),
                        speed
                    ),
                },
                Err(e) => WorkerEvent::Failed {
                    message: e.to_string(),
                },
            };
            let _ = tx.send(event);
        });
    }

    fn on_worker_event(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Finished { path, info } => {
                if let Some(previous) = self.state.finish_generation(path, info) {
                    let _ = std::fs::remove_file(previous);
                }
            }
            WorkerEvent::Failed { message } => {
                self.state.fail_generation(&message);
            }
        }
    }

    fn toggle_playback(&mut self) {
        let Some(player) = &self.player else {
            self.state.status_line = "Audio playback unavailable".to_string();
            return;
        };

        match self.state.playback {
            PlaybackPhase::Stopped => {
                if let Some(path) = self.state.current_audio.clone() {
                    player.play(&path);
                    self.state.start_playback();
                }
            }
            PlaybackPhase::Playing => {
                player.pause();
                self.state.pause_playback();
            }
            PlaybackPhase::Paused => {
                player.resume();
                self.state.resume_playback();
            }
        }
    }

    fn save_audio(&mut self, destination: String) {
        let Some(source) = self.state.current_audio.clone() else {
            self.state.status_line = "No audio file to save".to_string();
            return;
        };

        match std::fs::copy(&source, &destination) {
            Ok(_) => self.state.status_line = format!("Audio saved to {}", destination),
            Err(e) => self.state.status_line = format!("Failed to save audio: {}", e),
        }
    }

    fn load_text(&mut self, path: String) {
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let truncated = content.chars().count() > MAX_TEXT_CHARS;
                let content: String = content.chars().take(MAX_TEXT_CHARS).collect();

                self.textarea = TextArea::new(content.lines().map(String::from).collect());
                configure_textarea(&mut self.textarea);

                self.state.status_line = if truncated {
                    format!("Loaded {} (truncated to {} characters)", path, MAX_TEXT_CHARS)
                } else {
                    format!("Loaded {}", path)
                };
            }
            Err(e) => {
                self.state.status_line = format!("Failed to load file: {}", e);
            }
        }
    }

    /// Stop playback, release the audio thread, delete the temp file and
    /// restore the terminal
    fn cleanup(&mut self) {
        if let Some(player) = &self.player {
            player.stop();
            player.shutdown();
        }
        if let Some(path) = self.state.current_audio.take() {
            let _ = std::fs::remove_file(path);
        }

        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Full synthesis pipeline into a fresh temp WAV file
async fn synthesize_to_temp(
    engines: &EngineCache,
    text: &str,
    voice: &str,
    language: &str,
    speed: f32,
) -> crate::core::error::Result<PathBuf> {
    let engine = engines.get(language).await?;
    let segments = engine.synthesize(text, voice, speed).await?;
    let waveform = audio::assemble(&segments)?;

    let path = std::env::temp_dir().join(format!("kokoro_gui_{}.wav", Uuid::new_v4()));
    audio::write_wav(&waveform, &path)?;
    Ok(path)
}
