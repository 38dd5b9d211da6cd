//! Desktop audio playback.
//!
//! The rodio output stream is not `Send`, so it lives on a dedicated thread
//! that services commands from the UI. The thread refreshes a shared busy
//! flag after every command and on a short idle timeout; the UI polls that
//! flag to notice end-of-playback.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::warn;

use crate::core::error::{AudioOperation, Result, TtsError};

enum PlayerCommand {
    Play(PathBuf),
    Pause,
    Resume,
    Stop,
    Shutdown,
}

/// Handle to the playback thread
pub struct AudioPlayer {
    tx: mpsc::Sender<PlayerCommand>,
    busy: Arc<AtomicBool>,
}

impl AudioPlayer {
    /// Spawn the playback thread and open the default output device
    pub fn new() -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let busy = Arc::new(AtomicBool::new(false));
        let busy_flag = Arc::clone(&busy);
        let (ready_tx, ready_rx) = mpsc::channel();

        thread::Builder::new()
            .name("audio-playback".to_string())
            .spawn(move || {
                // The stream must be created, and stay, on this thread.
                let (_stream, handle) = match OutputStream::try_default() {
                    Ok(pair) => {
                        let _ = ready_tx.send(Ok(()));
                        pair
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e.to_string()));
                        return;
                    }
                };

                let mut sink: Option<Sink> = None;
                loop {
                    match rx.recv_timeout(Duration::from_millis(100)) {
                        Ok(PlayerCommand::Play(path)) => {
                            // Play always restarts from the beginning.
                            if let Some(old) = sink.take() {
                                old.stop();
                            }
                            match open_sink(&handle, &path) {
                                Ok(new_sink) => sink = Some(new_sink),
                                Err(e) => warn!("playback failed for {:?}: {}", path, e),
                            }
                        }
                        Ok(PlayerCommand::Pause) => {
                            if let Some(sink) = &sink {
                                sink.pause();
                            }
                        }
                        Ok(PlayerCommand::Resume) => {
                            if let Some(sink) = &sink {
                                sink.play();
                            }
                        }
                        Ok(PlayerCommand::Stop) => {
                            if let Some(sink) = sink.take() {
                                sink.stop();
                            }
                        }
                        Ok(PlayerCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                            break;
                        }
                        Err(RecvTimeoutError::Timeout) => {}
                    }

                    let playing = sink.as_ref().map(|s| !s.empty()).unwrap_or(false);
                    busy_flag.store(playing, Ordering::Relaxed);
                }
            })
            .map_err(|e| TtsError::Audio {
                message: format!("failed to spawn playback thread: {}", e),
                operation: AudioOperation::Playback,
            })?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self { tx, busy }),
            Ok(Err(message)) => Err(TtsError::Audio {
                message,
                operation: AudioOperation::Playback,
            }),
            Err(_) => Err(TtsError::Audio {
                message: "playback thread exited during startup".to_string(),
                operation: AudioOperation::Playback,
            }),
        }
    }

    /// Load `path` and start playing from the beginning
    pub fn play(&self, path: &Path) {
        let _ = self.tx.send(PlayerCommand::Play(path.to_path_buf()));
    }

    pub fn pause(&self) {
        let _ = self.tx.send(PlayerCommand::Pause);
    }

    pub fn resume(&self) {
        let _ = self.tx.send(PlayerCommand::Resume);
    }

    pub fn stop(&self) {
        let _ = self.tx.send(PlayerCommand::Stop);
    }

    /// Whether the sink still holds queued audio (paused audio counts)
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Relaxed)
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(PlayerCommand::Shutdown);
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        let _ = self.tx.send(PlayerCommand::Shutdown);
    }
}

fn open_sink(handle: &OutputStreamHandle, path: &Path) -> Result<Sink> {
    let file = File::open(path).map_err(|e| TtsError::Io {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;
    let source = Decoder::new(BufReader::new(file)).map_err(|e| TtsError::Audio {
        message: e.to_string(),
        operation: AudioOperation::Decoding,
    })?;
    let sink = Sink::try_new(handle).map_err(|e| TtsError::Audio {
        message: e.to_string(),
        operation: AudioOperation::Playback,
    })?;
    sink.append(source);
    Ok(sink)
}
