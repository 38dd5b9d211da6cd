//! Key handling for the desktop surface.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;

use crate::desktop::state::{DesktopState, Prompt, PromptKind};

/// What a key press asks the app to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Generate,
    PlayPause,
    StopPlayback,
    ClearText,
    CycleVoice,
    CycleLanguage,
    SpeedDown,
    SpeedUp,
    ConfirmPrompt(PromptKind, String),
}

/// Shared textarea setup for the text input widget
pub fn configure_textarea(textarea: &mut TextArea<'_>) {
    textarea.set_placeholder_text("Enter text to convert to speech...");
    textarea.set_cursor_line_style(ratatui::style::Style::default());
}

/// Map a key event to an action, feeding everything else to the textarea.
///
/// While a prompt is open it swallows all input: printable keys edit the
/// prompt line, Enter confirms, Esc cancels.
pub fn handle_key(
    key: KeyEvent,
    textarea: &mut TextArea<'_>,
    state: &mut DesktopState,
) -> Action {
    if state.prompt.is_some() {
        return handle_prompt_key(key, state);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match (key.code, ctrl) {
        (KeyCode::Char('q'), true) | (KeyCode::Char('c'), true) => Action::Quit,
        (KeyCode::Char('g'), true) => Action::Generate,
        (KeyCode::Char('p'), true) => Action::PlayPause,
        (KeyCode::Char('t'), true) => Action::StopPlayback,
        (KeyCode::Char('l'), true) => Action::ClearText,
        (KeyCode::Char('s'), true) => {
            if state.current_audio.is_some() {
                state.prompt = Some(Prompt {
                    kind: PromptKind::SaveAudio,
                    input: String::new(),
                });
            } else {
                state.status_line = "No audio file to save".to_string();
            }
            Action::None
        }
        (KeyCode::Char('o'), true) => {
            state.prompt = Some(Prompt {
                kind: PromptKind::LoadText,
                input: String::new(),
            });
            Action::None
        }
        (KeyCode::F(2), _) => Action::CycleVoice,
        (KeyCode::F(3), _) => Action::CycleLanguage,
        (KeyCode::F(4), _) => Action::SpeedDown,
        (KeyCode::F(5), _) => Action::SpeedUp,
        _ => {
            textarea.input(key);
            Action::None
        }
    }
}

fn handle_prompt_key(key: KeyEvent, state: &mut DesktopState) -> Action {
    match key.code {
        KeyCode::Esc => {
            state.prompt = None;
            Action::None
        }
        KeyCode::Enter => match state.prompt.take() {
            Some(Prompt { kind, input }) if !input.trim().is_empty() => {
                Action::ConfirmPrompt(kind, input.trim().to_string())
            }
            _ => Action::None,
        },
        KeyCode::Backspace => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.input.pop();
            }
            Action::None
        }
        KeyCode::Char(c) => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.input.push(c);
            }
            Action::None
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_control_keys_map_to_actions() {
        let mut state = DesktopState::new(true);
        let mut textarea = TextArea::default();

        assert_eq!(
            handle_key(key(KeyCode::Char('g'), KeyModifiers::CONTROL), &mut textarea, &mut state),
            Action::Generate
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('q'), KeyModifiers::CONTROL), &mut textarea, &mut state),
            Action::Quit
        );
        assert_eq!(
            handle_key(key(KeyCode::F(2), KeyModifiers::NONE), &mut textarea, &mut state),
            Action::CycleVoice
        );
    }

    #[test]
    fn test_plain_characters_go_to_the_textarea() {
        let mut state = DesktopState::new(true);
        let mut textarea = TextArea::default();

        let action = handle_key(key(KeyCode::Char('h'), KeyModifiers::NONE), &mut textarea, &mut state);
        assert_eq!(action, Action::None);
        assert_eq!(textarea.lines(), ["h"]);
    }

    #[test]
    fn test_save_prompt_requires_audio() {
        let mut state = DesktopState::new(true);
        let mut textarea = TextArea::default();

        handle_key(key(KeyCode::Char('s'), KeyModifiers::CONTROL), &mut textarea, &mut state);
        assert!(state.prompt.is_none());
        assert_eq!(state.status_line, "No audio file to save");

        state.current_audio = Some(std::path::PathBuf::from("/tmp/out.wav"));
        handle_key(key(KeyCode::Char('s'), KeyModifiers::CONTROL), &mut textarea, &mut state);
        assert!(matches!(
            state.prompt,
            Some(Prompt { kind: PromptKind::SaveAudio, .. })
        ));
    }

    #[test]
    fn test_prompt_edit_confirm_and_cancel() {
        let mut state = DesktopState::new(true);
        let mut textarea = TextArea::default();
        state.prompt = Some(Prompt {
            kind: PromptKind::LoadText,
            input: String::new(),
        });

        handle_key(key(KeyCode::Char('a'), KeyModifiers::NONE), &mut textarea, &mut state);
        handle_key(key(KeyCode::Char('b'), KeyModifiers::NONE), &mut textarea, &mut state);
        handle_key(key(KeyCode::Backspace, KeyModifiers::NONE), &mut textarea, &mut state);
        assert_eq!(state.prompt.as_ref().unwrap().input, "a");
        // prompt input never leaks into the textarea
        assert_eq!(textarea.lines(), [""]);

        let action = handle_key(key(KeyCode::Enter, KeyModifiers::NONE), &mut textarea, &mut state);
        assert_eq!(action, Action::ConfirmPrompt(PromptKind::LoadText, "a".to_string()));
        assert!(state.prompt.is_none());

        state.prompt = Some(Prompt {
            kind: PromptKind::LoadText,
            input: "x".to_string(),
        });
        handle_key(key(KeyCode::Esc, KeyModifiers::NONE), &mut textarea, &mut state);
        assert!(state.prompt.is_none());
    }
}
