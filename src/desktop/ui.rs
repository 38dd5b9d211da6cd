//! Frame layout for the desktop surface.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tui_textarea::TextArea;

use crate::catalog::MAX_TEXT_CHARS;
use crate::desktop::state::{DesktopState, GenerationPhase, PlaybackPhase, PromptKind};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

pub fn draw(frame: &mut Frame, state: &DesktopState, textarea: &TextArea<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // engine status
            Constraint::Min(5),    // text input
            Constraint::Length(3), // voice settings
            Constraint::Length(3), // playback
            Constraint::Length(1), // status line
            Constraint::Length(1), // footer / prompt
        ])
        .split(frame.area());

    draw_title(frame, rows[0]);
    draw_engine_status(frame, rows[1], state);
    draw_text_input(frame, rows[2], state, textarea);
    draw_settings(frame, rows[3], state);
    draw_playback(frame, rows[4], state);
    draw_status_line(frame, rows[5], state);
    draw_footer(frame, rows[6], state);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "Kokoro Studio",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  -  text to speech"),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_engine_status(frame: &mut Frame, area: Rect, state: &DesktopState) {
    let (marker, style) = if state.engine_available {
        ("● ready", Style::default().fg(Color::Green))
    } else {
        ("● unavailable", Style::default().fg(Color::Red))
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!("engine: {}", marker), style))),
        area,
    );
}

fn draw_text_input(frame: &mut Frame, area: Rect, _state: &DesktopState, textarea: &TextArea<'_>) {
    let count: usize = textarea
        .lines()
        .iter()
        .map(|line| line.chars().count())
        .sum::<usize>()
        + textarea.lines().len().saturating_sub(1); // newlines count too

    let counter_style = if count > MAX_TEXT_CHARS {
        Style::default().fg(Color::Red)
    } else if count > MAX_TEXT_CHARS - 500 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Text to Convert")
        .title_bottom(Line::from(Span::styled(
            format!(" {} / {} characters ", count, MAX_TEXT_CHARS),
            counter_style,
        )));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(textarea, inner);
}

fn draw_settings(frame: &mut Frame, area: Rect, state: &DesktopState) {
    let line = Line::from(vec![
        Span::raw("Voice [F2]: "),
        Span::styled(
            state.voice().label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Language [F3]: "),
        Span::styled(
            state.language().label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Speed [F4/F5]: "),
        Span::styled(
            format!("{:.1}x", state.speed),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Voice Settings")),
        area,
    );
}

fn draw_playback(frame: &mut Frame, area: Rect, state: &DesktopState) {
    let playback = match state.playback {
        PlaybackPhase::Stopped => "stopped",
        PlaybackPhase::Playing => "playing",
        PlaybackPhase::Paused => "paused",
    };

    let info = state
        .audio_info
        .as_deref()
        .unwrap_or("No audio generated");

    let line = Line::from(vec![
        Span::styled(playback, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(info, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Audio Playback")),
        area,
    );
}

fn draw_status_line(frame: &mut Frame, area: Rect, state: &DesktopState) {
    let line = if state.phase == GenerationPhase::Generating {
        let spinner = SPINNER[state.spinner_frame % SPINNER.len()];
        Line::from(format!("{} {}", spinner, state.status_line))
    } else {
        Line::from(state.status_line.as_str())
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &DesktopState) {
    let line = match &state.prompt {
        Some(prompt) => {
            let label = match prompt.kind {
                PromptKind::SaveAudio => "Save WAV to",
                PromptKind::LoadText => "Load text from",
            };
            Line::from(vec![
                Span::styled(
                    format!("{}: ", label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(prompt.input.as_str()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ])
        }
        None => Line::from(Span::styled(
            "^G generate  ^P play/pause  ^T stop  ^S save  ^O load  ^L clear  ^Q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
