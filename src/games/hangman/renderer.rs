/// Hangman-specific renderer - draws a snapshot, never touches game state
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::game::Renderer;

use super::game::{MaskedLetter, Snapshot, Status, MAX_ATTEMPTS};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Gallows pictures, indexed by wrong guesses
pub const GALLOWS: [&str; MAX_ATTEMPTS as usize + 1] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

pub struct HangmanRenderer;

impl Renderer<Snapshot> for HangmanRenderer {
    fn render(frame: &mut Frame, state: &Snapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(9),    // Info + gallows
                Constraint::Length(5), // Keyboard
                Constraint::Length(4), // Footer
            ])
            .split(frame.area());

        let header = Paragraph::new("🎮 HANGMAN")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        frame.render_widget(
            Paragraph::new(info_lines(state))
                .block(Block::default().borders(Borders::ALL).title(" Round ")),
            body[0],
        );

        let stage = usize::from(state.stage).min(GALLOWS.len() - 1);
        frame.render_widget(
            Paragraph::new(GALLOWS[stage])
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            body[1],
        );

        frame.render_widget(
            Paragraph::new(keyboard_lines(state))
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new(footer_lines(state))
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[3],
        );
    }
}

fn info_lines(state: &Snapshot) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let guessed = if state.guessed.is_empty() {
        "None".to_string()
    } else {
        state
            .guessed
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    vec![
        Line::from(vec![Span::styled("Category: ", bold), Span::raw(state.category.clone())]),
        Line::from(vec![Span::styled("Hint: ", bold), Span::raw(state.hint.clone())]),
        Line::from(vec![Span::styled("Guessed letters: ", bold), Span::raw(guessed)]),
        Line::from(vec![
            Span::styled("Chances left: ", bold),
            Span::raw(state.remaining_attempts.to_string()),
        ]),
        Line::default(),
        masked_word(&state.mask),
    ]
}

/// Revealed letters in green, the rest as underscores
pub fn masked_word(mask: &[MaskedLetter]) -> Line<'static> {
    let mut spans = Vec::with_capacity(mask.len() * 2);
    for (i, m) in mask.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if m.revealed {
            spans.push(Span::styled(
                m.letter.to_ascii_uppercase().to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("_"));
        }
    }
    Line::from(spans)
}

fn key_style(letter: char, state: &Snapshot) -> Style {
    if state.misses.contains(&letter) {
        Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
    } else if state.guessed.contains(&letter) {
        Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }
}

fn keyboard_lines(state: &Snapshot) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| Span::styled(format!(" {} ", c.to_ascii_uppercase()), key_style(c, state)))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn footer_lines(state: &Snapshot) -> Vec<Line<'static>> {
    match state.status {
        Status::InProgress => vec![
            Line::from("Type a letter to guess"),
            Line::from("[Ctrl+R] New word  [Ctrl+N] New game  [Esc] Quit"),
        ],
        Status::Won | Status::Lost => {
            let color = if state.status == Status::Won { Color::Green } else { Color::Red };
            vec![
                Line::styled(
                    state.message.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Line::from("[Enter] Play again  [N] New game  [Esc] Quit"),
            ]
        }
    }
}
