//! Stateless UI rendering for a WordleBot session.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::App;
use crate::clue::{ClueCode, LetterMark};
use crate::session::Phase;

/// Wordle green.
const GREEN: Color = Color::Rgb(0x6a, 0xa9, 0x64);
/// Wordle yellow.
const YELLOW: Color = Color::Rgb(0xc9, 0xb4, 0x58);

/// Background colour for a mark.
pub fn mark_color(mark: LetterMark) -> Color {
    match mark {
        LetterMark::Unknown => Color::White,
        LetterMark::Misplaced => YELLOW,
        LetterMark::Correct => GREEN,
    }
}

fn mark_style(mark: LetterMark) -> Style {
    let fg = match mark {
        LetterMark::Unknown => Color::Black,
        _ => Color::White,
    };
    Style::default()
        .bg(mark_color(mark))
        .fg(fg)
        .add_modifier(Modifier::BOLD)
}

/// Renders the whole session.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(9), // Current round
            Constraint::Length(3), // Status
            Constraint::Min(3),    // History
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("WordleBot")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_round(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);
    draw_history(frame, chunks[3], app);

    let help = Paragraph::new("←/→ move  space/1-9 toggle  enter submit  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_round(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.controller().state();

    if state.phase() == Phase::Loading {
        let text = if state.error().is_some() {
            "Could not load a first guess."
        } else {
            "Loading..."
        };
        let loading = Paragraph::new(text).alignment(Alignment::Center);
        frame.render_widget(loading, area);
        return;
    }

    let letters: Vec<char> = state.candidate().chars().collect();

    let word_spans: Vec<Span> = letters
        .iter()
        .map(|letter| {
            Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                mark_style(LetterMark::Unknown),
            )
        })
        .flat_map(|span| [span, Span::raw(" ")])
        .collect();

    let clue_spans: Vec<Span> = state
        .marks()
        .iter()
        .enumerate()
        .map(|(index, mark)| {
            let letter = letters.get(index).copied().unwrap_or(' ');
            let mut style = mark_style(*mark);
            if index == app.cursor() && state.phase().is_interactive() {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
            }
            Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
        })
        .flat_map(|span| [span, Span::raw(" ")])
        .collect();

    let text = vec![
        Line::from(Span::styled(
            format!("Guess #{}", state.guess_number()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Word to Guess:"),
        Line::from(word_spans),
        Line::from(""),
        Line::from("What response did you get back?"),
        Line::from(Span::styled(
            "Toggle each letter: white = not in word, yellow = wrong spot, green = right spot.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(clue_spans),
    ];

    let round = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(round, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.controller().state();

    let (text, style) = if state.phase() == Phase::Submitting {
        ("Submitting...".to_string(), Style::default().fg(Color::Yellow))
    } else if let Some(success) = state.success() {
        (success.to_string(), Style::default().fg(GREEN))
    } else if let Some(error) = state.error() {
        (error.to_string(), Style::default().fg(Color::Red))
    } else {
        (String::new(), Style::default())
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let history = app.controller().state().history();

    let lines: Vec<Line> = history
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut spans = vec![Span::raw(format!(
                "Guess #{}: {}  ",
                index + 1,
                record.word().to_uppercase()
            ))];
            spans.extend(
                record
                    .word()
                    .chars()
                    .zip(record.clue().codes())
                    .map(|(letter, code)| {
                        Span::styled(
                            format!(" {} ", letter.to_ascii_uppercase()),
                            mark_style(ClueCode::mark(*code)),
                        )
                    })
                    .flat_map(|span| [span, Span::raw(" ")]),
            );
            Line::from(spans)
        })
        .collect();

    let list = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Guesses").borders(Borders::ALL));
    frame.render_widget(list, area);
}
