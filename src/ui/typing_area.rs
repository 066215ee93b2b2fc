use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::{render::TypingView, typing::Outcome};

const CURSOR: &str = "_";

/// Typed text split on newlines, each character colored by its outcome.
pub fn input_lines(view: &TypingView) -> Vec<Line<'static>> {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let correct_style = bold_style.fg(Color::Green);
    let incorrect_style = bold_style.fg(Color::Red);

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (c, outcome) in view.classified() {
        if c == '\n' {
            // a mistyped line break still deserves a visible mark
            if outcome == Outcome::Incorrect {
                spans.push(Span::styled("⏎", incorrect_style));
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
            continue;
        }

        let style = match outcome {
            Outcome::Correct => correct_style,
            Outcome::Incorrect => incorrect_style,
        };
        let symbol = match (c, outcome) {
            (' ', Outcome::Incorrect) => "·".to_owned(),
            _ => c.to_string(),
        };
        spans.push(Span::styled(symbol, style));
    }

    if view.cursor_visible {
        spans.push(Span::styled(
            CURSOR,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(spans));

    lines
}

pub fn target_lines(view: &TypingView) -> Vec<Line<'static>> {
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    view.target
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), dim_style)))
        .collect()
}

/// Terminal rows needed to show `text` wrapped at `width` columns.
pub fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .split('\n')
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}
