use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, Widget},
};

use crate::typing::LevelResult;

/// Seconds with one decimal, as shown on every results screen
pub fn format_secs(secs: f64) -> String {
    format!("{secs:.1} s")
}

pub fn format_wpm(wpm: f64) -> String {
    format!("{wpm:.1}")
}

pub fn format_accuracy(accuracy: f64) -> String {
    format!("{accuracy:.1}%")
}

/// Text cells of the final results table, one row per level.
pub fn summary_rows(results: &[LevelResult]) -> Vec<[String; 4]> {
    results
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            [
                format!("Level {}", idx + 1),
                format_secs(r.elapsed_secs),
                format_wpm(r.wpm),
                format_accuracy(r.accuracy),
            ]
        })
        .collect()
}

pub fn render_summary_table(results: &[LevelResult], area: Rect, buf: &mut Buffer) {
    let header = Row::new(vec!["Level", "Time", "WPM", "Accuracy"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = summary_rows(results).into_iter().map(Row::new);

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Final statistics"));

    Widget::render(table, area, buf);
}
