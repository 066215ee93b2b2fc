pub mod summary;
pub mod typing_area;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};

use crate::{
    render::{RenderModel, TypingView, View},
    typing::LevelResult,
    ui::{
        summary::{format_accuracy, format_secs, format_wpm, render_summary_table},
        typing_area::{input_lines, target_lines, wrapped_rows},
    },
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &RenderModel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.view {
            View::Menu { prompt_visible } => render_menu(*prompt_visible, area, buf),
            View::Countdown { remaining_secs } => {
                render_countdown(self.level_number(), *remaining_secs, area, buf)
            }
            View::Typing(view) => render_typing(self, view, area, buf),
            View::LevelResult { result } => render_level_result(self, result, area, buf),
            View::FinalSummary {
                results,
                total_elapsed_secs,
            } => render_final_summary(results, *total_elapsed_secs, area, buf),
        }
    }
}

/// Vertically centers `height` rows inside `area`.
fn centered(area: Rect, height: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    chunks[1]
}

fn render_menu(prompt_visible: bool, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let accent_style = bold_style.fg(Color::Cyan);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let prompt = if prompt_visible {
        Line::from(Span::styled("PRESS [ENTER] TO START", bold_style))
    } else {
        Line::default()
    };

    let text = vec![
        Line::from(Span::styled("TYPING MASTER", accent_style)),
        Line::from(Span::styled(
            "Test your typing speed skills",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        prompt,
        Line::default(),
        Line::from(Span::styled("(esc)ape", italic_style)),
    ];

    let height = text.len() as u16;
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .render(centered(area, height), buf);
}

fn render_countdown(level: usize, remaining_secs: u32, area: Rect, buf: &mut Buffer) {
    let text = vec![
        Line::from(Span::styled(
            format!("LEVEL {level}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Starting in {remaining_secs}..."),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    ];

    Paragraph::new(text)
        .alignment(Alignment::Center)
        .render(centered(area, 2), buf);
}

fn render_typing(model: &RenderModel, view: &TypingView, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let label_style = bold_style.fg(Color::Cyan);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let inner_width = area.width.saturating_sub(HORIZONTAL_MARGIN * 2);
    let target_rows = wrapped_rows(&view.target, inner_width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN.min(area.height / 8))
        .constraints([
            Constraint::Length(1),           // status
            Constraint::Length(1),           // time bar
            Constraint::Length(1),           // padding
            Constraint::Length(1),           // target label
            Constraint::Length(target_rows), // target
            Constraint::Length(1),           // padding
            Constraint::Length(1),           // input label
            Constraint::Min(1),              // input
            Constraint::Length(1),           // legend
        ])
        .split(area);

    let status = Paragraph::new(Span::styled(
        format!(
            "LEVEL {}/{}   Time: {:.1} / {:.0}",
            model.level_number(),
            model.level_count,
            view.elapsed_secs,
            view.time_limit_secs
        ),
        bold_style,
    ));
    status.render(chunks[0], buf);

    Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(view.time_left_ratio())
        .label("")
        .render(chunks[1], buf);

    Paragraph::new(Span::styled("TARGET:", label_style)).render(chunks[3], buf);
    Paragraph::new(target_lines(view))
        .wrap(Wrap { trim: false })
        .render(chunks[4], buf);

    Paragraph::new(Span::styled(
        "YOUR INPUT:",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ))
    .render(chunks[6], buf);
    Paragraph::new(input_lines(view))
        .wrap(Wrap { trim: false })
        .render(chunks[7], buf);

    let legend = if view.finished {
        Span::styled(
            "Level finished. Press [ENTER] for results   (esc)ape",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "[ENTER] new line | [BACKSPACE] delete | [TAB] finish | (esc)ape",
            italic_style,
        )
    };
    Paragraph::new(legend).render(chunks[8], buf);
}

fn render_level_result(model: &RenderModel, result: &LevelResult, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let next = if model.level_number() < model.level_count {
        "Press [ENTER] for the next level"
    } else {
        "Press [ENTER] for final results"
    };

    let text = vec![
        Line::from(Span::styled(
            format!("LEVEL {} DONE!", model.level_number()),
            bold_style.fg(Color::Yellow),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("Time Taken: {}", format_secs(result.elapsed_secs)),
            bold_style,
        )),
        Line::from(Span::styled(
            format!("WPM: {}", format_wpm(result.wpm)),
            bold_style,
        )),
        Line::from(Span::styled(
            format!("Accuracy: {}", format_accuracy(result.accuracy)),
            bold_style,
        )),
        Line::default(),
        Line::from(Span::styled(next, italic_style)),
    ];

    let height = text.len() as u16;
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .render(centered(area, height), buf);
}

fn render_final_summary(
    results: &[LevelResult],
    total_elapsed_secs: f64,
    area: Rect,
    buf: &mut Buffer,
) {
    // borders + header + one row per level
    let table_height = results.len() as u16 + 3;
    let box_area = centered(area, table_height + 3);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(table_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(box_area);

    render_summary_table(results, chunks[0], buf);

    Paragraph::new(Span::styled(
        format!("TOTAL TIME: {}", format_secs(total_elapsed_secs)),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);

    Paragraph::new(Span::styled(
        "Press [ESC] to exit",
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(chunks[3], buf);
}
