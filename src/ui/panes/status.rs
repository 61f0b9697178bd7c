//! Status bar rendering with keybindings and state indicators

use crate::playback::Phase;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `is_error` paints the message in the error colour.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    cursor: usize,
    total: usize,
    phase: Phase,
    is_error: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", cursor, total),
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let hints: [(&str, &str); 8] = [
        (" ↵ ", " sort "),
        (" ⎵ ", " play "),
        (" → ", " step "),
        (" ⇥ ", " algo "),
        (" +/- ", " speed "),
        (" [/] ", " size "),
        (" p/c/r ", " preset/compare/reset "),
        ("q", " quit "),
    ];

    let mut right_spans = Vec::with_capacity(hints.len() * 4 + 2);
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let badge = match phase {
        Phase::Running => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
        Phase::Complete => Some((" END ", DEFAULT_THEME.success)),
        Phase::Paused if cursor == 0 => Some((" START ", DEFAULT_THEME.primary)),
        Phase::Paused | Phase::Idle => None,
    };
    if let Some((text, bg)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
