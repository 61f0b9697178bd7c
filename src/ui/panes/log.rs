//! Step log pane: a window of steps around the playback cursor

use crate::steps::StepLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// First visible row so that `cursor` stays in view
///
/// Keeps the cursor a third of the way down once the log is taller than the
/// pane.
pub fn window_start(cursor: usize, total: usize, visible: usize) -> usize {
    if total <= visible {
        return 0;
    }
    cursor
        .saturating_sub(visible / 3)
        .min(total - visible)
}

/// Render the step log pane. `cursor` is the next step to apply.
pub fn render_log_pane(frame: &mut Frame, area: Rect, log: &StepLog, cursor: usize) {
    let block = Block::default()
        .title(" Steps ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if log.is_empty() {
        let paragraph = Paragraph::new("(press Enter to record a run)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible = area.height.saturating_sub(2).max(1) as usize;
    let start = window_start(cursor, log.len(), visible);

    let items: Vec<ListItem> = log
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, step)| {
            let text = format!("{:>5} {}", i, step);
            let style = if i + 1 == cursor {
                // Most recently applied
                Style::default()
                    .fg(DEFAULT_THEME.step_color(step.kind()))
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else if i < cursor {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_start() {
        assert_eq!(window_start(5, 8, 10), 0);
        assert_eq!(window_start(0, 100, 9), 0);
        assert_eq!(window_start(50, 100, 9), 47);
        assert_eq!(window_start(100, 100, 9), 91);
    }
}
