//! Run statistics and algorithm comparison

use crate::algorithms::{AlgorithmKey, Comparison};
use crate::input::Preset;
use crate::playback::Phase;
use crate::steps::Stats;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Everything the stats pane shows, borrowed from the app
pub struct StatsView<'a> {
    pub algorithm: AlgorithmKey,
    pub phase: Phase,
    pub cursor: usize,
    pub total: usize,
    pub stats: Option<Stats>,
    pub data_size: usize,
    pub interval_ms: u64,
    pub preset: Preset,
    pub comparison: Option<&'a [Comparison]>,
}

pub fn render_stats_pane(frame: &mut Frame, area: Rect, view: &StatsView) {
    let block = Block::default()
        .title(" Stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let Some(rows) = view.comparison else {
        frame.render_widget(Paragraph::new(summary_lines(view)).block(block), area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(Paragraph::new(summary_lines(view)), chunks[0]);
    frame.render_widget(comparison_table(rows), chunks[1]);
}

fn summary_lines(view: &StatsView) -> Vec<Line<'static>> {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);
    let row = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!(" {:<12}", name), label),
            Span::styled(text, value),
        ])
    };

    let (comparisons, swaps, time) = match view.stats {
        Some(stats) => (
            stats.comparisons.to_string(),
            stats.swaps.to_string(),
            format!("{:.3} ms", stats.time_millis),
        ),
        None => ("-".into(), "-".into(), "-".into()),
    };

    vec![
        Line::from(Span::styled(
            format!(" {}", view.algorithm.display_name()),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        row("phase", view.phase.to_string()),
        row("step", format!("{}/{}", view.cursor, view.total)),
        row("comparisons", comparisons),
        row("swaps", swaps),
        row("time", time),
        row("size", view.data_size.to_string()),
        row("interval", format!("{} ms", view.interval_ms)),
        row("preset", view.preset.to_string()),
    ]
}

fn comparison_table(rows: &[Comparison]) -> Table<'static> {
    let header = Row::new(["algorithm", "cmp", "swaps", "ms"]).style(
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    );

    let body = rows.iter().map(|row| match &row.result {
        Ok(stats) => Row::new(vec![
            Cell::from(row.key.id()),
            Cell::from(stats.comparisons.to_string()),
            Cell::from(stats.swaps.to_string()),
            Cell::from(format!("{:.2}", stats.time_millis)),
        ])
        .style(Style::default().fg(DEFAULT_THEME.fg)),
        Err(e) => Row::new(vec![
            Cell::from(row.key.id()),
            Cell::from(e.reason().to_string()),
        ])
        .style(Style::default().fg(DEFAULT_THEME.error)),
    });

    Table::new(
        body,
        [
            Constraint::Length(10),
            Constraint::Min(6),
            Constraint::Min(6),
            Constraint::Min(6),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Compare ")
            .borders(Borders::TOP)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
    )
}
