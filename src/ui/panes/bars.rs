//! Bar chart of the display array

use crate::steps::{Step, Value};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};
use rustc_hash::FxHashMap;

/// Resolution of bar heights
const HEIGHT_SCALE: f64 = 1000.0;

/// One rendered column: the tallest value it covers and its highlight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub value: Value,
    pub highlight: Option<Color>,
}

/// Colour per element index for the most recently applied step
///
/// A terminal step paints every element; other steps paint only the indices
/// they touch.
pub fn highlights(step: Option<&Step>, len: usize) -> FxHashMap<usize, Color> {
    let mut map = FxHashMap::default();
    let Some(step) = step else {
        return map;
    };
    let color = DEFAULT_THEME.step_color(step.kind());
    if step.is_terminal() {
        map.extend((0..len).map(|i| (i, color)));
    } else {
        map.extend(step.indices().into_iter().filter(|&i| i < len).map(|i| (i, color)));
    }
    map
}

/// Fold `values` into at most `width` columns
///
/// When there are more elements than columns, neighbouring elements share a
/// column that shows their maximum and the first highlight among them.
pub fn columns(values: &[Value], marks: &FxHashMap<usize, Color>, width: usize) -> Vec<Column> {
    if values.is_empty() || width == 0 {
        return Vec::new();
    }
    let per_column = values.len().div_ceil(width);
    values
        .chunks(per_column)
        .enumerate()
        .map(|(c, chunk)| {
            let start = c * per_column;
            let value = chunk.iter().copied().fold(Value::NEG_INFINITY, Value::max);
            let highlight = (start..start + chunk.len()).find_map(|i| marks.get(&i).copied());
            Column { value, highlight }
        })
        .collect()
}

/// Render the bars pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[Value],
    last_step: Option<&Step>,
    title: &str,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let inner_width = area.width.saturating_sub(2) as usize;
    let marks = highlights(last_step, values.len());
    let cols = columns(values, &marks, inner_width);
    if cols.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    // Heights are measured from the smallest of zero and the minimum value
    let floor = cols.iter().map(|c| c.value).fold(0.0, Value::min);
    let ceiling = cols.iter().map(|c| c.value).fold(Value::NEG_INFINITY, Value::max);
    let span = (ceiling - floor).max(1.0);

    let bars: Vec<Bar> = cols
        .iter()
        .map(|col| {
            let height = ((col.value - floor) / span * HEIGHT_SCALE).round() as u64 + 1;
            Bar::default()
                .value(height)
                .text_value(String::new())
                .style(Style::default().fg(col.highlight.unwrap_or(DEFAULT_THEME.bar)))
        })
        .collect();

    let (bar_width, bar_gap) = bar_geometry(cols.len(), inner_width);
    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(HEIGHT_SCALE as u64 + 1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Widest bars that still fit, with a one-cell gap when there is room
fn bar_geometry(count: usize, width: usize) -> (u16, u16) {
    let count = count.max(1);
    let slot = (width / count).max(1);
    if slot >= 3 {
        ((slot - 1) as u16, 1)
    } else {
        (slot as u16, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_fold_when_narrow() {
        let values = [1.0, 5.0, 2.0, 8.0, 3.0];
        let mut marks = FxHashMap::default();
        marks.insert(3, DEFAULT_THEME.compare);

        let cols = columns(&values, &marks, 2);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].value, 5.0);
        assert_eq!(cols[0].highlight, None);
        assert_eq!(cols[1].value, 8.0);
        assert_eq!(cols[1].highlight, Some(DEFAULT_THEME.compare));
    }

    #[test]
    fn test_columns_one_per_element_when_wide() {
        let cols = columns(&[3.0, 1.0], &FxHashMap::default(), 80);
        assert_eq!(cols.len(), 2);
        assert!(columns(&[], &FxHashMap::default(), 80).is_empty());
    }

    #[test]
    fn test_highlights_by_step() {
        let swap = Step::Swap(0, 2);
        let marks = highlights(Some(&swap), 4);
        assert_eq!(marks.len(), 2);
        assert_eq!(marks.get(&2), Some(&DEFAULT_THEME.write));

        let done = Step::Complete(vec![1.0, 2.0, 3.0]);
        assert_eq!(highlights(Some(&done), 3).len(), 3);

        // Pass markers carry a pass number, not always a valid index
        assert!(highlights(Some(&Step::PassStart(9)), 4).is_empty());
    }

    #[test]
    fn test_bar_geometry() {
        assert_eq!(bar_geometry(10, 80), (7, 1));
        assert_eq!(bar_geometry(40, 80), (2, 0));
        assert_eq!(bar_geometry(200, 80), (1, 0));
    }
}
