use crate::steps::StepKind;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color, // Untouched elements
    pub compare: Color,
    pub write: Color,
    pub select: Color,
    pub tally: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    bar: Color::Rgb(137, 180, 250),
    compare: Color::Rgb(249, 226, 175), // Yellow
    write: Color::Rgb(243, 139, 168),   // Red
    select: Color::Rgb(203, 166, 247),  // Mauve
    tally: Color::Rgb(148, 226, 213),   // Teal
};

impl Theme {
    /// Highlight for the elements touched by a step of `kind`
    pub fn step_color(&self, kind: StepKind) -> Color {
        match kind {
            StepKind::Compare => self.compare,
            StepKind::Swap
            | StepKind::Shift
            | StepKind::Insert
            | StepKind::Merge
            | StepKind::Place
            | StepKind::Shuffle
            | StepKind::Copy => self.write,
            StepKind::Select
            | StepKind::SelectionStart
            | StepKind::SelectionEnd
            | StepKind::HeapifyStart
            | StepKind::HeapifyEnd => self.select,
            StepKind::Count => self.tally,
            StepKind::Complete => self.success,
            StepKind::Timeout => self.error,
            StepKind::Init
            | StepKind::PassStart
            | StepKind::PassEnd
            | StepKind::GapChange
            | StepKind::Info => self.bar,
        }
    }
}
