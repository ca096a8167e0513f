//! Clickable text lines.
//!
//! [`ClickableLines`] pairs each rendered [`Line`] with an optional action so
//! click targets follow the text when lines are added or removed above them.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;

use crate::dessert::actions::DessertAction;
use crate::input::ClickState;

pub struct ClickableLines<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action)` pairs.
    actions: Vec<(u16, DessertAction)>,
}

impl<'a> ClickableLines<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a line that triggers `action` when clicked.
    pub fn push_clickable(&mut self, line: Line<'a>, action: DessertAction) {
        self.actions.push((self.lines.len() as u16, action));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register a row target for every clickable line that fits in `area`.
    ///
    /// Assumes one visual row per line (no wrapping). `top_offset` and
    /// `bottom_offset` are the border rows above and below the content.
    pub fn register_targets(&self, area: Rect, cs: &mut ClickState, top_offset: u16, bottom_offset: u16) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);
        for &(line_idx, action) in &self.actions {
            let row = content_y + line_idx;
            if row < content_end {
                cs.add_row_target(area, row, action);
            }
        }
    }
}
