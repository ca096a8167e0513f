//! Input handling: pixel-to-cell conversion, click targets, and event types.

use ratzilla::ratatui::layout::Rect;

use crate::dessert::actions::DessertAction;

/// Input events, normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press from keyboard.
    Key(char),
    /// A click/tap on a registered target.
    Click(DessertAction),
}

/// A region on screen that triggers an action when clicked.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Hit region in terminal cell coordinates.
    pub rect: Rect,
    pub action: DessertAction,
}

/// Shared between the render loop (which registers targets) and the mouse
/// handler (which hit-tests them).
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    /// Called at the start of every frame.
    pub fn reset(&mut self, cols: u16, rows: u16) {
        self.terminal_cols = cols;
        self.terminal_rows = rows;
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action: DessertAction) {
        self.targets.push(ClickTarget { rect, action });
    }

    /// Register a full-width row of `area`. Rows outside `area` are ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action: DessertAction) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action);
        }
    }

    /// Action under the given cell. Later targets are on top.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<DessertAction> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            let inside = col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height;
            inside.then_some(t.action)
        })
    }
}

/// Whether a screen width (in columns) should use the stacked layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert a pixel offset along one axis into a cell index.
///
/// `offset` is relative to the grid container's edge and `extent` is the
/// container's pixel size on that axis. Returns `None` outside the grid.
pub fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    (cell < cells).then_some(cell)
}
