//! Input plumbing: pixel-to-cell conversion, click targets, and event types.
//!
//! Nothing here knows about bananas. The game maps action IDs and keys to
//! its own commands.

use ratzilla::ratatui::layout::Rect;

/// Screens narrower than this (in columns) use the stacked layout.
pub const NARROW_WIDTH: u16 = 60;

/// Input events, normalized from keyboard and pointer sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press from keyboard.
    Key(char),
    /// A click/tap on a registered target, identified by a semantic action ID.
    Click(u16),
    /// Arrow-key scrolling; negative is up.
    Scroll(i16),
}

/// Hit region in terminal cell coordinates and the action it fires.
#[derive(Debug, Clone)]
struct ClickTarget {
    rect: Rect,
    action_id: u16,
}

/// Shared state between the render loop and click handler.
///
/// Targets are rebuilt on every frame, so a click always resolves against
/// what is currently on screen.
pub struct ClickState {
    targets: Vec<ClickTarget>,
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

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Register a click target with a rectangular hit region and a semantic action ID.
    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a full-row click target at the given row within an area.
    /// Rows outside the area are ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Hit-test a terminal cell against all registered targets.
    /// When targets overlap the last registered wins, matching draw order.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }

    #[cfg(test)]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}

impl Default for ClickState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_narrow_layout(width: u16) -> bool {
    width < NARROW_WIDTH
}

/// Convert a pixel Y coordinate to a terminal row index.
///
/// `click_y` is relative to the grid container's top edge and
/// `grid_height` is its total pixel height.
/// Returns `None` if the click is outside the grid or inputs are invalid.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }

    let cell_height = grid_height / terminal_rows as f64;
    let row = (click_y / cell_height) as u16;

    if row >= terminal_rows {
        return None;
    }

    Some(row)
}

/// Convert a pixel X coordinate to a terminal column index.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (click_x / cell_width) as u16;
    if col >= terminal_cols { None } else { Some(col) }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hit_test ───────────────────────────────────────────────────

    #[test]
    fn hit_test_basic() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 11, 80, 1), 2);

        assert_eq!(cs.hit_test(5, 10), Some(1));
        assert_eq!(cs.hit_test(5, 11), Some(2));
        assert_eq!(cs.hit_test(5, 12), None);
    }

    #[test]
    fn hit_test_multi_row_rect() {
        // The banana art is a multi-row target
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(40, 5, 20, 3), 0);

        assert_eq!(cs.hit_test(45, 4), None);
        assert_eq!(cs.hit_test(45, 5), Some(0));
        assert_eq!(cs.hit_test(45, 7), Some(0));
        assert_eq!(cs.hit_test(45, 8), None);
        assert_eq!(cs.hit_test(39, 6), None);
        assert_eq!(cs.hit_test(60, 6), None);
    }

    #[test]
    fn hit_test_overlap_last_wins() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 80, 1), 1);
        cs.add_click_target(Rect::new(5, 5, 10, 1), 2);

        assert_eq!(cs.hit_test(7, 5), Some(2));
        assert_eq!(cs.hit_test(0, 5), Some(1));
        assert_eq!(cs.hit_test(20, 5), Some(1));
    }

    #[test]
    fn hit_test_empty() {
        let cs = ClickState::new();
        assert_eq!(cs.hit_test(0, 0), None);
    }

    // ── add_row_target ─────────────────────────────────────────────

    #[test]
    fn add_row_target_outside_area_ignored() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 9, 99);
        cs.add_row_target(area, 15, 98);
        cs.add_row_target(area, 12, 97);

        assert_eq!(cs.target_count(), 1);
        assert_eq!(cs.hit_test(15, 12), Some(97));
        assert_eq!(cs.hit_test(4, 12), None);
    }

    #[test]
    fn clear_targets_forgets_everything() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 1, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 2, 80, 1), 2);
        cs.clear_targets();
        assert_eq!(cs.target_count(), 0);
        assert_eq!(cs.hit_test(0, 1), None);
    }

    #[test]
    fn narrow_layout_threshold() {
        assert!(is_narrow_layout(30));
        assert!(is_narrow_layout(59));
        assert!(!is_narrow_layout(60));
        assert!(!is_narrow_layout(120));
    }

    // ── pixel conversion ───────────────────────────────────────────

    #[test]
    fn pixel_to_row_basic() {
        assert_eq!(pixel_y_to_row(0.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(14.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(15.0, 450.0, 30), Some(1));
        assert_eq!(pixel_y_to_row(449.0, 450.0, 30), Some(29));
    }

    #[test]
    fn pixel_to_row_rejects_outside_and_degenerate() {
        assert_eq!(pixel_y_to_row(450.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(-1.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 0.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 450.0, 0), None);
    }

    #[test]
    fn pixel_x_to_col_basic() {
        assert_eq!(pixel_x_to_col(0.0, 800.0, 80), Some(0));
        assert_eq!(pixel_x_to_col(10.0, 800.0, 80), Some(1));
        assert_eq!(pixel_x_to_col(799.0, 800.0, 80), Some(79));
        assert_eq!(pixel_x_to_col(800.0, 800.0, 80), None);
        assert_eq!(pixel_x_to_col(-1.0, 800.0, 80), None);
    }

    #[test]
    fn full_click_pipeline() {
        let mut cs = ClickState::new();
        cs.terminal_cols = 80;
        cs.terminal_rows = 30;

        // Shop rows on the left, banana on the right
        cs.add_click_target(Rect::new(0, 11, 40, 1), 101);
        cs.add_click_target(Rect::new(0, 12, 40, 1), 102);
        cs.add_click_target(Rect::new(40, 8, 40, 10), 0);

        let (grid_w, grid_h) = (800.0, 450.0);
        let cell_w = grid_w / 80.0;
        let cell_h = grid_h / 30.0;

        let col = pixel_x_to_col(3.0 * cell_w + 2.0, grid_w, cs.terminal_cols).unwrap();
        let row = pixel_y_to_row(12.0 * cell_h + 7.0, grid_h, cs.terminal_rows).unwrap();
        assert_eq!(cs.hit_test(col, row), Some(102));

        let col = pixel_x_to_col(60.0 * cell_w, grid_w, cs.terminal_cols).unwrap();
        let row = pixel_y_to_row(10.0 * cell_h, grid_h, cs.terminal_rows).unwrap();
        assert_eq!(cs.hit_test(col, row), Some(0));
    }
}
