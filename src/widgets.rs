//! Clickable list component.
//!
//! [`ClickableList`] pairs rendered lines with click actions so the shop can
//! register per-row targets without hand-computing row offsets.

use ratatui::widgets::{Paragraph, Wrap};
use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;

use crate::input::ClickState;

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Upgrades Shop"));
/// cl.push_clickable(Line::from("Pig  Cost: 15"), BUY_UPGRADE_BASE + 1);
/// cl.register_targets(area, &mut cs, 1, 1, scroll, 0);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
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

    /// Add a clickable line bound to `action_id`.
    ///
    /// The action follows the line: inserting lines before it moves the target.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Number of visual rows the lines occupy when wrapped at `width`.
    pub fn visual_height(&self, width: u16) -> usize {
        if width == 0 {
            return self.lines.len();
        }
        Paragraph::new(self.lines.clone())
            .wrap(Wrap { trim: false })
            .line_count(width)
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `area` — the widget area (including borders).
    /// * `top_offset` / `bottom_offset` — rows of border above/below content.
    /// * `scroll` — vertical scroll offset in visual rows.
    /// * `inner_width` — content width for wrap calculation, or `0` when the
    ///   widget does not wrap (one logical line = one row).
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        let mut visual_starts: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut visual_heights: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            visual_starts.push(cumulative);
            let h = wrapped_rows(line, inner_width);
            visual_heights.push(h);
            cumulative = cumulative.saturating_add(h);
        }

        for &(line_idx, action_id) in &self.actions {
            let li = line_idx as usize;
            if li >= self.lines.len() {
                continue;
            }
            let vstart = visual_starts[li];

            // A wrapped line is clickable on every row it spans.
            for r in 0..visual_heights[li] {
                let vr = vstart + r;
                if vr < scroll {
                    continue;
                }
                let screen_row = content_y + (vr - scroll);
                if screen_row >= content_end {
                    break;
                }
                cs.add_row_target(area, screen_row, action_id);
            }
        }
    }
}

/// Rows one line takes under the same word wrap the shop paragraph uses.
fn wrapped_rows(line: &Line<'_>, width: u16) -> u16 {
    if width == 0 || line.width() <= width as usize {
        return 1;
    }
    Paragraph::new(line.clone())
        .wrap(Wrap { trim: false })
        .line_count(width)
        .max(1)
        .min(u16::MAX as usize) as u16
}

impl Default for ClickableList<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_not_clickable() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("Upgrades Shop"));
        cl.push_clickable(Line::from("Pig"), 101);
        cl.push_clickable(Line::from("Dog"), 102);

        // Borders::ALL → top_offset=1, bottom_offset=1
        let area = Rect::new(0, 5, 40, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.target_count(), 2);
        assert_eq!(cs.hit_test(10, 6), None);
        assert_eq!(cs.hit_test(10, 7), Some(101));
        assert_eq!(cs.hit_test(10, 8), Some(102));
    }

    #[test]
    fn scrolled_rows_are_not_registered() {
        let mut cl = ClickableList::new();
        for id in 1..=4u16 {
            cl.push_clickable(Line::from(format!("upgrade {}", id)), 100 + id);
        }

        let area = Rect::new(0, 10, 40, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 1, 2, 0);

        assert_eq!(cs.target_count(), 2);
        assert_eq!(cs.hit_test(0, 10), Some(103));
        assert_eq!(cs.hit_test(0, 11), Some(104));
    }

    #[test]
    fn rows_below_the_area_are_clipped() {
        let mut cl = ClickableList::new();
        for i in 0..12u16 {
            cl.push_clickable(Line::from(format!("row {}", i)), 101 + i);
        }

        let area = Rect::new(0, 0, 40, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);

        assert_eq!(cs.target_count(), 3);
        assert_eq!(cs.hit_test(0, 3), Some(103));
        assert_eq!(cs.hit_test(0, 4), None);
    }

    #[test]
    fn wrapped_line_is_clickable_on_every_row() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("123456789012345678901234567890"), 42);
        cl.push_clickable(Line::from("next"), 43);

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 10);

        assert_eq!(cs.hit_test(5, 0), Some(42));
        assert_eq!(cs.hit_test(5, 2), Some(42));
        assert_eq!(cs.hit_test(5, 3), Some(43));
    }

    #[test]
    fn targets_follow_word_wrap() {
        // 20 columns of text, but words break it onto three rows at width 10
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("aaaaaa bbbbbb cccccc"), 42);
        cl.push_clickable(Line::from("next"), 43);
        assert_eq!(cl.visual_height(10), 4);

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0, 10);

        assert_eq!(cs.hit_test(5, 2), Some(42));
        assert_eq!(cs.hit_test(5, 3), Some(43));
        assert_eq!(cs.hit_test(5, 4), None);
    }

    #[test]
    fn visual_height_counts_wrapped_rows() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("12345678901234567890"));
        cl.push(Line::from("abc"));
        assert_eq!(cl.visual_height(0), 2);
        assert_eq!(cl.visual_height(40), 2);
        assert_eq!(cl.visual_height(10), 3);
    }

    #[test]
    fn empty_list() {
        let cl: ClickableList = ClickableList::new();
        assert_eq!(cl.len(), 0);
        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 80, 10), &mut cs, 1, 1, 0, 0);
        assert_eq!(cs.target_count(), 0);
    }
}
