//! Presentation-only state: shop scroll, feedback flashes, event log.
//!
//! None of this feeds back into the economy.

use std::cell::Cell;

/// Oldest entries are dropped beyond this.
pub const LOG_CAPACITY: usize = 50;

/// Frames a click keeps the banana highlighted.
pub const CLICK_FLASH_FRAMES: u32 = 6;
/// Frames a purchase keeps the shop border highlighted.
pub const PURCHASE_FLASH_FRAMES: u32 = 15;

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

#[derive(Debug, Default)]
pub struct ShopView {
    /// Shop scroll offset in visual rows.
    pub shop_scroll: u16,
    /// Largest offset that still fills the shop viewport, as last drawn.
    /// Zero until the shop has been rendered once.
    pub shop_max_scroll: Cell<u16>,
    pub click_flash: u32,
    pub purchase_flash: u32,
    pub log: Vec<LogEntry>,
}

impl ShopView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > LOG_CAPACITY {
            self.log.remove(0);
        }
    }

    /// Offset the shop is drawn at: the stored one, clamped to the content.
    pub fn visible_scroll(&self) -> u16 {
        self.shop_scroll.min(self.shop_max_scroll.get())
    }

    /// Move the shop by `delta` rows from where it is drawn, staying within
    /// the last rendered viewport.
    pub fn scroll_by(&mut self, delta: i16) {
        let max = self.shop_max_scroll.get() as i32;
        let next = self.visible_scroll() as i32 + delta as i32;
        self.shop_scroll = next.clamp(0, max) as u16;
    }

    /// Count down feedback timers by one frame.
    pub fn advance_frame(&mut self) {
        self.click_flash = self.click_flash.saturating_sub(1);
        self.purchase_flash = self.purchase_flash.saturating_sub(1);
    }
}
