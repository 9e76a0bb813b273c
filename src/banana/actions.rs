//! Semantic action IDs for banana click targets.
//!
//! Registered during render and dispatched via `InputEvent::Click`.

pub const CLICK_BANANA: u16 = 0;

pub const SCROLL_UP: u16 = 10;
pub const SCROLL_DOWN: u16 = 11;

// ── Upgrade purchase (base + upgrade id) ────────────────────────
pub const BUY_UPGRADE_BASE: u16 = 100;

/// Keyboard shortcuts for the shop, by display position.
pub const SHOP_KEYS: [char; 12] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-', '='];

pub fn buy_upgrade(id: u32) -> u16 {
    BUY_UPGRADE_BASE.saturating_add(id.min(u16::MAX as u32) as u16)
}

/// Inverse of [`buy_upgrade`].
pub fn upgrade_for_action(action_id: u16) -> Option<u32> {
    action_id.checked_sub(BUY_UPGRADE_BASE).map(u32::from)
}

/// Display position bound to a shop key.
pub fn shop_index_for_key(key: char) -> Option<usize> {
    SHOP_KEYS.iter().position(|&k| k == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_action_round_trips_id() {
        assert_eq!(buy_upgrade(1), 101);
        assert_eq!(upgrade_for_action(buy_upgrade(12)), Some(12));
        assert_eq!(upgrade_for_action(CLICK_BANANA), None);
        assert_eq!(upgrade_for_action(SCROLL_DOWN), None);
    }

    #[test]
    fn shop_keys_cover_all_rows() {
        assert_eq!(shop_index_for_key('1'), Some(0));
        assert_eq!(shop_index_for_key('0'), Some(9));
        assert_eq!(shop_index_for_key('='), Some(11));
        assert_eq!(shop_index_for_key('x'), None);
    }
}
