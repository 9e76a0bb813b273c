//! Banana economy logic — pure functions over [`EconomyState`].

use super::error::PurchaseError;
use super::state::{EconomyState, PurchaseReceipt};

/// Cost multiplier applied on every purchase of an upgrade.
pub const COST_GROWTH: f64 = 1.15;
/// Rate multiplier applied on every purchase of an upgrade.
pub const RATE_GROWTH: f64 = 1.05;

/// Manual click on the banana.
pub fn record_manual_gain(state: &mut EconomyState) {
    state.balance = state.balance.saturating_add(1);
}

/// One timer period: credit the passive rate. No catch-up for late ticks.
pub fn apply_tick(state: &mut EconomyState) {
    state.balance = state.balance.saturating_add(state.total_rate);
}

/// Buy one of upgrade `id`.
///
/// Everything is checked before anything is written, so a failed purchase
/// leaves the state untouched.
pub fn purchase(state: &mut EconomyState, id: u32) -> Result<PurchaseReceipt, PurchaseError> {
    let idx = state
        .upgrade_index(id)
        .ok_or(PurchaseError::UnknownUpgrade(id))?;

    let cost = state.upgrades[idx].current_cost;
    if state.balance < cost {
        return Err(PurchaseError::InsufficientFunds {
            cost,
            balance: state.balance,
        });
    }

    let added_rate = grow(state.upgrades[idx].current_rate, RATE_GROWTH);
    let next_cost = grow(cost, COST_GROWTH);

    state.balance -= cost;
    state.total_rate = state.total_rate.saturating_add(added_rate);
    let upgrade = &mut state.upgrades[idx];
    // The upgrade's own rate is replaced, so the next purchase compounds from it.
    upgrade.current_rate = added_rate;
    upgrade.current_cost = next_cost;
    upgrade.owned += 1;

    Ok(PurchaseReceipt {
        id,
        current_cost: upgrade.current_cost,
        current_rate: upgrade.current_rate,
        owned: upgrade.owned,
        balance: state.balance,
        total_rate: state.total_rate,
    })
}

/// `floor(value * factor)`, truncating the same way display values do.
fn grow(value: u64, factor: f64) -> u64 {
    (value as f64 * factor).floor() as u64
}

/// Abbreviate a large count with K/M/B/T and one decimal (e.g. 1234 → "1.2K").
/// Values below 1000 print as plain integers.
pub fn abbreviate(n: u64) -> String {
    const SCALES: [(u64, &str); 4] = [
        (1_000_000_000_000, "T"),
        (1_000_000_000, "B"),
        (1_000_000, "M"),
        (1_000, "K"),
    ];
    for (scale, suffix) in SCALES {
        if n >= scale {
            return format!("{:.1}{}", n as f64 / scale as f64, suffix);
        }
    }
    n.to_string()
}

/// Big counter text. An empty balance shows as "000".
pub fn balance_label(balance: u64) -> String {
    if balance == 0 {
        "000".to_string()
    } else {
        abbreviate(balance)
    }
}

pub fn rate_label(total_rate: u64) -> String {
    format!("{:.1} bananas/sec", total_rate as f64)
}

pub fn cost_label(current_cost: u64, current_rate: u64) -> String {
    format!(
        "Cost: {}  |  +{} bananas/sec",
        abbreviate(current_cost),
        current_rate
    )
}

pub fn owned_label(owned: u32) -> String {
    format!("Owned: {}", owned)
}
