//! Banana economy state definitions.

use super::catalog::Catalog;

/// Mutable per-upgrade state, one per catalog row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpgradeState {
    pub id: u32,
    /// Price of the next purchase.
    pub current_cost: u64,
    /// Rate the next purchase grows from.
    pub current_rate: u64,
    pub owned: u32,
}

/// What a successful purchase left behind, for display refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub id: u32,
    pub current_cost: u64,
    pub current_rate: u64,
    pub owned: u32,
    pub balance: u64,
    pub total_rate: u64,
}

/// The whole economy. Created once from the catalog, lives for the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EconomyState {
    pub(super) balance: u64,
    /// Sum of every purchase's added rate, frozen at purchase time.
    pub(super) total_rate: u64,
    /// Same order as the catalog.
    pub(super) upgrades: Vec<UpgradeState>,
}

impl EconomyState {
    pub fn new(catalog: &Catalog) -> Self {
        let upgrades = catalog
            .rows()
            .iter()
            .map(|d| UpgradeState {
                id: d.id,
                current_cost: d.base_cost,
                current_rate: d.base_rate,
                owned: 0,
            })
            .collect();
        Self {
            balance: 0,
            total_rate: 0,
            upgrades,
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Bananas credited per tick.
    pub fn total_rate(&self) -> u64 {
        self.total_rate
    }

    pub fn upgrades(&self) -> &[UpgradeState] {
        &self.upgrades
    }

    pub fn upgrade(&self, id: u32) -> Option<&UpgradeState> {
        self.upgrades.iter().find(|u| u.id == id)
    }

    pub(super) fn upgrade_index(&self, id: u32) -> Option<usize> {
        self.upgrades.iter().position(|u| u.id == id)
    }

    /// Whether `purchase(id)` would succeed right now.
    pub fn can_afford(&self, id: u32) -> bool {
        self.upgrade(id)
            .map(|u| self.balance >= u.current_cost)
            .unwrap_or(false)
    }

    /// Total purchases across all upgrades.
    pub fn total_owned(&self) -> u64 {
        self.upgrades.iter().map(|u| u.owned as u64).sum()
    }
}
