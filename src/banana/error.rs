//! Error types for the banana economy and its catalog.

/// Why a purchase did not happen. Neither variant mutates any state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    #[error("unknown upgrade id {0}")]
    UnknownUpgrade(u32),
    /// Normal rejected transaction, not a fault.
    #[error("insufficient funds: need {cost}, have {balance}")]
    InsufficientFunds { cost: u64, balance: u64 },
}

/// Start-up validation failures for the upgrade catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog must have exactly {expected} rows, found {found}")]
    WrongSize { expected: usize, found: usize },
    #[error("catalog row {row}: id {id} must be positive and greater than the previous id")]
    BadId { row: usize, id: u32 },
    #[error("upgrade {id}: base cost must be at least 1")]
    ZeroCost { id: u32 },
}
