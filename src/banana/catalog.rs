//! The fixed upgrade catalog.
//!
//! Twelve animals, embedded as JSON and checked once at start-up. Row order
//! is display order and ids increase strictly along it.

use serde::Deserialize;

use super::error::CatalogError;

/// Number of rows every valid catalog has.
pub const CATALOG_SIZE: usize = 12;

const BUILTIN_JSON: &str = include_str!("catalog.json");

/// One immutable catalog row.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpgradeDefinition {
    pub id: u32,
    pub name: String,
    pub base_cost: u64,
    pub base_rate: u64,
    /// Opaque art handle. Only the renderer looks at it.
    pub sprite: String,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    rows: Vec<UpgradeDefinition>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let rows: Vec<UpgradeDefinition> = serde_json::from_str(json)?;
        Self::from_rows(rows)
    }

    /// The catalog shipped with the game.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_JSON)
    }

    pub fn from_rows(rows: Vec<UpgradeDefinition>) -> Result<Self, CatalogError> {
        if rows.len() != CATALOG_SIZE {
            return Err(CatalogError::WrongSize {
                expected: CATALOG_SIZE,
                found: rows.len(),
            });
        }
        let mut prev = 0u32;
        for (row, def) in rows.iter().enumerate() {
            if def.id <= prev {
                return Err(CatalogError::BadId { row, id: def.id });
            }
            if def.base_cost == 0 {
                return Err(CatalogError::ZeroCost { id: def.id });
            }
            prev = def.id;
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[UpgradeDefinition] {
        &self.rows
    }

    pub fn get(&self, id: u32) -> Option<&UpgradeDefinition> {
        self.rows.iter().find(|d| d.id == id)
    }

    /// Id of the row at display position `index`.
    pub fn id_at(&self, index: usize) -> Option<u32> {
        self.rows.get(index).map(|d| d.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u32, base_cost: u64) -> UpgradeDefinition {
        UpgradeDefinition {
            id,
            name: format!("u{}", id),
            base_cost,
            base_rate: 1,
            sprite: "pig".into(),
        }
    }

    fn rows(n: u32) -> Vec<UpgradeDefinition> {
        (1..=n).map(|id| row(id, 10 * id as u64)).collect()
    }

    #[test]
    fn builtin_catalog_loads_in_id_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.rows().len(), CATALOG_SIZE);
        let ids: Vec<u32> = catalog.rows().iter().map(|d| d.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn builtin_catalog_values() {
        let catalog = Catalog::builtin().unwrap();
        let pig = catalog.get(1).unwrap();
        assert_eq!((pig.base_cost, pig.base_rate), (15, 1));
        assert_eq!(pig.sprite, "pig");
        let mouse = catalog.get(12).unwrap();
        assert_eq!(mouse.base_cost, 14_000_000_000_000);
        assert_eq!(mouse.base_rate, 65_000_000);
        assert_eq!(catalog.id_at(9), Some(10));
        assert!(catalog.get(13).is_none());
    }

    #[test]
    fn wrong_size_rejected() {
        let err = Catalog::from_rows(rows(11)).unwrap_err();
        assert!(matches!(err, CatalogError::WrongSize { expected: 12, found: 11 }));
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut r = rows(12);
        r[5].id = 5;
        let err = Catalog::from_rows(r).unwrap_err();
        assert!(matches!(err, CatalogError::BadId { row: 5, id: 5 }));
    }

    #[test]
    fn zero_id_rejected() {
        let mut r = rows(12);
        r[0].id = 0;
        assert!(matches!(
            Catalog::from_rows(r).unwrap_err(),
            CatalogError::BadId { row: 0, id: 0 }
        ));
    }

    #[test]
    fn zero_cost_rejected() {
        let mut r = rows(12);
        r[3].base_cost = 0;
        assert!(matches!(
            Catalog::from_rows(r).unwrap_err(),
            CatalogError::ZeroCost { id: 4 }
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            Catalog::from_json("[{\"id\": 1}]").unwrap_err(),
            CatalogError::Parse(_)
        ));
        assert!(matches!(
            Catalog::from_json("not json").unwrap_err(),
            CatalogError::Parse(_)
        ));
    }
}
