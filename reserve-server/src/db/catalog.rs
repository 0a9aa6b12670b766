//! Table Catalog
//!
//! The physical floor plan as the engine sees it: a fixed, ordered set of
//! dining tables loaded once at startup. Provisioning is an external
//! concern - operators drop a `tables.json` file into the work directory
//! (or point `TABLES_FILE` at one); without it, a built-in seed layout is
//! used. The engine never writes to the catalog.

use shared::models::DiningTable;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read table catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid table catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate table id in catalog: {0}")]
    DuplicateId(u32),

    #[error("Table {0} has zero capacity")]
    ZeroCapacity(u32),
}

/// Ordered, read-only set of dining tables
///
/// Iteration order is the catalog's insertion order; availability results
/// preserve it, so table listings are stable and deterministic.
#[derive(Debug, Clone)]
pub struct TableCatalog {
    tables: Vec<DiningTable>,
}

impl TableCatalog {
    /// Build a catalog, rejecting duplicate ids and zero capacities
    pub fn from_tables(tables: Vec<DiningTable>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for table in &tables {
            if !seen.insert(table.id) {
                return Err(CatalogError::DuplicateId(table.id));
            }
            if table.capacity == 0 {
                return Err(CatalogError::ZeroCapacity(table.id));
            }
        }
        Ok(Self { tables })
    }

    /// Load a catalog from a JSON file (array of tables)
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let tables: Vec<DiningTable> = serde_json::from_str(&raw)?;
        Self::from_tables(tables)
    }

    /// The default floor plan
    ///
    /// Two deuces by the window, four four-tops in the center, a six-top on
    /// the patio and one large back-room table.
    pub fn seed_default() -> Self {
        Self {
            tables: vec![
                DiningTable::new(1, 2, "Window"),
                DiningTable::new(2, 2, "Window"),
                DiningTable::new(3, 4, "Center"),
                DiningTable::new(4, 4, "Center"),
                DiningTable::new(5, 4, "Center"),
                DiningTable::new(6, 4, "Patio"),
                DiningTable::new(7, 6, "Patio"),
                DiningTable::new(8, 8, "Back Room"),
            ],
        }
    }

    /// All tables, in catalog order
    pub fn all(&self) -> &[DiningTable] {
        &self.tables
    }

    /// Look up a single table
    pub fn by_id(&self, id: u32) -> Option<&DiningTable> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
