//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity (桌台)
///
/// Catalog entries are immutable from the engine's point of view:
/// provisioning happens out of band (a `tables.json` file or the built-in
/// seed), and `id` values are stable and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(rename = "table_id")]
    pub id: u32,
    pub capacity: u32,
    /// Descriptive label ("Window", "Patio", ...), not unique
    #[serde(default)]
    pub location: String,
}

impl DiningTable {
    pub fn new(id: u32, capacity: u32, location: impl Into<String>) -> Self {
        Self {
            id,
            capacity,
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_wire_shape() {
        let table = DiningTable::new(3, 4, "Center");
        let json = serde_json::to_value(&table).expect("serialize table");
        assert_eq!(json["table_id"], 3);
        assert_eq!(json["capacity"], 4);
        assert_eq!(json["location"], "Center");
    }

    #[test]
    fn test_location_defaults_to_empty() {
        let table: DiningTable =
            serde_json::from_str(r#"{"table_id": 1, "capacity": 2}"#).expect("deserialize table");
        assert_eq!(table.id, 1);
        assert!(table.location.is_empty());
    }
}
