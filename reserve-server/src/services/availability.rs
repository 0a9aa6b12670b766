//! Availability Resolver
//!
//! Decides which tables are offered for a `(date, time, party size)` request:
//! every catalog table that is big enough and has no reservation on the exact
//! slot. Conflicts are slot-equality only; an edit in progress passes its own
//! reservation id so its current slot does not block it.

use std::sync::Arc;

use shared::Slot;
use shared::models::DiningTable;

use crate::db::{ReservationStorage, TableCatalog};
use crate::utils::AppResult;

/// An availability request
#[derive(Debug, Clone, Default)]
pub struct SlotQuery {
    pub date: String,
    pub time: String,
    /// `None` or zero means "browse the slot regardless of party size"
    pub party_size: Option<u32>,
    /// Reservation to leave out of the conflict scan (in-progress edit)
    pub exclude_reservation: Option<u64>,
}

#[derive(Clone)]
pub struct AvailabilityService {
    storage: ReservationStorage,
    catalog: Arc<TableCatalog>,
}

impl AvailabilityService {
    pub fn new(storage: ReservationStorage, catalog: Arc<TableCatalog>) -> Self {
        Self { storage, catalog }
    }

    /// Resolve the tables available for the given slot, in catalog order
    ///
    /// A blank date or time yields an empty result (no slot, no
    /// availability); a malformed one is a validation error.
    pub fn resolve(&self, query: &SlotQuery) -> AppResult<Vec<DiningTable>> {
        if query.date.trim().is_empty() || query.time.trim().is_empty() {
            return Ok(Vec::new());
        }

        let slot = Slot::parse(&query.date, &query.time)?;
        let booked = self
            .storage
            .booked_tables(&slot.date, &slot.time, query.exclude_reservation)?;
        let min_capacity = query.party_size.filter(|p| *p > 0);

        Ok(self
            .catalog
            .all()
            .iter()
            .filter(|t| !booked.contains(&t.id))
            .filter(|t| min_capacity.is_none_or(|p| t.capacity >= p))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{DiningTable, ReservationDraft};

    fn service() -> AvailabilityService {
        let storage = ReservationStorage::open_in_memory().unwrap();
        let catalog = Arc::new(
            TableCatalog::from_tables(vec![
                DiningTable::new(1, 2, "Window"),
                DiningTable::new(2, 4, "Center"),
            ])
            .unwrap(),
        );
        AvailabilityService::new(storage, catalog)
    }

    fn book(service: &AvailabilityService, date: &str, time: &str, table_id: u32) -> u64 {
        service
            .storage
            .create(&ReservationDraft {
                customer_name: "Ada".into(),
                customer_email: "ada@example.com".into(),
                date: date.into(),
                time: time.into(),
                party_size: 2,
                table_id,
            })
            .unwrap()
            .id
    }

    fn query(date: &str, time: &str) -> SlotQuery {
        SlotQuery {
            date: date.into(),
            time: time.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_slot_is_empty() {
        let service = service();
        assert!(service.resolve(&query("", "18:00")).unwrap().is_empty());
        assert!(service.resolve(&query("2024-06-01", "")).unwrap().is_empty());
        assert!(service.resolve(&query("  ", "  ")).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_slot_is_validation_error() {
        let service = service();
        assert!(service.resolve(&query("not-a-date", "18:00")).is_err());
        assert!(service.resolve(&query("2024-06-01", "6pm")).is_err());
    }

    #[test]
    fn test_booked_table_is_excluded() {
        let service = service();
        book(&service, "2024-06-01", "18:00", 1);

        let ids: Vec<u32> = service
            .resolve(&query("2024-06-01", "18:00"))
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![2]);

        // Other slots are unaffected
        assert_eq!(service.resolve(&query("2024-06-01", "19:00")).unwrap().len(), 2);
        assert_eq!(service.resolve(&query("2024-06-02", "18:00")).unwrap().len(), 2);
    }

    #[test]
    fn test_party_size_filters_capacity() {
        let service = service();
        let mut q = query("2024-06-01", "18:00");
        q.party_size = Some(3);

        let ids: Vec<u32> = service.resolve(&q).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_zero_party_size_means_unspecified() {
        let service = service();
        let mut q = query("2024-06-01", "18:00");
        q.party_size = Some(0);
        assert_eq!(service.resolve(&q).unwrap().len(), 2);
    }

    #[test]
    fn test_exclusion_frees_own_slot() {
        let service = service();
        let own = book(&service, "2024-06-01", "18:00", 1);

        let mut q = query("2024-06-01", "18:00");
        q.exclude_reservation = Some(own);

        let ids: Vec<u32> = service.resolve(&q).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_result_follows_catalog_order() {
        let service = service();
        let tables = service.resolve(&query("2024-06-01", "18:00")).unwrap();
        let ids: Vec<u32> = tables.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
