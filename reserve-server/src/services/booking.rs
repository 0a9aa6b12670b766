//! Reservation Lifecycle Manager
//!
//! Orchestrates create/update/delete against the reservation store. All
//! field validation and the capacity rule live here; the slot-uniqueness
//! rule lives in the store so the conflict check and the commit stay one
//! atomic unit. The table catalog is never mutated.

use std::sync::Arc;

use shared::Slot;
use shared::models::{Reservation, ReservationDraft};
use validator::ValidateEmail;

use crate::db::{ReservationStorage, TableCatalog};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PARTY_SIZE, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct BookingService {
    storage: ReservationStorage,
    catalog: Arc<TableCatalog>,
}

impl BookingService {
    pub fn new(storage: ReservationStorage, catalog: Arc<TableCatalog>) -> Self {
        Self { storage, catalog }
    }

    /// Create a reservation from a validated draft
    ///
    /// Returns the stored record; refreshing any list view is the caller's
    /// responsibility.
    pub fn create(&self, draft: ReservationDraft) -> AppResult<Reservation> {
        let draft = self.validate(draft)?;
        Ok(self.storage.create(&draft)?)
    }

    /// Replace all mutable fields of an existing reservation
    ///
    /// Re-validates against the updated values; the reservation's own slot
    /// is excluded from the conflict check.
    pub fn update(&self, id: u64, draft: ReservationDraft) -> AppResult<Reservation> {
        let draft = self.validate(draft)?;
        Ok(self.storage.update(id, &draft)?)
    }

    /// Delete a reservation permanently
    pub fn remove(&self, id: u64) -> AppResult<()> {
        Ok(self.storage.delete(id)?)
    }

    pub fn get(&self, id: u64) -> AppResult<Reservation> {
        self.storage
            .get(id)?
            .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))
    }

    pub fn list(&self) -> AppResult<Vec<Reservation>> {
        Ok(self.storage.list()?)
    }

    /// Field validation shared by create and update
    ///
    /// Returns the draft in canonical form: trimmed name/email, zero-padded
    /// date and time.
    fn validate(&self, mut draft: ReservationDraft) -> AppResult<ReservationDraft> {
        validate_required_text(&draft.customer_name, "customerName", MAX_NAME_LEN)?;
        validate_required_text(&draft.customer_email, "customerEmail", MAX_EMAIL_LEN)?;

        draft.customer_name = draft.customer_name.trim().to_string();
        draft.customer_email = draft.customer_email.trim().to_string();
        if !draft.customer_email.validate_email() {
            return Err(AppError::validation(format!(
                "customerEmail '{}' is not a valid email address",
                draft.customer_email
            )));
        }

        let slot = Slot::parse(&draft.date, &draft.time)?;
        draft.date = slot.date;
        draft.time = slot.time;

        if draft.party_size == 0 {
            return Err(AppError::validation("partySize must be a positive number"));
        }
        if draft.party_size > MAX_PARTY_SIZE {
            return Err(AppError::validation(format!(
                "partySize {} is not plausible (max {})",
                draft.party_size, MAX_PARTY_SIZE
            )));
        }

        let table = self.catalog.by_id(draft.table_id).ok_or_else(|| {
            AppError::validation(format!("Table {} does not exist", draft.table_id))
        })?;
        if draft.party_size > table.capacity {
            return Err(AppError::capacity(format!(
                "Party of {} exceeds table {} capacity of {}",
                draft.party_size, table.id, table.capacity
            )));
        }

        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DiningTable;

    // Catalog: T1 seats 2, T2 seats 4
    fn service() -> BookingService {
        let storage = ReservationStorage::open_in_memory().unwrap();
        let catalog = Arc::new(
            TableCatalog::from_tables(vec![
                DiningTable::new(1, 2, "Window"),
                DiningTable::new(2, 4, "Center"),
            ])
            .unwrap(),
        );
        BookingService::new(storage, catalog)
    }

    fn draft(date: &str, time: &str, party_size: u32, table_id: u32) -> ReservationDraft {
        ReservationDraft {
            customer_name: "Ada Lovelace".into(),
            customer_email: "ada@example.com".into(),
            date: date.into(),
            time: time.into(),
            party_size,
            table_id,
        }
    }

    #[test]
    fn test_create_then_conflict_on_same_slot() {
        let service = service();
        let created = service.create(draft("2024-06-01", "18:00", 2, 1)).unwrap();
        assert_eq!(created.table_id, 1);

        // Same slot, same table: conflict even for a smaller party
        let err = service.create(draft("2024-06-01", "18:00", 1, 1)).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_party_larger_than_table() {
        let service = service();
        let err = service.create(draft("2024-06-01", "18:00", 5, 2)).unwrap_err();
        match err {
            AppError::Capacity(msg) => assert!(msg.contains("capacity of 4")),
            other => panic!("expected capacity error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_table_is_validation_error() {
        let service = service();
        let err = service.create(draft("2024-06-01", "18:00", 2, 99)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_field_validation() {
        let service = service();

        let mut d = draft("2024-06-01", "18:00", 2, 1);
        d.customer_name = "  ".into();
        assert!(matches!(service.create(d).unwrap_err(), AppError::Validation(_)));

        let mut d = draft("2024-06-01", "18:00", 2, 1);
        d.customer_email = "not-an-email".into();
        assert!(matches!(service.create(d).unwrap_err(), AppError::Validation(_)));

        let d = draft("tomorrow", "18:00", 2, 1);
        assert!(matches!(service.create(d).unwrap_err(), AppError::Validation(_)));

        let d = draft("2024-06-01", "18:00", 0, 1);
        assert!(matches!(service.create(d).unwrap_err(), AppError::Validation(_)));
    }

    #[test]
    fn test_create_canonicalizes_slot_and_trims() {
        let service = service();
        let mut d = draft("2024-6-1", "8:00", 2, 1);
        d.customer_name = " Ada Lovelace ".into();
        let created = service.create(d).unwrap();
        assert_eq!(created.date, "2024-06-01");
        assert_eq!(created.time, "08:00");
        assert_eq!(created.customer_name, "Ada Lovelace");
    }

    #[test]
    fn test_update_round_trip() {
        let service = service();
        let created = service.create(draft("2024-06-01", "18:00", 2, 1)).unwrap();

        let mut replacement = draft("2024-06-03", "20:15", 4, 2);
        replacement.customer_name = "Grace Hopper".into();
        replacement.customer_email = "grace@example.com".into();

        let updated = service.update(created.id, replacement.clone()).unwrap();
        assert_eq!(updated.id, created.id);

        // get() after update returns the draft in every mutable field
        let fetched = service.get(created.id).unwrap();
        assert_eq!(fetched.to_draft(), replacement);
    }

    #[test]
    fn test_update_same_slot_does_not_self_conflict() {
        let service = service();
        let created = service.create(draft("2024-06-01", "18:00", 2, 1)).unwrap();
        let updated = service.update(created.id, draft("2024-06-01", "18:00", 1, 1)).unwrap();
        assert_eq!(updated.party_size, 1);
    }

    #[test]
    fn test_update_missing_and_invalid() {
        let service = service();
        assert!(matches!(
            service.update(42, draft("2024-06-01", "18:00", 2, 1)).unwrap_err(),
            AppError::NotFound(_)
        ));

        // Validation runs against the updated values
        let created = service.create(draft("2024-06-01", "18:00", 2, 1)).unwrap();
        assert!(matches!(
            service.update(created.id, draft("2024-06-01", "18:00", 5, 2)).unwrap_err(),
            AppError::Capacity(_)
        ));
    }

    #[test]
    fn test_remove_is_not_idempotent() {
        let service = service();
        let created = service.create(draft("2024-06-01", "18:00", 2, 1)).unwrap();

        service.remove(created.id).unwrap();
        assert!(matches!(service.remove(created.id).unwrap_err(), AppError::NotFound(_)));
        assert!(matches!(service.remove(999).unwrap_err(), AppError::NotFound(_)));
    }

    #[test]
    fn test_party_size_never_exceeds_capacity_across_lifecycle() {
        let service = service();
        service.create(draft("2024-06-01", "18:00", 2, 1)).unwrap();
        service.create(draft("2024-06-01", "18:00", 4, 2)).unwrap();
        service.create(draft("2024-06-01", "19:00", 3, 2)).unwrap();

        let catalog = TableCatalog::from_tables(vec![
            DiningTable::new(1, 2, "Window"),
            DiningTable::new(2, 4, "Center"),
        ])
        .unwrap();
        for reservation in service.list().unwrap() {
            let table = catalog.by_id(reservation.table_id).unwrap();
            assert!(reservation.party_size <= table.capacity);
        }
    }
}
