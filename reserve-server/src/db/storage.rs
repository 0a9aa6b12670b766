//! redb-based storage layer for reservations
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `reservations` | `id` | JSON `Reservation` | Record store |
//! | `slot_index` | `(date, time, table_id)` | `id` | Slot occupancy (unique) |
//! | `sequence` | `"reservation_seq"` | `u64` | Monotonic id counter |
//!
//! # Consistency
//!
//! The slot index is the double-booking guard: a slot key may hold at most
//! one reservation id, and the occupancy check runs inside the same write
//! transaction that commits the record. redb serializes write transactions,
//! so two concurrent submissions for the same `(table_id, date, time)` can
//! never both commit.
//!
//! The sequence counter only moves forward. Deleting a reservation removes
//! the record and its index entry but leaves the counter alone, so ids
//! retire permanently.
//!
//! Callers are expected to pass canonical zero-padded `date`/`time` strings
//! (see `shared::slot`); the index key is a plain byte comparison.

use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use shared::models::{Reservation, ReservationDraft};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Record store: key = reservation id, value = JSON-serialized Reservation
const RESERVATIONS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("reservations");

/// Slot occupancy index: key = (date, time, table_id), value = reservation id
const SLOT_INDEX_TABLE: TableDefinition<(&str, &str, u32), u64> =
    TableDefinition::new("slot_index");

/// Sequence counter table: key = counter name, value = last assigned id
const SEQUENCE_TABLE: TableDefinition<&str, u64> = TableDefinition::new("sequence");

const RESERVATION_SEQ_KEY: &str = "reservation_seq";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Reservation not found: {0}")]
    NotFound(u64),

    #[error("Table {table_id} is already booked for {date} {time}")]
    SlotTaken {
        table_id: u32,
        date: String,
        time: String,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Reservation store backed by redb
///
/// Commits are durable as soon as `commit()` returns (copy-on-write with an
/// atomic pointer swap), so the database file stays consistent across
/// unexpected shutdowns.
#[derive(Clone)]
pub struct ReservationStorage {
    db: Arc<Database>,
}

impl ReservationStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::initialize(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::initialize(db)
    }

    fn initialize(db: Database) -> StorageResult<Self> {
        // Create tables and the counter if they don't exist
        let txn = db.begin_write()?;
        {
            let _ = txn.open_table(RESERVATIONS_TABLE)?;
            let _ = txn.open_table(SLOT_INDEX_TABLE)?;
            let mut seq = txn.open_table(SEQUENCE_TABLE)?;
            if seq.get(RESERVATION_SEQ_KEY)?.is_none() {
                seq.insert(RESERVATION_SEQ_KEY, 0u64)?;
            }
        }
        txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Mutations ==========

    /// Persist a new reservation under a fresh id
    ///
    /// Fails with [`StorageError::SlotTaken`] if another reservation already
    /// occupies `(date, time, table_id)`. The check and the insert share one
    /// write transaction.
    pub fn create(&self, draft: &ReservationDraft) -> StorageResult<Reservation> {
        let txn = self.db.begin_write()?;
        let reservation;
        {
            let mut slots = txn.open_table(SLOT_INDEX_TABLE)?;
            let slot_key = (draft.date.as_str(), draft.time.as_str(), draft.table_id);
            if slots.get(slot_key)?.is_some() {
                // Dropping the transaction aborts it
                return Err(StorageError::SlotTaken {
                    table_id: draft.table_id,
                    date: draft.date.clone(),
                    time: draft.time.clone(),
                });
            }

            let mut seq = txn.open_table(SEQUENCE_TABLE)?;
            let id = seq.get(RESERVATION_SEQ_KEY)?.map(|g| g.value()).unwrap_or(0) + 1;
            seq.insert(RESERVATION_SEQ_KEY, id)?;

            reservation = Reservation::from_draft(id, draft.clone());
            let mut records = txn.open_table(RESERVATIONS_TABLE)?;
            records.insert(id, serde_json::to_vec(&reservation)?.as_slice())?;
            slots.insert(slot_key, id)?;
        }
        txn.commit()?;

        tracing::debug!(id = reservation.id, table_id = reservation.table_id,
            date = %reservation.date, time = %reservation.time, "reservation created");
        Ok(reservation)
    }

    /// Replace every mutable field of an existing reservation
    ///
    /// The slot check excludes the reservation itself, so keeping (or only
    /// partially changing) its current slot never self-conflicts. All fields
    /// are swapped atomically; readers see either the old or the new record.
    pub fn update(&self, id: u64, draft: &ReservationDraft) -> StorageResult<Reservation> {
        let txn = self.db.begin_write()?;
        let updated;
        {
            let mut records = txn.open_table(RESERVATIONS_TABLE)?;
            let current: Reservation = match records.get(id)? {
                Some(guard) => serde_json::from_slice(guard.value())?,
                None => return Err(StorageError::NotFound(id)),
            };

            let mut slots = txn.open_table(SLOT_INDEX_TABLE)?;
            let new_key = (draft.date.as_str(), draft.time.as_str(), draft.table_id);
            let occupant = slots.get(new_key)?.map(|g| g.value());
            if occupant.is_some_and(|other| other != id) {
                return Err(StorageError::SlotTaken {
                    table_id: draft.table_id,
                    date: draft.date.clone(),
                    time: draft.time.clone(),
                });
            }

            slots.remove((
                current.date.as_str(),
                current.time.as_str(),
                current.table_id,
            ))?;
            slots.insert(new_key, id)?;

            updated = Reservation::from_draft(id, draft.clone());
            records.insert(id, serde_json::to_vec(&updated)?.as_slice())?;
        }
        txn.commit()?;

        tracing::debug!(id, "reservation updated");
        Ok(updated)
    }

    /// Remove a reservation permanently
    ///
    /// The id retires with it; the sequence counter never steps back.
    pub fn delete(&self, id: u64) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut records = txn.open_table(RESERVATIONS_TABLE)?;
            let existing: Reservation = match records.remove(id)? {
                Some(guard) => serde_json::from_slice(guard.value())?,
                None => return Err(StorageError::NotFound(id)),
            };

            let mut slots = txn.open_table(SLOT_INDEX_TABLE)?;
            slots.remove((
                existing.date.as_str(),
                existing.time.as_str(),
                existing.table_id,
            ))?;
        }
        txn.commit()?;

        tracing::debug!(id, "reservation deleted");
        Ok(())
    }

    // ========== Reads ==========

    /// Fetch a single reservation
    pub fn get(&self, id: u64) -> StorageResult<Option<Reservation>> {
        let read = self.db.begin_read()?;
        let records = read.open_table(RESERVATIONS_TABLE)?;
        match records.get(id)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    /// Point-in-time snapshot of all reservations, in id order
    pub fn list(&self) -> StorageResult<Vec<Reservation>> {
        let read = self.db.begin_read()?;
        let records = read.open_table(RESERVATIONS_TABLE)?;
        let mut out = Vec::new();
        for entry in records.iter()? {
            let (_key, value) = entry?;
            out.push(serde_json::from_slice(value.value())?);
        }
        Ok(out)
    }

    /// Table ids booked for the exact `(date, time)` slot
    ///
    /// `exclude` drops one reservation id from the result, used when
    /// re-resolving availability for an in-progress edit.
    pub fn booked_tables(
        &self,
        date: &str,
        time: &str,
        exclude: Option<u64>,
    ) -> StorageResult<Vec<u32>> {
        let read = self.db.begin_read()?;
        let slots = read.open_table(SLOT_INDEX_TABLE)?;

        let mut out = Vec::new();
        let start = (date, time, 0u32);
        let end = (date, time, u32::MAX);
        for entry in slots.range(start..=end)? {
            let (key, value) = entry?;
            if exclude == Some(value.value()) {
                continue;
            }
            out.push(key.value().2);
        }
        Ok(out)
    }

    /// Number of stored reservations
    pub fn count(&self) -> StorageResult<u64> {
        let read = self.db.begin_read()?;
        let records = read.open_table(RESERVATIONS_TABLE)?;
        Ok(records.len()?)
    }
}
