//! Domain models
//!
//! Wire shapes follow the public API: reservation payloads are camelCase
//! (`customerName`, `partySize`, ...), table payloads use `table_id` and
//! `capacity` keys.

mod reservation;
mod table;

pub use reservation::{Reservation, ReservationDraft};
pub use table::DiningTable;
