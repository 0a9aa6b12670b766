//! Shared types for the reservation stack
//!
//! Domain models and wire formats used by the server and any client:
//!
//! - [`models`] - Reservation and dining table entities
//! - [`slot`] - Date/time slot parsing and canonicalization
//! - [`response`] - Unified API response envelope

pub mod models;
pub mod response;
pub mod slot;

pub use models::{DiningTable, Reservation, ReservationDraft};
pub use response::{API_CODE_SUCCESS, ApiResponse};
pub use slot::{Slot, SlotError};
