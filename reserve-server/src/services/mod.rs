//! Engine services
//!
//! - [`AvailabilityService`] - which tables fit a slot and party size
//! - [`BookingService`] - reservation create/update/delete lifecycle
//! - [`filter`] - list filtering for presentation

pub mod availability;
pub mod booking;
pub mod filter;

pub use availability::{AvailabilityService, SlotQuery};
pub use booking::BookingService;
pub use filter::{ReservationFilter, filter_reservations};
