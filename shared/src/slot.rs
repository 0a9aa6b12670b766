//! Booking slot parsing
//!
//! A slot is the `(date, time)` pair identifying a discrete booking window.
//! Dates are ISO 8601 `YYYY-MM-DD`, times 24-hour `HH:MM`, both venue-local
//! with no timezone. Parsing canonicalizes to zero-padded form so that
//! lexicographic comparison of the stored strings is chronological.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("Invalid date format (expected YYYY-MM-DD): '{0}'")]
    InvalidDate(String),

    #[error("Invalid time format (expected HH:MM): '{0}'")]
    InvalidTime(String),
}

/// A canonicalized booking slot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    pub date: String,
    pub time: String,
}

impl Slot {
    /// Parse and canonicalize a date/time pair
    pub fn parse(date: &str, time: &str) -> Result<Self, SlotError> {
        let date = parse_date(date)?;
        let time = parse_time(time)?;
        Ok(Self { date, time })
    }
}

/// Parse a calendar date, returning the canonical `YYYY-MM-DD` string
pub fn parse_date(value: &str) -> Result<String, SlotError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| SlotError::InvalidDate(value.to_string()))
}

/// Parse a time of day, returning the canonical `HH:MM` string
pub fn parse_time(value: &str) -> Result<String, SlotError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map(|t| t.format(TIME_FORMAT).to_string())
        .map_err(|_| SlotError::InvalidTime(value.to_string()))
}
