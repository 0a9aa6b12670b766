//! Reservation Model

use serde::{Deserialize, Serialize};

/// A stored reservation
///
/// `id` is assigned by the store from a monotonic sequence and is never
/// reassigned, even after the reservation is deleted. `date` and `time` are
/// kept in canonical zero-padded form (`YYYY-MM-DD` / `HH:MM`, venue-local).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: u64,
    pub customer_name: String,
    pub customer_email: String,
    pub date: String,
    pub time: String,
    pub party_size: u32,
    pub table_id: u32,
}

/// Create/update payload: every mutable field of a reservation
///
/// Fields default so that a partial body surfaces as a validation error
/// instead of a deserialization failure, keeping the error message readable
/// for the form that submitted it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub party_size: u32,
    #[serde(default)]
    pub table_id: u32,
}

impl Reservation {
    /// Materialize a draft under the given id
    pub fn from_draft(id: u64, draft: ReservationDraft) -> Self {
        Self {
            id,
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            date: draft.date,
            time: draft.time,
            party_size: draft.party_size,
            table_id: draft.table_id,
        }
    }

    /// The mutable-field view of this reservation
    pub fn to_draft(&self) -> ReservationDraft {
        ReservationDraft {
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            party_size: self.party_size,
            table_id: self.table_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_wire_shape_is_camel_case() {
        let reservation = Reservation {
            id: 7,
            customer_name: "Ada".into(),
            customer_email: "ada@example.com".into(),
            date: "2024-06-01".into(),
            time: "18:00".into(),
            party_size: 2,
            table_id: 1,
        };
        let json = serde_json::to_value(&reservation).expect("serialize reservation");
        assert_eq!(json["customerName"], "Ada");
        assert_eq!(json["customerEmail"], "ada@example.com");
        assert_eq!(json["partySize"], 2);
        assert_eq!(json["tableId"], 1);
    }

    #[test]
    fn test_draft_accepts_partial_body() {
        let draft: ReservationDraft =
            serde_json::from_str(r#"{"customerName": "Ada"}"#).expect("deserialize draft");
        assert_eq!(draft.customer_name, "Ada");
        assert!(draft.date.is_empty());
        assert_eq!(draft.party_size, 0);
    }

    #[test]
    fn test_draft_round_trip_through_reservation() {
        let draft = ReservationDraft {
            customer_name: "Grace".into(),
            customer_email: "grace@example.com".into(),
            date: "2024-06-02".into(),
            time: "19:30".into(),
            party_size: 4,
            table_id: 2,
        };
        let reservation = Reservation::from_draft(3, draft.clone());
        assert_eq!(reservation.id, 3);
        assert_eq!(reservation.to_draft(), draft);
    }
}
