//! Reservation list filtering
//!
//! Answers "list reservations matching criteria" for presentation. All
//! bounds are inclusive and AND-combined; comparison is lexicographic on the
//! canonical zero-padded strings, which is chronological by construction.

use serde::Deserialize;
use shared::models::Reservation;

/// Optional date/time range bounds, as sent on the query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl ReservationFilter {
    /// A bound that is absent or blank imposes no constraint
    fn bound(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Self::bound(&self.start_date).is_none()
            && Self::bound(&self.end_date).is_none()
            && Self::bound(&self.start_time).is_none()
            && Self::bound(&self.end_time).is_none()
    }

    pub fn matches(&self, reservation: &Reservation) -> bool {
        if let Some(start) = Self::bound(&self.start_date)
            && reservation.date.as_str() < start
        {
            return false;
        }
        if let Some(end) = Self::bound(&self.end_date)
            && reservation.date.as_str() > end
        {
            return false;
        }
        if let Some(start) = Self::bound(&self.start_time)
            && reservation.time.as_str() < start
        {
            return false;
        }
        if let Some(end) = Self::bound(&self.end_time)
            && reservation.time.as_str() > end
        {
            return false;
        }
        true
    }
}

/// Return the reservations matching the filter, preserving input order
///
/// Never mutates the input; no matches is an empty vec, not an error.
pub fn filter_reservations(
    reservations: &[Reservation],
    filter: &ReservationFilter,
) -> Vec<Reservation> {
    reservations
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(id: u64, date: &str, time: &str) -> Reservation {
        Reservation {
            id,
            customer_name: "Ada".into(),
            customer_email: "ada@example.com".into(),
            date: date.into(),
            time: time.into(),
            party_size: 2,
            table_id: 1,
        }
    }

    fn three_days() -> Vec<Reservation> {
        vec![
            reservation(1, "2024-06-01", "18:00"),
            reservation(2, "2024-06-02", "19:00"),
            reservation(3, "2024-06-03", "20:00"),
        ]
    }

    #[test]
    fn test_start_date_keeps_later_reservations() {
        let filter = ReservationFilter {
            start_date: Some("2024-06-02".into()),
            ..Default::default()
        };
        let result = filter_reservations(&three_days(), &filter);
        let ids: Vec<u64> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = ReservationFilter {
            start_date: Some("2024-06-01".into()),
            end_date: Some("2024-06-03".into()),
            ..Default::default()
        };
        assert_eq!(filter_reservations(&three_days(), &filter).len(), 3);

        let filter = ReservationFilter {
            start_time: Some("19:00".into()),
            end_time: Some("19:00".into()),
            ..Default::default()
        };
        let result = filter_reservations(&three_days(), &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_bounds_combine_with_and() {
        let filter = ReservationFilter {
            start_date: Some("2024-06-02".into()),
            end_time: Some("19:30".into()),
            ..Default::default()
        };
        let result = filter_reservations(&three_days(), &filter);
        let ids: Vec<u64> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_absent_and_blank_bounds_are_identity() {
        let all = three_days();
        assert_eq!(filter_reservations(&all, &ReservationFilter::default()).len(), 3);

        let filter = ReservationFilter {
            start_date: Some("  ".into()),
            end_date: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert_eq!(filter_reservations(&all, &filter).len(), 3);
    }

    #[test]
    fn test_narrowing_never_grows_the_result() {
        let all = three_days();
        let wide = ReservationFilter {
            start_date: Some("2024-06-01".into()),
            end_date: Some("2024-06-03".into()),
            ..Default::default()
        };
        let narrow = ReservationFilter {
            start_date: Some("2024-06-02".into()),
            end_date: Some("2024-06-02".into()),
            ..Default::default()
        };
        assert!(filter_reservations(&all, &narrow).len() <= filter_reservations(&all, &wide).len());
    }

    #[test]
    fn test_empty_input_and_no_matches() {
        let filter = ReservationFilter {
            start_date: Some("2030-01-01".into()),
            ..Default::default()
        };
        assert!(filter_reservations(&[], &filter).is_empty());
        assert!(filter_reservations(&three_days(), &filter).is_empty());
    }
}
