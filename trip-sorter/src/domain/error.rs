//! Domain error types.
//!
//! These errors represent validation failures when building boarding cards.
//! They are distinct from sorting and HTTP errors.

use chrono::NaiveDateTime;

use super::{InvalidCardId, InvalidPlaceId, PlaceId};

/// Domain-level errors for boarding card construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A card cannot depart from and arrive at the same place
    #[error("card departs from and arrives at the same place: {0}")]
    SameEndpoints(PlaceId),

    /// Scheduled arrival is earlier than scheduled departure
    #[error("arrival {arrival} is before departure {departure}")]
    ArrivalBeforeDeparture {
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    },

    /// Only one of departure and arrival time was given
    #[error("departure and arrival times must be given together")]
    IncompleteSchedule,

    /// Invalid card identifier
    #[error(transparent)]
    Card(#[from] InvalidCardId),

    /// Invalid place identifier
    #[error(transparent)]
    Place(#[from] InvalidPlaceId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardId;
    use chrono::NaiveDate;

    #[test]
    fn error_display() {
        let place = PlaceId::new("madrid-spain").unwrap();
        let err = DomainError::SameEndpoints(place);
        assert_eq!(
            err.to_string(),
            "card departs from and arrives at the same place: madrid-spain"
        );

        let departure = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let arrival = departure - chrono::Duration::minutes(5);
        let err = DomainError::ArrivalBeforeDeparture { departure, arrival };
        assert_eq!(
            err.to_string(),
            "arrival 2024-03-15 09:55:00 is before departure 2024-03-15 10:00:00"
        );

        assert_eq!(
            DomainError::IncompleteSchedule.to_string(),
            "departure and arrival times must be given together"
        );

        let err: DomainError = CardId::new("").unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "invalid card identifier: card identifier cannot be empty"
        );

        let err: DomainError = PlaceId::new("").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid place identifier: cannot be empty");
    }
}
