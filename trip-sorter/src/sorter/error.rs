//! Sorting error types.

/// Error from sorting a trip.
///
/// Apart from [`SortError::NoStartFound`], every variant means the segments
/// do not form a single simple chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// Every departure is also some segment's destination (closed loop)
    #[error("no segment starts the trip: every departure is also a destination")]
    NoStartFound,

    /// More than one segment departs from a place nothing arrives at
    #[error("trip has more than one start: {first} and {second}")]
    MultipleStarts { first: String, second: String },

    /// Two segments depart from the same place
    #[error("more than one segment departs from {0}")]
    DuplicateDeparture(String),

    /// Two segments arrive at the same place
    #[error("more than one segment arrives at {0}")]
    DuplicateDestination(String),

    /// The chain walk came back to a place it had already left
    #[error("trip revisits {0}")]
    RevisitedLocation(String),

    /// The chain from the start does not reach every segment
    #[error("trip is disconnected: chain reaches {reached} of {total} segments")]
    Disconnected { reached: usize, total: usize },

    /// Start position does not refer to a segment
    #[error("start position {position} is out of range for {len} segments")]
    StartOutOfRange { position: usize, len: usize },
}

impl SortError {
    /// Returns true if the error means the input is not a single simple chain.
    pub fn is_malformed_chain(&self) -> bool {
        !matches!(self, SortError::NoStartFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            SortError::NoStartFound.to_string(),
            "no segment starts the trip: every departure is also a destination"
        );

        let err = SortError::MultipleStarts {
            first: "A".into(),
            second: "X".into(),
        };
        assert_eq!(err.to_string(), "trip has more than one start: A and X");

        let err = SortError::DuplicateDeparture("madrid-spain".into());
        assert_eq!(err.to_string(), "more than one segment departs from madrid-spain");

        let err = SortError::DuplicateDestination("ny-usa".into());
        assert_eq!(err.to_string(), "more than one segment arrives at ny-usa");

        let err = SortError::RevisitedLocation("X".into());
        assert_eq!(err.to_string(), "trip revisits X");

        let err = SortError::Disconnected {
            reached: 1,
            total: 3,
        };
        assert_eq!(
            err.to_string(),
            "trip is disconnected: chain reaches 1 of 3 segments"
        );

        let err = SortError::StartOutOfRange {
            position: 4,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "start position 4 is out of range for 2 segments"
        );
    }

    #[test]
    fn malformed_chain_classification() {
        assert!(!SortError::NoStartFound.is_malformed_chain());
        assert!(SortError::DuplicateDeparture("A".into()).is_malformed_chain());
        assert!(SortError::RevisitedLocation("A".into()).is_malformed_chain());
        assert!(
            SortError::Disconnected {
                reached: 1,
                total: 2
            }
            .is_malformed_chain()
        );
    }
}
