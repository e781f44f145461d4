//! Boarding card identifier type.

use std::fmt;

/// Error returned when creating an invalid card identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid card identifier: {reason}")]
pub struct InvalidCardId {
    reason: &'static str,
}

/// A boarding card identifier, as printed on the card (e.g. `001`).
///
/// Card identifiers are opaque. They identify a card in results and logs
/// and play no part in ordering a trip.
///
/// # Examples
///
/// ```
/// use trip_sorter::domain::CardId;
///
/// let id = CardId::new("004").unwrap();
/// assert_eq!(id.as_str(), "004");
///
/// assert!(CardId::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CardId(String);

impl CardId {
    /// Create a card identifier.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: impl Into<String>) -> Result<Self, InvalidCardId> {
        let s = s.into();
        if s.is_empty() {
            return Err(InvalidCardId {
                reason: "card identifier cannot be empty",
            });
        }
        Ok(CardId(s))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the CardId and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardId({})", self.0)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
