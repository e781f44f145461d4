//! Place types.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Error returned when creating an invalid place identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid place identifier: {reason}")]
pub struct InvalidPlaceId {
    reason: &'static str,
}

/// An opaque place identifier (e.g. `madrid-spain`).
///
/// Place identifiers are what boarding cards are chained on: the destination
/// of one card must carry the same identifier as the departure of the next.
/// The only validation is that they are non-empty and contain no whitespace.
///
/// # Examples
///
/// ```
/// use trip_sorter::domain::PlaceId;
///
/// let id = PlaceId::new("madrid-spain").unwrap();
/// assert_eq!(id.as_str(), "madrid-spain");
///
/// assert!(PlaceId::new("").is_err());
/// assert!(PlaceId::new("new york").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceId(String);

impl PlaceId {
    /// Create a place identifier.
    pub fn new(s: impl Into<String>) -> Result<Self, InvalidPlaceId> {
        let s = s.into();
        if s.is_empty() {
            return Err(InvalidPlaceId {
                reason: "cannot be empty",
            });
        }
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidPlaceId {
                reason: "cannot contain whitespace",
            });
        }
        Ok(PlaceId(s))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlaceId({})", self.0)
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Geographic position of a place, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A place a boarding card departs from or arrives at.
///
/// Two places are the same place when their identifiers match; the city
/// and country are display data only.
#[derive(Debug, Clone)]
pub struct Place {
    id: PlaceId,
    city: String,
    country: String,
    coordinates: Option<Coordinates>,
}

impl Place {
    /// Create a place without coordinates.
    pub fn new(id: PlaceId, city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id,
            city: city.into(),
            country: country.into(),
            coordinates: None,
        }
    }

    /// Attach coordinates to this place.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some(Coordinates {
            latitude,
            longitude,
        });
        self
    }

    pub fn id(&self) -> &PlaceId {
        &self.id
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }
}

impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Place {}

impl Hash for Place {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> PlaceId {
        PlaceId::new(s).unwrap()
    }

    #[test]
    fn new_valid_ids() {
        assert!(PlaceId::new("madrid-spain").is_ok());
        assert!(PlaceId::new("ny-usa").is_ok());
        assert!(PlaceId::new("000001").is_ok());
        assert!(PlaceId::new("x").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(PlaceId::new("").is_err());
    }

    #[test]
    fn reject_whitespace() {
        assert!(PlaceId::new("new york").is_err());
        assert!(PlaceId::new(" madrid").is_err());
        assert!(PlaceId::new("madrid\t").is_err());
    }

    #[test]
    fn display_and_debug() {
        let place_id = id("gerona-spain");
        assert_eq!(format!("{}", place_id), "gerona-spain");
        assert_eq!(format!("{:?}", place_id), "PlaceId(gerona-spain)");
    }

    #[test]
    fn places_compare_by_id_only() {
        let a = Place::new(id("stockholm-sweden"), "Stockholm", "Sweden");
        let b = Place::new(id("stockholm-sweden"), "Estocolmo", "Suecia");
        let c = Place::new(id("ny-usa"), "Stockholm", "Sweden");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn place_hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Place::new(id("madrid-spain"), "Madrid", "Spain"));
        assert!(set.contains(&Place::new(id("madrid-spain"), "", "")));
        assert!(!set.contains(&Place::new(id("barcelona-spain"), "Madrid", "Spain")));
    }

    #[test]
    fn place_coordinates() {
        let place = Place::new(id("barcelona-spain"), "Barcelona", "Spain");
        assert!(place.coordinates().is_none());

        let place = place.with_coordinates(41.38, 2.17);
        let coords = place.coordinates().unwrap();
        assert_eq!(coords.latitude, 41.38);
        assert_eq!(coords.longitude, 2.17);
    }

    #[test]
    fn place_display() {
        let place = Place::new(id("ny-usa"), "New York", "USA");
        assert_eq!(place.to_string(), "New York, USA");
    }
}
