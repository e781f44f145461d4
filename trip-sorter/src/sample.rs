//! Sample trip data.
//!
//! A small trip across Europe and the Atlantic, used by the `/trip/sample`
//! endpoint and in tests. The cards are deliberately out of order.

use std::collections::HashMap;

use crate::domain::{BoardingCard, CardId, Place, PlaceId, Transport};

/// Builder for assembling a set of boarding cards from string data.
///
/// Places are registered once and referred to by identifier. Entries that
/// fail validation (unknown place, empty identifier, same endpoints) are
/// skipped.
#[derive(Debug, Default)]
pub struct TripBuilder {
    places: HashMap<String, Place>,
    cards: Vec<BoardingCard>,
}

impl TripBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a place.
    pub fn place(mut self, id: &str, city: &str, country: &str) -> Self {
        if let Ok(place_id) = PlaceId::new(id) {
            self.places
                .insert(id.to_string(), Place::new(place_id, city, country));
        }
        self
    }

    /// Add a card between two registered places.
    pub fn card(
        mut self,
        id: &str,
        from: &str,
        to: &str,
        transport: Transport,
        seat: Option<&str>,
    ) -> Self {
        let (Some(from), Some(to)) = (self.places.get(from), self.places.get(to)) else {
            return self;
        };
        let Ok(card_id) = CardId::new(id) else {
            return self;
        };
        if let Ok(card) = BoardingCard::new(card_id, from.clone(), to.clone(), transport) {
            self.cards.push(match seat {
                Some(seat) => card.with_seat(seat),
                None => card,
            });
        }
        self
    }

    /// Build the cards, in the order they were added.
    pub fn build(self) -> Vec<BoardingCard> {
        self.cards
    }
}

/// The sample trip: Madrid to New York via Barcelona, Gerona and Stockholm.
///
/// Cards come back in the scrambled order a traveller might pull them out
/// of a pocket.
pub fn sample_trip() -> Vec<BoardingCard> {
    TripBuilder::new()
        .place("madrid-spain", "Madrid", "Spain")
        .place("barcelona-spain", "Barcelona", "Spain")
        .place("geronaairport-spain", "Gerona", "Spain")
        .place("stockholm-sweden", "Stockholm", "Sweden")
        .place("ny-usa", "New York", "USA")
        .card(
            "004",
            "stockholm-sweden",
            "ny-usa",
            Transport::aeroplane("SK22", "22", None),
            Some("7B"),
        )
        .card(
            "001",
            "madrid-spain",
            "barcelona-spain",
            Transport::train("78A"),
            Some("45B"),
        )
        .card(
            "003",
            "geronaairport-spain",
            "stockholm-sweden",
            Transport::aeroplane("SK455", "45B", Some("344".to_string())),
            Some("3A"),
        )
        .card(
            "002",
            "barcelona-spain",
            "geronaairport-spain",
            Transport::Bus,
            None,
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_all_cards_scrambled() {
        let cards = sample_trip();
        let ids: Vec<_> = cards.iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, ["004", "001", "003", "002"]);
    }

    #[test]
    fn sample_card_details() {
        let cards = sample_trip();

        let bus = &cards[3];
        assert_eq!(bus.departure().city(), "Barcelona");
        assert_eq!(bus.destination().city(), "Gerona");
        assert!(bus.seat().is_none());

        let flight = &cards[2];
        assert_eq!(
            flight.transport(),
            &Transport::aeroplane("SK455", "45B", Some("344".to_string()))
        );
        assert_eq!(flight.seat(), Some("3A"));
    }

    #[test]
    fn builder_skips_unknown_places() {
        let cards = TripBuilder::new()
            .place("a", "A", "X")
            .card("1", "a", "b", Transport::Bus, None)
            .build();
        assert!(cards.is_empty());
    }

    #[test]
    fn builder_skips_invalid_entries() {
        let cards = TripBuilder::new()
            .place("", "Nowhere", "X")
            .place("a", "A", "X")
            .place("b", "B", "X")
            .card("", "a", "b", Transport::Bus, None)
            .card("1", "a", "a", Transport::Bus, None)
            .card("2", "a", "b", Transport::Bus, Some("9"))
            .build();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id().as_str(), "2");
        assert_eq!(cards[0].seat(), Some("9"));
    }
}
