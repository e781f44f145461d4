//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::BoardingCard;
use crate::sorter::{ARRIVAL_LINE, Trip};

/// Home page describing the API.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub max_cards: usize,
}

/// Sorted itinerary fragment (AJAX response, no base.html).
#[derive(Template)]
#[template(path = "itinerary.html")]
pub struct ItineraryTemplate {
    pub legs: Vec<LegView>,
    pub arrival: &'static str,
}

impl ItineraryTemplate {
    /// Create from a sorted trip.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            legs: trip
                .cards()
                .iter()
                .enumerate()
                .map(|(i, card)| LegView::from_card(i + 1, card))
                .collect(),
            arrival: ARRIVAL_LINE,
        }
    }
}

/// One leg of the itinerary, ready for display.
#[derive(Debug, Clone)]
pub struct LegView {
    pub step: usize,
    pub card_id: String,
    pub kind: String,
    pub from: String,
    pub to: String,
    pub instruction: String,
    /// "10:00 → 11:15", or empty when the card carries no schedule
    pub schedule: String,
}

impl LegView {
    /// Create from a domain boarding card at travel position `step` (1-based).
    pub fn from_card(step: usize, card: &BoardingCard) -> Self {
        let schedule = match (card.departure_time(), card.arrival_time()) {
            (Some(dep), Some(arr)) => format!("{} → {}", dep.format("%H:%M"), arr.format("%H:%M")),
            _ => String::new(),
        };

        Self {
            step,
            card_id: card.id().to_string(),
            kind: card.transport().kind().to_string(),
            from: card.departure().city().to_string(),
            to: card.destination().city().to_string(),
            instruction: card.describe(),
            schedule,
        }
    }

    /// Whether a schedule is known for this leg.
    pub fn has_schedule(&self) -> bool {
        !self.schedule.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CardId, Place, PlaceId, Transport};
    use crate::sample::sample_trip;
    use chrono::NaiveDate;

    fn sorted_sample() -> Trip {
        let mut trip = Trip::new(sample_trip());
        trip.sort().unwrap();
        trip
    }

    #[test]
    fn leg_view_without_schedule() {
        let trip = sorted_sample();
        let view = LegView::from_card(1, &trip.cards()[0]);

        assert_eq!(view.step, 1);
        assert_eq!(view.card_id, "001");
        assert_eq!(view.kind, "Train");
        assert_eq!(view.from, "Madrid");
        assert_eq!(view.to, "Barcelona");
        assert!(!view.has_schedule());
    }

    #[test]
    fn leg_view_with_schedule() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let card = BoardingCard::new(
            CardId::new("1").unwrap(),
            Place::new(PlaceId::new("a").unwrap(), "A", "X"),
            Place::new(PlaceId::new("b").unwrap(), "B", "X"),
            Transport::Bus,
        )
        .unwrap()
        .with_schedule(
            date.and_hms_opt(10, 0, 0).unwrap(),
            date.and_hms_opt(11, 15, 0).unwrap(),
        )
        .unwrap();

        let view = LegView::from_card(2, &card);
        assert!(view.has_schedule());
        assert_eq!(view.schedule, "10:00 → 11:15");
    }

    #[test]
    fn itinerary_template_renders_in_order() {
        let html = ItineraryTemplate::from_trip(&sorted_sample())
            .render()
            .unwrap();

        let madrid = html.find("Take train 78A from Madrid").unwrap();
        let bus = html.find("Take the airport bus from Barcelona").unwrap();
        let new_york = html.find("take flight SK22 to New York").unwrap();
        assert!(madrid < bus && bus < new_york);
        assert!(html.contains(ARRIVAL_LINE));
    }

    #[test]
    fn index_template_renders() {
        let html = IndexTemplate { max_cards: 42 }.render().unwrap();
        assert!(html.contains("/trip/sort"));
        assert!(html.contains("42"));
    }
}
