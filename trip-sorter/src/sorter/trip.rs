//! Trip aggregate.
//!
//! A `Trip` owns a traveller's boarding cards and knows how to put them in
//! order and read them back as travel instructions.

use crate::domain::{BoardingCard, Place};

use super::error::SortError;
use super::itinerary::Itinerary;
use super::strategy::{ChainSorter, SortStrategy};

/// Closing line of the travel instructions.
pub const ARRIVAL_LINE: &str = "You have arrived at your final destination.";

/// A set of boarding cards making up one trip.
#[derive(Debug, Clone, Default)]
pub struct Trip {
    cards: Vec<BoardingCard>,
}

impl Trip {
    /// Create a trip from cards in any order.
    pub fn new(cards: Vec<BoardingCard>) -> Self {
        Self { cards }
    }

    /// Returns the cards in their current order.
    pub fn cards(&self) -> &[BoardingCard] {
        &self.cards
    }

    /// Consumes the trip and returns its cards.
    pub fn into_cards(self) -> Vec<BoardingCard> {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sort the cards in place with the default [`ChainSorter`].
    pub fn sort(&mut self) -> Result<(), SortError> {
        self.sort_with(&ChainSorter)
    }

    /// Sort the cards in place with `strategy`.
    ///
    /// On error the cards are left in their previous order.
    ///
    /// # Errors
    ///
    /// Returns whatever the strategy reports. A strategy whose itinerary
    /// does not place every card exactly once (missing, repeated or out of
    /// range positions) is reported as [`SortError::Disconnected`], with
    /// `reached` counting the distinct cards it placed.
    pub fn sort_with<St>(&mut self, strategy: &St) -> Result<(), SortError>
    where
        St: SortStrategy<BoardingCard> + ?Sized,
    {
        let order = strategy.sort_trip(&self.cards)?.into_order();
        let total = self.cards.len();

        let mut placed = vec![false; total];
        let reached = order
            .iter()
            .filter(|&&idx| idx < total && !std::mem::replace(&mut placed[idx], true))
            .count();
        if reached != total || order.len() != total {
            return Err(SortError::Disconnected { reached, total });
        }

        let mut slots: Vec<Option<BoardingCard>> =
            std::mem::take(&mut self.cards).into_iter().map(Some).collect();
        self.cards = order.into_iter().filter_map(|idx| slots[idx].take()).collect();
        Ok(())
    }

    /// Sort without reordering the owned cards.
    pub fn itinerary_with<'a, St>(
        &'a self,
        strategy: &St,
    ) -> Result<Itinerary<'a, BoardingCard>, SortError>
    where
        St: SortStrategy<BoardingCard> + ?Sized,
    {
        strategy.sort_trip(&self.cards)
    }

    /// Where the trip starts, in its current order.
    pub fn origin(&self) -> Option<&Place> {
        self.cards.first().map(BoardingCard::departure)
    }

    /// Where the trip ends, in its current order.
    pub fn destination(&self) -> Option<&Place> {
        self.cards.last().map(BoardingCard::destination)
    }

    /// One boarding instruction per card, in the current order.
    pub fn instructions(&self) -> Vec<String> {
        self.cards.iter().map(BoardingCard::describe).collect()
    }

    /// Renders the travel instructions, one card per line, followed by
    /// [`ARRIVAL_LINE`].
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.instructions() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(ARRIVAL_LINE);
        out
    }
}

impl From<Vec<BoardingCard>> for Trip {
    fn from(cards: Vec<BoardingCard>) -> Self {
        Self::new(cards)
    }
}
