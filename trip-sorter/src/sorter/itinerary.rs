//! Itinerary type.
//!
//! An `Itinerary` is the output of sorting: the caller's own segments, in
//! travel order. It borrows rather than copies, so the segments in an
//! itinerary are the very segments that were passed in.

use super::segment::Segment;

/// An ordered view over a slice of segments.
///
/// # Invariants (for itineraries produced by a sorter)
///
/// - Every position of the underlying slice appears exactly once
/// - Consecutive segments connect (destination of one = departure of next)
#[derive(Debug)]
pub struct Itinerary<'a, S> {
    segments: &'a [S],
    order: Vec<usize>,
}

impl<'a, S> Clone for Itinerary<'a, S> {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments,
            order: self.order.clone(),
        }
    }
}

impl<'a, S> Itinerary<'a, S> {
    /// Creates an itinerary visiting `segments` in the given order of positions.
    pub(crate) fn new(segments: &'a [S], order: Vec<usize>) -> Self {
        Self { segments, order }
    }

    /// Creates an empty itinerary.
    pub fn empty(segments: &'a [S]) -> Self {
        Self {
            segments,
            order: Vec::new(),
        }
    }

    /// Returns the number of segments in travel order.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the itinerary has no segments.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the segment at travel position `i`.
    pub fn get(&self, i: usize) -> Option<&'a S> {
        self.order.get(i).map(|&idx| &self.segments[idx])
    }

    /// Returns the first segment of the trip.
    pub fn first(&self) -> Option<&'a S> {
        self.get(0)
    }

    /// Returns the last segment of the trip.
    pub fn last(&self) -> Option<&'a S> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Returns all segments in travel order.
    pub fn iter(&self) -> impl Iterator<Item = &'a S> + '_ {
        let segments = self.segments;
        self.order.iter().map(move |&idx| &segments[idx])
    }

    /// Positions into the input slice, in travel order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the itinerary and returns the positions in travel order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Clones the segments out in travel order.
    pub fn to_vec(&self) -> Vec<S>
    where
        S: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, S: Segment> Itinerary<'a, S> {
    /// Where the trip starts.
    pub fn origin(&self) -> Option<&'a S::Location> {
        self.first().map(|s| s.departure_location())
    }

    /// Where the trip ends.
    pub fn destination(&self) -> Option<&'a S::Location> {
        self.last().map(|s| s.destination_location())
    }

    /// Check that consecutive segments connect.
    pub fn is_connected(&self) -> bool {
        self.iter()
            .zip(self.iter().skip(1))
            .all(|(prev, next)| prev.destination_location() == next.departure_location())
    }
}
