//! Adjacency index over a set of segments.
//!
//! Sorting a trip only ever asks two questions of the input: "which segment
//! leaves from here?" and "does anything arrive here?". The index answers
//! both in O(1) by keying segment positions on their departure and
//! destination locations.

use std::collections::HashMap;

use tracing::debug;

use super::error::SortError;
use super::segment::Segment;

/// Index of segments by departure and by destination location.
///
/// Values are positions into the slice the index was built from. The index
/// borrows that slice, so it can never outlive or disagree with it.
pub struct SegmentIndex<'a, S: Segment> {
    segments: &'a [S],
    by_departure: HashMap<&'a S::Location, usize>,
    by_destination: HashMap<&'a S::Location, usize>,
}

impl<'a, S: Segment> SegmentIndex<'a, S> {
    /// Build the index in a single pass over `segments`.
    ///
    /// # Errors
    ///
    /// A location may be the departure of at most one segment and the
    /// destination of at most one segment. The first repeated key is
    /// reported as [`SortError::DuplicateDeparture`] or
    /// [`SortError::DuplicateDestination`].
    pub fn build(segments: &'a [S]) -> Result<Self, SortError> {
        let mut by_departure = HashMap::with_capacity(segments.len());
        let mut by_destination = HashMap::with_capacity(segments.len());

        for (idx, segment) in segments.iter().enumerate() {
            let departure = segment.departure_location();
            if by_departure.insert(departure, idx).is_some() {
                return Err(SortError::DuplicateDeparture(departure.to_string()));
            }

            let destination = segment.destination_location();
            if by_destination.insert(destination, idx).is_some() {
                return Err(SortError::DuplicateDestination(destination.to_string()));
            }
        }

        debug!(segments = segments.len(), "Built segment index");

        Ok(Self {
            segments,
            by_departure,
            by_destination,
        })
    }

    /// The segments this index was built from.
    pub fn segments(&self) -> &'a [S] {
        self.segments
    }

    /// Position of the segment departing from `location`, if any.
    pub fn by_departure(&self, location: &S::Location) -> Option<usize> {
        self.by_departure.get(location).copied()
    }

    /// Position of the segment arriving at `location`, if any.
    pub fn by_destination(&self, location: &S::Location) -> Option<usize> {
        self.by_destination.get(location).copied()
    }

    /// Check if some segment arrives at `location`.
    pub fn is_destination(&self, location: &S::Location) -> bool {
        self.by_destination.contains_key(location)
    }

    /// Returns the number of indexed segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if no segments are indexed.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
