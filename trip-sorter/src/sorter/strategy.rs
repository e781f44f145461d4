//! Sorting strategies.

use tracing::debug;

use super::chain::{find_start, walk};
use super::error::SortError;
use super::index::SegmentIndex;
use super::itinerary::Itinerary;
use super::segment::Segment;

/// A way of putting an unordered set of segments into travel order.
///
/// This is the seam callers depend on, so that an algorithm with different
/// preconditions (a caller-supplied start, tolerance for branching) can be
/// swapped in without touching them.
pub trait SortStrategy<S: Segment> {
    /// Sort `segments` into travel order.
    fn sort_trip<'a>(&self, segments: &'a [S]) -> Result<Itinerary<'a, S>, SortError>;
}

/// Sorts a trip that is a single simple chain with unknown start and end.
///
/// Builds a fresh [`SegmentIndex`] for every call, so a sorter carries no
/// state between calls and can be shared freely.
///
/// # Examples
///
/// ```
/// use trip_sorter::sample::sample_trip;
/// use trip_sorter::sorter::{ChainSorter, SortStrategy};
///
/// let cards = sample_trip();
/// let itinerary = ChainSorter.sort_trip(&cards).unwrap();
///
/// let cities: Vec<_> = itinerary.iter().map(|c| c.departure().city()).collect();
/// assert_eq!(cities, ["Madrid", "Barcelona", "Gerona", "Stockholm"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainSorter;

impl ChainSorter {
    pub fn new() -> Self {
        Self
    }
}

impl<S: Segment> SortStrategy<S> for ChainSorter {
    fn sort_trip<'a>(&self, segments: &'a [S]) -> Result<Itinerary<'a, S>, SortError> {
        if segments.is_empty() {
            debug!("No segments to sort");
            return Ok(Itinerary::empty(segments));
        }

        let index = SegmentIndex::build(segments)?;
        let start = find_start(&index)?;
        walk(start, &index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorter::test_support::{Hop, hops};

    fn route(itinerary: &Itinerary<'_, Hop>) -> Vec<String> {
        itinerary
            .iter()
            .map(|s| format!("{}->{}", s.from, s.to))
            .collect()
    }

    #[test]
    fn sorts_letters() {
        let segments = hops(&[("C", "D"), ("B", "C"), ("A", "B"), ("D", "E")]);
        let itinerary = ChainSorter.sort_trip(&segments).unwrap();

        assert_eq!(route(&itinerary), ["A->B", "B->C", "C->D", "D->E"]);
    }

    #[test]
    fn empty_input_is_empty_itinerary() {
        let segments = hops(&[]);
        let itinerary = ChainSorter.sort_trip(&segments).unwrap();

        assert!(itinerary.is_empty());
    }

    #[test]
    fn single_segment() {
        let segments = hops(&[("A", "B")]);
        let itinerary = ChainSorter.sort_trip(&segments).unwrap();

        assert_eq!(route(&itinerary), ["A->B"]);
    }

    #[test]
    fn two_cycle_has_no_start() {
        let segments = hops(&[("X", "Y"), ("Y", "X")]);

        assert_eq!(
            ChainSorter.sort_trip(&segments).err(),
            Some(SortError::NoStartFound)
        );
    }

    #[test]
    fn branching_is_malformed() {
        let segments = hops(&[("A", "B"), ("B", "C"), ("B", "D")]);
        let err = ChainSorter.sort_trip(&segments).unwrap_err();

        assert!(err.is_malformed_chain());
    }

    #[test]
    fn usable_through_trait_object() {
        let strategy: Box<dyn SortStrategy<Hop>> = Box::new(ChainSorter::new());
        let segments = hops(&[("B", "C"), ("A", "B")]);

        let itinerary = strategy.sort_trip(&segments).unwrap();
        assert_eq!(route(&itinerary), ["A->B", "B->C"]);
    }
}
