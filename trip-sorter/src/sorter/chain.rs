//! Start detection and chain walking.
//!
//! A well-formed trip is a single simple path: exactly one segment departs
//! from a place nothing arrives at, and following destinations from that
//! segment visits every other segment exactly once.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::error::SortError;
use super::index::SegmentIndex;
use super::itinerary::Itinerary;
use super::segment::Segment;

/// Find the position of the segment that starts the trip.
///
/// Candidates are examined in input order, so the result does not depend
/// on hash map iteration order.
///
/// # Errors
///
/// - [`SortError::NoStartFound`] if every departure is also a destination
///   (a closed loop) or there are no segments at all
/// - [`SortError::MultipleStarts`] if more than one segment qualifies
///   (several disjoint chains)
pub fn find_start<S: Segment>(index: &SegmentIndex<'_, S>) -> Result<usize, SortError> {
    let segments = index.segments();
    let mut candidates = segments
        .iter()
        .enumerate()
        .filter(|(_, s)| !index.is_destination(s.departure_location()));

    let Some((start, first)) = candidates.next() else {
        return Err(SortError::NoStartFound);
    };

    if let Some((_, second)) = candidates.next() {
        return Err(SortError::MultipleStarts {
            first: first.departure_location().to_string(),
            second: second.departure_location().to_string(),
        });
    }

    trace!(
        segment = %first.segment_id(),
        location = %first.departure_location(),
        "Found start segment"
    );

    Ok(start)
}

/// Follow successor links from the segment at `start`.
///
/// Every location left is remembered, so the walk terminates on any input
/// and takes at most one step per indexed segment.
///
/// # Errors
///
/// - [`SortError::StartOutOfRange`] if `start` is not a valid position
/// - [`SortError::RevisitedLocation`] if the chain loops back on itself
/// - [`SortError::Disconnected`] if the chain ends before every segment
///   has been visited
pub fn walk<'a, S: Segment>(
    start: usize,
    index: &SegmentIndex<'a, S>,
) -> Result<Itinerary<'a, S>, SortError> {
    let segments = index.segments();
    let first = segments.get(start).ok_or(SortError::StartOutOfRange {
        position: start,
        len: segments.len(),
    })?;

    let mut order = Vec::with_capacity(segments.len());
    let mut visited: HashSet<&S::Location> = HashSet::with_capacity(segments.len());

    order.push(start);
    visited.insert(first.departure_location());
    let mut cursor = first.destination_location();

    while let Some(next) = index.by_departure(cursor) {
        if !visited.insert(cursor) {
            return Err(SortError::RevisitedLocation(cursor.to_string()));
        }

        let segment = &segments[next];
        trace!(
            segment = %segment.segment_id(),
            from = %cursor,
            to = %segment.destination_location(),
            "Chained segment"
        );

        order.push(next);
        cursor = segment.destination_location();
    }

    if order.len() != segments.len() {
        return Err(SortError::Disconnected {
            reached: order.len(),
            total: segments.len(),
        });
    }

    debug!(segments = order.len(), end = %cursor, "Chain walk complete");

    Ok(Itinerary::new(segments, order))
}
