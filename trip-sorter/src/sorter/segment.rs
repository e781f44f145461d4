//! What the sorter needs to know about a trip segment.

use std::fmt;
use std::hash::Hash;

use crate::domain::{BoardingCard, CardId, PlaceId};

/// A leg of a trip, as seen by the sorter.
///
/// The sorter only ever looks at where a segment departs from and where it
/// arrives; everything else about the segment is opaque to it.
pub trait Segment {
    /// Identifier of a place. Segments chain where one's destination equals
    /// the next one's departure.
    type Location: Eq + Hash + fmt::Display;

    /// Identifier of the segment itself, used in logs.
    type Id: fmt::Display;

    fn segment_id(&self) -> &Self::Id;

    fn departure_location(&self) -> &Self::Location;

    fn destination_location(&self) -> &Self::Location;
}

impl Segment for BoardingCard {
    type Location = PlaceId;
    type Id = CardId;

    fn segment_id(&self) -> &CardId {
        self.id()
    }

    fn departure_location(&self) -> &PlaceId {
        self.departure().id()
    }

    fn destination_location(&self) -> &PlaceId {
        self.destination().id()
    }
}
