//! Trip sorter.
//!
//! This module answers: "given a handful of boarding cards in no particular
//! order, in what order do I travel?"
//!
//! The algorithm indexes segments by departure and by destination, picks the
//! one segment whose departure nothing arrives at, and follows destinations
//! from there. It runs in O(n) and rejects any input that is not a single
//! simple chain instead of guessing.

mod chain;
mod error;
mod index;
mod itinerary;
mod segment;
mod strategy;
mod trip;


pub use chain::{find_start, walk};
pub use error::SortError;
pub use index::SegmentIndex;
pub use itinerary::Itinerary;
pub use segment::Segment;
pub use strategy::{ChainSorter, SortStrategy};
pub use trip::{ARRIVAL_LINE, Trip};
