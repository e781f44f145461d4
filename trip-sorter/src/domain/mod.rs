//! Domain types for the trip sorter.
//!
//! This module contains the value types that describe a trip: places,
//! boarding cards and the transport they are issued for. All types enforce
//! their invariants at construction time, so code that receives these types
//! can trust their validity.

mod boarding_card;
mod card_id;
mod error;
mod passenger;
mod place;
mod transport;

pub use boarding_card::BoardingCard;
pub use card_id::{CardId, InvalidCardId};
pub use error::DomainError;
pub use passenger::Passenger;
pub use place::{Coordinates, InvalidPlaceId, Place, PlaceId};
pub use transport::{Transport, TransportKind};
