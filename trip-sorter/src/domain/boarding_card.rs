//! Boarding card type.
//!
//! A `BoardingCard` is one leg of a trip: a ticket for a single means of
//! transport from one place to another. Cards carry enough detail to tell
//! the traveller how to board, and nothing about where they sit in the trip.

use std::fmt::Write as _;

use chrono::NaiveDateTime;

use super::{CardId, DomainError, Passenger, Place, Transport};

/// A boarding card for one leg of a trip.
///
/// # Invariants
///
/// - Departure and destination are different places
/// - If both times are known, arrival is not before departure
#[derive(Debug, Clone)]
pub struct BoardingCard {
    id: CardId,
    departure: Place,
    destination: Place,
    transport: Transport,
    seat: Option<String>,
    departure_time: Option<NaiveDateTime>,
    arrival_time: Option<NaiveDateTime>,
    passenger: Option<Passenger>,
    operator: Option<String>,
}

impl BoardingCard {
    /// Construct a card, validating that it actually goes somewhere.
    ///
    /// # Errors
    ///
    /// Returns `Err` if departure and destination are the same place.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_sorter::domain::{BoardingCard, CardId, Place, PlaceId, Transport};
    ///
    /// let madrid = Place::new(PlaceId::new("madrid-spain").unwrap(), "Madrid", "Spain");
    /// let barcelona = Place::new(PlaceId::new("barcelona-spain").unwrap(), "Barcelona", "Spain");
    ///
    /// let card = BoardingCard::new(
    ///     CardId::new("001").unwrap(),
    ///     madrid,
    ///     barcelona,
    ///     Transport::train("78A"),
    /// )
    /// .unwrap()
    /// .with_seat("45B");
    ///
    /// assert_eq!(
    ///     card.describe(),
    ///     "Take train 78A from Madrid to Barcelona. Sit in seat 45B."
    /// );
    /// ```
    pub fn new(
        id: CardId,
        departure: Place,
        destination: Place,
        transport: Transport,
    ) -> Result<Self, DomainError> {
        if departure == destination {
            return Err(DomainError::SameEndpoints(departure.id().clone()));
        }

        Ok(BoardingCard {
            id,
            departure,
            destination,
            transport,
            seat: None,
            departure_time: None,
            arrival_time: None,
            passenger: None,
            operator: None,
        })
    }

    /// Assign a seat.
    pub fn with_seat(mut self, seat: impl Into<String>) -> Self {
        self.seat = Some(seat.into());
        self
    }

    /// Set the scheduled departure and arrival times.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `arrival` is before `departure`.
    pub fn with_schedule(
        mut self,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        if arrival < departure {
            return Err(DomainError::ArrivalBeforeDeparture { departure, arrival });
        }
        self.departure_time = Some(departure);
        self.arrival_time = Some(arrival);
        Ok(self)
    }

    /// Set the card holder.
    pub fn with_passenger(mut self, passenger: Passenger) -> Self {
        self.passenger = Some(passenger);
        self
    }

    /// Set the transport company operating this leg.
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn id(&self) -> &CardId {
        &self.id
    }

    pub fn departure(&self) -> &Place {
        &self.departure
    }

    pub fn destination(&self) -> &Place {
        &self.destination
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn seat(&self) -> Option<&str> {
        self.seat.as_deref()
    }

    pub fn departure_time(&self) -> Option<NaiveDateTime> {
        self.departure_time
    }

    pub fn arrival_time(&self) -> Option<NaiveDateTime> {
        self.arrival_time
    }

    pub fn passenger(&self) -> Option<&Passenger> {
        self.passenger.as_ref()
    }

    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }

    /// Returns the scheduled duration of this leg, if both times are known.
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.departure_time, self.arrival_time) {
            (Some(dep), Some(arr)) => Some(arr.signed_duration_since(dep)),
            _ => None,
        }
    }

    /// Returns the boarding instruction for this card.
    pub fn describe(&self) -> String {
        let from = self.departure.city();
        let to = self.destination.city();
        let mut out = String::new();

        // Writing to a String cannot fail.
        match &self.transport {
            Transport::Train { number } => {
                let _ = write!(out, "Take train {number} from {from} to {to}.");
                match self.seat() {
                    Some(seat) => {
                        let _ = write!(out, " Sit in seat {seat}.");
                    }
                    None => out.push_str(" No seat assignment."),
                }
            }
            Transport::Bus => {
                let _ = write!(out, "Take the airport bus from {from} to {to}.");
                match self.seat() {
                    Some(seat) => {
                        let _ = write!(out, " Seat {seat}.");
                    }
                    None => out.push_str(" No seat assignment."),
                }
            }
            Transport::Aeroplane {
                flight,
                gate,
                baggage_counter,
            } => {
                let _ = write!(
                    out,
                    "From {from} Airport, take flight {flight} to {to}. Gate {gate}"
                );
                match self.seat() {
                    Some(seat) => {
                        let _ = write!(out, ", seat {seat}.");
                    }
                    None => out.push_str(", no seat assignment."),
                }
                match baggage_counter {
                    Some(counter) => {
                        let _ = write!(out, " Baggage drop at ticket counter {counter}.");
                    }
                    None => out
                        .push_str(" Baggage will be automatically transferred from your last leg."),
                }
            }
        }

        out
    }
}
