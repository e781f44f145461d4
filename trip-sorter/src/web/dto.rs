//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{BoardingCard, CardId, DomainError, Passenger, Place, PlaceId, Transport};
use crate::sorter::Trip;

/// A place, as sent and returned over the wire.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaceDto {
    /// Place identifier; cards chain on this
    pub id: String,

    /// City name for display
    pub city: String,

    /// Country name for display
    #[serde(default)]
    pub country: String,

    /// Latitude in decimal degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl PlaceDto {
    /// Validate into a domain place.
    pub fn into_place(self) -> Result<Place, DomainError> {
        let place = Place::new(PlaceId::new(self.id)?, self.city, self.country);
        Ok(match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => place.with_coordinates(lat, lon),
            _ => place,
        })
    }

    /// Create from a domain place.
    pub fn from_place(place: &Place) -> Self {
        let coords = place.coordinates();
        Self {
            id: place.id().to_string(),
            city: place.city().to_string(),
            country: place.country().to_string(),
            latitude: coords.map(|c| c.latitude),
            longitude: coords.map(|c| c.longitude),
        }
    }
}

/// Transport details, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransportDto {
    Aeroplane {
        flight: String,
        gate: String,
        #[serde(default)]
        baggage_counter: Option<String>,
    },
    Train {
        number: String,
    },
    Bus,
}

impl From<TransportDto> for Transport {
    fn from(dto: TransportDto) -> Self {
        match dto {
            TransportDto::Aeroplane {
                flight,
                gate,
                baggage_counter,
            } => Transport::Aeroplane {
                flight,
                gate,
                baggage_counter,
            },
            TransportDto::Train { number } => Transport::Train { number },
            TransportDto::Bus => Transport::Bus,
        }
    }
}

impl From<&Transport> for TransportDto {
    fn from(transport: &Transport) -> Self {
        match transport.clone() {
            Transport::Aeroplane {
                flight,
                gate,
                baggage_counter,
            } => TransportDto::Aeroplane {
                flight,
                gate,
                baggage_counter,
            },
            Transport::Train { number } => TransportDto::Train { number },
            Transport::Bus => TransportDto::Bus,
        }
    }
}

/// Card holder details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PassengerDto {
    pub surname: String,
    pub first_name: String,
    pub age: u8,
}

impl PassengerDto {
    /// Create from a domain passenger.
    pub fn from_passenger(passenger: &Passenger) -> Self {
        Self {
            surname: passenger.surname.clone(),
            first_name: passenger.first_name.clone(),
            age: passenger.age,
        }
    }
}

/// A boarding card in a sort request.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardingCardRequest {
    /// Card identifier
    pub id: String,

    /// Where the card departs from
    pub departure: PlaceDto,

    /// Where the card arrives
    pub destination: PlaceDto,

    /// What the card is valid on
    pub transport: TransportDto,

    /// Seat, if assigned
    pub seat: Option<String>,

    /// Scheduled departure (e.g. "2024-03-15T10:00:00")
    pub departure_time: Option<NaiveDateTime>,

    /// Scheduled arrival
    pub arrival_time: Option<NaiveDateTime>,

    /// Card holder
    pub passenger: Option<PassengerDto>,

    /// Transport company name
    pub operator: Option<String>,
}

impl BoardingCardRequest {
    /// Validate into a domain boarding card.
    pub fn into_card(self) -> Result<BoardingCard, DomainError> {
        let mut card = BoardingCard::new(
            CardId::new(self.id)?,
            self.departure.into_place()?,
            self.destination.into_place()?,
            self.transport.into(),
        )?;

        if let Some(seat) = self.seat {
            card = card.with_seat(seat);
        }
        match (self.departure_time, self.arrival_time) {
            (Some(dep), Some(arr)) => card = card.with_schedule(dep, arr)?,
            (None, None) => {}
            _ => return Err(DomainError::IncompleteSchedule),
        }
        if let Some(p) = self.passenger {
            card = card.with_passenger(Passenger::new(p.surname, p.first_name, p.age));
        }
        if let Some(operator) = self.operator {
            card = card.with_operator(operator);
        }

        Ok(card)
    }
}

/// Request to sort a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct SortTripRequest {
    /// Cards in any order
    pub cards: Vec<BoardingCardRequest>,
}

/// A boarding card in a sort response.
#[derive(Debug, Serialize)]
pub struct BoardingCardResult {
    pub id: String,
    pub departure: PlaceDto,
    pub destination: PlaceDto,
    pub transport: TransportDto,
    pub seat: Option<String>,
    pub departure_time: Option<NaiveDateTime>,
    pub arrival_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger: Option<PassengerDto>,
    pub operator: Option<String>,

    /// Boarding instruction for this card
    pub instruction: String,
}

impl BoardingCardResult {
    /// Create from a domain boarding card.
    pub fn from_card(card: &BoardingCard) -> Self {
        Self {
            id: card.id().to_string(),
            departure: PlaceDto::from_place(card.departure()),
            destination: PlaceDto::from_place(card.destination()),
            transport: card.transport().into(),
            seat: card.seat().map(str::to_string),
            departure_time: card.departure_time(),
            arrival_time: card.arrival_time(),
            passenger: card.passenger().map(PassengerDto::from_passenger),
            operator: card.operator().map(str::to_string),
            instruction: card.describe(),
        }
    }
}

/// Response from sorting a trip.
#[derive(Debug, Serialize)]
pub struct SortTripResponse {
    /// Cards in travel order
    pub cards: Vec<BoardingCardResult>,

    /// One instruction per card, in travel order
    pub instructions: Vec<String>,

    /// Full rendered travel instructions
    pub summary: String,
}

impl SortTripResponse {
    /// Create from a sorted trip.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            cards: trip
                .cards()
                .iter()
                .map(BoardingCardResult::from_card)
                .collect(),
            instructions: trip.instructions(),
            summary: trip.render(),
        }
    }
}

/// Error body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
