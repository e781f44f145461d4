//! Means of transport a boarding card is issued for.

use std::fmt;

/// Kind of transport, without the per-kind details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    Aeroplane,
    Train,
    Bus,
}

impl TransportKind {
    /// Human-readable vehicle type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Aeroplane => "Aeroplane",
            TransportKind::Train => "Train",
            TransportKind::Bus => "Bus",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The transport a boarding card is valid on.
///
/// Each variant carries exactly the details needed to tell the traveller
/// how to board it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// A flight.
    Aeroplane {
        /// Flight number (e.g. "SK455")
        flight: String,
        /// Departure gate
        gate: String,
        /// Baggage drop counter; `None` when baggage is transferred
        /// automatically from the previous leg
        baggage_counter: Option<String>,
    },
    /// A train.
    Train {
        /// Train number (e.g. "78A")
        number: String,
    },
    /// An airport bus.
    Bus,
}

impl Transport {
    /// Convenience constructor for a flight.
    pub fn aeroplane(
        flight: impl Into<String>,
        gate: impl Into<String>,
        baggage_counter: Option<String>,
    ) -> Self {
        Transport::Aeroplane {
            flight: flight.into(),
            gate: gate.into(),
            baggage_counter,
        }
    }

    /// Convenience constructor for a train.
    pub fn train(number: impl Into<String>) -> Self {
        Transport::Train {
            number: number.into(),
        }
    }

    pub fn kind(&self) -> TransportKind {
        match self {
            Transport::Aeroplane { .. } => TransportKind::Aeroplane,
            Transport::Train { .. } => TransportKind::Train,
            Transport::Bus => TransportKind::Bus,
        }
    }

    /// Vehicle type shown to the traveller (e.g. "Train").
    pub fn vehicle_type(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Returns true if this is a flight.
    pub fn is_flight(&self) -> bool {
        matches!(self, Transport::Aeroplane { .. })
    }
}
