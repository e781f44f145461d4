//! Boarding card holder.

use std::fmt;

/// The person a boarding card is issued to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub surname: String,
    pub first_name: String,
    pub age: u8,
}

impl Passenger {
    pub fn new(surname: impl Into<String>, first_name: impl Into<String>, age: u8) -> Self {
        Self {
            surname: surname.into(),
            first_name: first_name.into(),
            age,
        }
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.surname)
    }
}
