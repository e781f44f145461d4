//! Web layer for the trip sorter.
//!
//! Provides HTTP endpoints for sorting boarding cards into an itinerary.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router, sort_request};
pub use state::AppState;
pub use templates::*;
