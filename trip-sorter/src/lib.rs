//! Trip sorter server.
//!
//! Takes an unordered stack of boarding cards for a single journey and
//! puts them back in travel order, then renders step-by-step
//! instructions for the traveller.

pub mod config;
pub mod domain;
pub mod sample;
pub mod sorter;
pub mod web;
