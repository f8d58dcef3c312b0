pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{BookingError, EngineError};
pub use models::{BookedBlock, BookingRequest, Profile, Seat, SeatGrid};
pub use services::SeatingEngine;
