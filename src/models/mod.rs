pub mod booking;
pub mod grid;
pub mod profile;
pub mod seat;

pub use booking::{BookedBlock, BookingRequest};
pub use grid::SeatGrid;
pub use profile::Profile;
pub use seat::Seat;
