use super::Seat;

/// A request to seat a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingRequest {
    /// Let the engine pick the row and block (random-fill profile).
    Auto { group_size: usize },
    /// Book an exact block chosen by the caller (VIP-row profile).
    Placed {
        row: usize,
        start_col: usize,
        group_size: usize,
        vip: bool,
    },
}

impl BookingRequest {
    pub fn group_size(&self) -> usize {
        match *self {
            BookingRequest::Auto { group_size } | BookingRequest::Placed { group_size, .. } => {
                group_size
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            BookingRequest::Auto { .. } => "auto",
            BookingRequest::Placed { .. } => "placed",
        }
    }
}

/// The block written by a successful booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedBlock {
    pub row: usize,
    pub start_col: usize,
    pub group_size: usize,
    /// State written into the previously available seats.
    pub seat: Seat,
}

impl BookedBlock {
    /// Last column of the block, inclusive.
    pub fn end_col(&self) -> usize {
        self.start_col + self.group_size - 1
    }
}
