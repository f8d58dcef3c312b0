use thiserror::Error;

/// Failure to build an engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("auditorium must have at least one row and one column, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Reason a booking request was rejected. The grid is never touched when one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("row {row} is out of range (auditorium has {rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("seat {col} is out of range (rows have {cols} seats)")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("group size {group_size} is invalid (must be 1..={max})")]
    InvalidGroupSize { group_size: usize, max: usize },

    #[error("a group of {group_size} starting at seat {start_col} does not fit in {cols} seats")]
    BlockOutOfBounds {
        start_col: usize,
        group_size: usize,
        cols: usize,
    },

    #[error("seat ({row}, {col}) is not available")]
    SeatUnavailable { row: usize, col: usize },

    #[error("no row can seat a group of {group_size}")]
    NoQualifyingRow { group_size: usize },

    #[error("row {row} has no block for a group of {group_size}")]
    NoQualifyingBlock { row: usize, group_size: usize },

    #[error("{request} bookings are not supported by the {profile} profile")]
    ProfileMismatch {
        request: &'static str,
        profile: &'static str,
    },
}

impl BookingError {
    /// True when the request itself was malformed, as opposed to a valid
    /// request that found no room.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            BookingError::RowOutOfRange { .. }
                | BookingError::ColumnOutOfRange { .. }
                | BookingError::InvalidGroupSize { .. }
                | BookingError::BlockOutOfBounds { .. }
                | BookingError::ProfileMismatch { .. }
        )
    }
}
