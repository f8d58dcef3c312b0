use rand::Rng;
use tracing::{debug, info};

use crate::error::{BookingError, EngineError};
use crate::models::{BookedBlock, BookingRequest, Profile, Seat, SeatGrid};
use crate::services::{random_fill, render, vip_rows};

/// Seat-grid query and booking engine for one auditorium.
///
/// The engine owns its grid exclusively. Queries never fail: out-of-range rows
/// and group sizes yield `false` or `None`. Booking is the only mutation.
#[derive(Debug, Clone)]
pub struct SeatingEngine {
    grid: SeatGrid,
    profile: Profile,
}

impl SeatingEngine {
    /// Builds the initial layout for `profile`: randomly occupied for
    /// `RandomFill`, all available for `VipRows`.
    pub fn new<R: Rng>(
        rows: usize,
        cols: usize,
        profile: Profile,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        let mut grid =
            SeatGrid::try_new(rows, cols).ok_or(EngineError::InvalidDimensions { rows, cols })?;
        if profile == Profile::RandomFill {
            random_fill::populate(&mut grid, rng);
        }

        info!(
            "Created {}x{} auditorium with {} profile",
            rows,
            cols,
            profile.name()
        );
        Ok(Self { grid, profile })
    }

    /// Wraps an existing layout.
    pub fn from_grid(grid: SeatGrid, profile: Profile) -> Self {
        Self { grid, profile }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn seat(&self, row: usize, col: usize) -> Option<Seat> {
        self.grid.get(row, col)
    }

    /// Whether `row` is VIP-eligible under the active profile: the middle band
    /// for random fill, the leading rows for VIP rows.
    pub fn is_vip_row(&self, row: usize) -> bool {
        if row >= self.rows() {
            return false;
        }
        match self.profile {
            Profile::RandomFill => random_fill::vip_band(self.rows()).contains(&row),
            Profile::VipRows { vip_rows } => vip_rows::is_vip_row(row, vip_rows),
        }
    }

    // --- Counting ---

    pub fn count(&self, seat: Seat) -> usize {
        self.grid.count(seat)
    }

    pub fn available_count(&self) -> usize {
        self.grid.count(Seat::Available)
    }

    /// Seats holding a booking: `Booked`, `RegularBooked` and `VipBooked`.
    pub fn booked_count(&self) -> usize {
        self.grid.count_where(Seat::is_booked)
    }

    pub fn broken_count(&self) -> usize {
        self.grid.count(Seat::Broken)
    }

    /// Seats of the VIP class. A VIP booking is counted by `booked_count`
    /// (or `count(Seat::VipBooked)`), never here.
    pub fn vip_count(&self) -> usize {
        self.grid.count(Seat::Vip)
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.count_where(Seat::is_occupied)
    }

    /// Percentage of seats that are occupied, `0.0` for an empty grid.
    pub fn occupancy_rate(&self) -> f64 {
        let total = self.grid.total();
        if total == 0 {
            return 0.0;
        }
        self.occupied_count() as f64 * 100.0 / total as f64
    }

    // --- Queries ---

    pub fn is_row_usable(&self, row: usize) -> bool {
        match self.profile {
            Profile::RandomFill => random_fill::is_row_usable(&self.grid, row),
            Profile::VipRows { .. } => vip_rows::is_row_usable(&self.grid, row),
        }
    }

    pub fn can_seat_group_in_row(&self, row: usize, group_size: usize) -> bool {
        match self.profile {
            Profile::RandomFill => random_fill::can_seat_group_in_row(&self.grid, row, group_size),
            Profile::VipRows { .. } => vip_rows::can_seat_group_in_row(&self.grid, row, group_size),
        }
    }

    /// First column of a block that `can_seat_group_in_row` would accept.
    pub fn find_block_start(&self, row: usize, group_size: usize) -> Option<usize> {
        match self.profile {
            Profile::RandomFill => random_fill::find_block_start(&self.grid, row, group_size),
            Profile::VipRows { .. } => vip_rows::find_contiguous_start(&self.grid, row, group_size),
        }
    }

    pub fn suggest_best_row(&self, group_size: usize) -> Option<usize> {
        match self.profile {
            Profile::RandomFill => random_fill::suggest_best_row(&self.grid, group_size),
            Profile::VipRows { .. } => vip_rows::suggest_best_row(&self.grid, group_size),
        }
    }

    // --- Booking ---

    /// Books a group, reporting why a request was turned down.
    ///
    /// `Auto` requests belong to the random-fill profile and `Placed` requests
    /// to the VIP-row profile; crossing them is rejected without touching the
    /// grid.
    pub fn try_book_group(&mut self, request: BookingRequest) -> Result<BookedBlock, BookingError> {
        let result = match (self.profile, request) {
            (Profile::RandomFill, BookingRequest::Auto { group_size }) => {
                random_fill::book_group(&mut self.grid, group_size)
            }
            (
                Profile::VipRows { vip_rows },
                BookingRequest::Placed {
                    row,
                    start_col,
                    group_size,
                    vip,
                },
            ) => vip_rows::book_group(&mut self.grid, vip_rows, row, start_col, group_size, vip),
            (profile, request) => Err(BookingError::ProfileMismatch {
                request: request.kind(),
                profile: profile.name(),
            }),
        };

        if let Err(e) = &result {
            debug!("Booking request {:?} rejected: {}", request, e);
        }
        result
    }

    pub fn book_group(&mut self, request: BookingRequest) -> bool {
        self.try_book_group(request).is_ok()
    }

    // --- Display ---

    pub fn render(&self) -> String {
        match self.profile {
            Profile::RandomFill => render::seating_codes(&self.grid),
            Profile::VipRows { vip_rows } => render::seating_layout(&self.grid, vip_rows),
        }
    }

    pub fn row_analysis(&self) -> Vec<render::RowSummary> {
        render::row_summaries(&self.grid, |r| self.is_vip_row(r))
    }

    pub fn render_row_analysis(&self) -> String {
        render::row_analysis(&self.row_analysis())
    }
}
