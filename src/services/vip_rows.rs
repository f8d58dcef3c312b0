//! vip_rows.rs
//!
//! Seating rules for the auditorium whose front rows accept VIP bookings.
//! Every seat starts available; VIP is decided when a block is booked.

use tracing::{debug, info};

use crate::error::BookingError;
use crate::models::{BookedBlock, Seat, SeatGrid};

pub fn is_vip_row(row: usize, vip_rows: usize) -> bool {
    row < vip_rows
}

/// A row is usable when at least one seat is still available.
pub fn is_row_usable(grid: &SeatGrid, row: usize) -> bool {
    grid.row(row)
        .is_some_and(|seats| seats.iter().any(|s| s.is_available()))
}

/// Start of the first run of `group_size` consecutive available seats.
pub fn find_contiguous_start(grid: &SeatGrid, row: usize, group_size: usize) -> Option<usize> {
    if group_size == 0 || group_size > grid.cols() {
        return None;
    }
    let seats = grid.row(row)?;

    let mut run = 0;
    for (c, seat) in seats.iter().enumerate() {
        if seat.is_available() {
            run += 1;
            if run >= group_size {
                return Some(c + 1 - run);
            }
        } else {
            run = 0;
        }
    }
    None
}

pub fn can_seat_group_in_row(grid: &SeatGrid, row: usize, group_size: usize) -> bool {
    find_contiguous_start(grid, row, group_size).is_some()
}

/// Fitting row closest to the middle row (`rows / 2`). Earlier rows win ties.
pub fn suggest_best_row(grid: &SeatGrid, group_size: usize) -> Option<usize> {
    if group_size == 0 || group_size > grid.cols() {
        return None;
    }
    let middle = grid.rows() / 2;

    let mut best: Option<(usize, usize)> = None;
    for r in 0..grid.rows() {
        if !can_seat_group_in_row(grid, r, group_size) {
            continue;
        }
        let distance = r.abs_diff(middle);
        if best.map_or(true, |(_, closest)| distance < closest) {
            best = Some((r, distance));
        }
    }
    best.map(|(row, _)| row)
}

/// Books exactly `group_size` seats from `start_col` in `row`.
///
/// Every check runs before the first write, so a rejected request leaves the
/// grid untouched.
pub fn book_group(
    grid: &mut SeatGrid,
    vip_rows: usize,
    row: usize,
    start_col: usize,
    group_size: usize,
    vip: bool,
) -> Result<BookedBlock, BookingError> {
    let (rows, cols) = (grid.rows(), grid.cols());
    if row >= rows {
        return Err(BookingError::RowOutOfRange { row, rows });
    }
    if start_col >= cols {
        return Err(BookingError::ColumnOutOfRange { col: start_col, cols });
    }
    if group_size == 0 {
        return Err(BookingError::InvalidGroupSize { group_size, max: cols });
    }
    // start_col < cols here, so the subtraction cannot wrap
    if group_size > cols - start_col {
        return Err(BookingError::BlockOutOfBounds {
            start_col,
            group_size,
            cols,
        });
    }

    let seats = grid
        .row_mut(row)
        .ok_or(BookingError::RowOutOfRange { row, rows })?;
    let block = &mut seats[start_col..start_col + group_size];

    if let Some(offset) = block.iter().position(|s| !s.is_available()) {
        let col = start_col + offset;
        debug!("Booking rejected: seat ({}, {}) is {:?}", row, col, block[offset]);
        return Err(BookingError::SeatUnavailable { row, col });
    }

    let seat = if vip && is_vip_row(row, vip_rows) {
        Seat::VipBooked
    } else {
        Seat::RegularBooked
    };
    block.fill(seat);

    info!(
        "Booked {} seats in row {} from seat {} as {:?}",
        group_size, row, start_col, seat
    );

    Ok(BookedBlock {
        row,
        start_col,
        group_size,
        seat,
    })
}
