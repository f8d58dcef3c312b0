//! random_fill.rs
//!
//! Seating rules for the randomly occupied auditorium.
//!
//! - Seats are rolled independently at construction: mostly available, some
//!   booked, a few broken, and VIP seats only in the middle four rows.
//! - A group needs a contiguous block of available or VIP seats where no seat
//!   sits next to a broken one.
//! - The best row is the fitting row with the most available seats.
//! - Booking is automatic and converts only the available seats of the block.

use rand::Rng;
use std::ops::Range;
use tracing::{debug, info};

use crate::error::BookingError;
use crate::models::{BookedBlock, Seat, SeatGrid};

/// Roll thresholds, in percent.
const AVAILABLE_BELOW: u32 = 65;
const BOOKED_BELOW: u32 = 90;
const BROKEN_BELOW: u32 = 95;

/// Height of the band of rows that may hold VIP seats.
const VIP_BAND_HEIGHT: usize = 4;

/// Rows that may receive VIP seats: the middle four, clipped to the grid.
pub fn vip_band(rows: usize) -> Range<usize> {
    let start = rows.saturating_sub(VIP_BAND_HEIGHT) / 2;
    let end = (start + VIP_BAND_HEIGHT).min(rows);
    start..end
}

/// Maps a percentage roll to a seat. A roll in the VIP bucket outside the
/// band falls back to `Available`.
pub fn seat_for_roll(roll: u32, in_vip_band: bool) -> Seat {
    if roll < AVAILABLE_BELOW {
        Seat::Available
    } else if roll < BOOKED_BELOW {
        Seat::Booked
    } else if roll < BROKEN_BELOW {
        Seat::Broken
    } else if in_vip_band {
        Seat::Vip
    } else {
        Seat::Available
    }
}

/// Overwrites every seat of `grid` with a random roll.
pub fn populate<R: Rng>(grid: &mut SeatGrid, rng: &mut R) {
    let (rows, cols) = (grid.rows(), grid.cols());
    let band = vip_band(rows);

    for r in 0..rows {
        let in_band = band.contains(&r);
        for c in 0..cols {
            let roll = rng.gen_range(0..100);
            grid.set(r, c, seat_for_roll(roll, in_band));
        }
    }

    debug!(
        "Populated {}x{} grid: {} available, {} booked, {} broken, {} VIP",
        rows,
        cols,
        grid.count(Seat::Available),
        grid.count(Seat::Booked),
        grid.count(Seat::Broken),
        grid.count(Seat::Vip)
    );
}

/// A row is usable when it has an available seat and is not entirely broken.
///
/// The second condition is implied by the first; both are evaluated so the
/// rule reads the same as the two checks it is specified by.
pub fn is_row_usable(grid: &SeatGrid, row: usize) -> bool {
    let Some(seats) = grid.row(row) else {
        return false;
    };

    let has_available = seats.iter().any(|s| s.is_available());
    let has_non_broken = seats.iter().any(|s| !s.is_broken());

    has_available && has_non_broken
}

fn seat_usable(seat: Seat) -> bool {
    matches!(seat, Seat::Available | Seat::Vip)
}

fn next_to_broken(seats: &[Seat], col: usize) -> bool {
    let left = col > 0 && seats[col - 1].is_broken();
    let right = col + 1 < seats.len() && seats[col + 1].is_broken();
    left || right
}

fn block_qualifies(seats: &[Seat], start: usize, group_size: usize) -> bool {
    (start..start + group_size).all(|c| seat_usable(seats[c]) && !next_to_broken(seats, c))
}

/// First column of a qualifying block in `row`, or `None`.
pub fn find_block_start(grid: &SeatGrid, row: usize, group_size: usize) -> Option<usize> {
    if group_size == 0 || group_size > grid.cols() {
        return None;
    }
    let seats = grid.row(row)?;
    (0..=seats.len() - group_size).find(|&start| block_qualifies(seats, start, group_size))
}

pub fn can_seat_group_in_row(grid: &SeatGrid, row: usize, group_size: usize) -> bool {
    find_block_start(grid, row, group_size).is_some()
}

/// Fitting row with the most available seats. Earlier rows win ties.
pub fn suggest_best_row(grid: &SeatGrid, group_size: usize) -> Option<usize> {
    if group_size == 0 || group_size > grid.cols() {
        return None;
    }

    let mut best: Option<(usize, usize)> = None;
    for r in 0..grid.rows() {
        if !can_seat_group_in_row(grid, r, group_size) {
            continue;
        }
        let available = grid.count_in_row(r, Seat::Available);
        if best.map_or(true, |(_, most)| available > most) {
            best = Some((r, available));
        }
    }
    best.map(|(row, _)| row)
}

/// Seats a group in the suggested row. VIP seats inside the block keep their
/// state; only available seats become `Booked`.
pub fn book_group(grid: &mut SeatGrid, group_size: usize) -> Result<BookedBlock, BookingError> {
    if group_size == 0 || group_size > grid.cols() {
        return Err(BookingError::InvalidGroupSize {
            group_size,
            max: grid.cols(),
        });
    }

    let row = suggest_best_row(grid, group_size)
        .ok_or(BookingError::NoQualifyingRow { group_size })?;
    let start_col = find_block_start(grid, row, group_size)
        .ok_or(BookingError::NoQualifyingBlock { row, group_size })?;

    let seats = grid
        .row_mut(row)
        .ok_or(BookingError::NoQualifyingBlock { row, group_size })?;
    let mut converted = 0;
    for seat in &mut seats[start_col..start_col + group_size] {
        if seat.is_available() {
            *seat = Seat::Booked;
            converted += 1;
        }
    }

    info!(
        "Booked group of {} in row {} seats {}-{} ({} converted, {} VIP kept)",
        group_size,
        row,
        start_col,
        start_col + group_size - 1,
        converted,
        group_size - converted
    );

    Ok(BookedBlock {
        row,
        start_col,
        group_size,
        seat: Seat::Booked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const A: Seat = Seat::Available;
    const B: Seat = Seat::Booked;
    const X: Seat = Seat::Broken;
    const V: Seat = Seat::Vip;

    fn grid(rows: Vec<Vec<Seat>>) -> SeatGrid {
        SeatGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_vip_band_is_middle_four_rows() {
        assert_eq!(vip_band(10), 3..7);
        assert_eq!(vip_band(9), 2..6);
        assert_eq!(vip_band(4), 0..4);
        assert_eq!(vip_band(3), 0..3);
        assert_eq!(vip_band(1), 0..1);
    }

    #[test]
    fn test_roll_thresholds() {
        assert_eq!(seat_for_roll(0, false), A);
        assert_eq!(seat_for_roll(64, false), A);
        assert_eq!(seat_for_roll(65, false), B);
        assert_eq!(seat_for_roll(89, false), B);
        assert_eq!(seat_for_roll(90, false), X);
        assert_eq!(seat_for_roll(94, false), X);
        assert_eq!(seat_for_roll(95, true), V);
        assert_eq!(seat_for_roll(99, true), V);
        assert_eq!(seat_for_roll(95, false), A);
    }

    #[test]
    fn test_populate_keeps_vip_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut g = SeatGrid::new(12, 20);
        populate(&mut g, &mut rng);
        let band = vip_band(12);
        for (r, seats) in g.iter_rows().enumerate() {
            if !band.contains(&r) {
                assert!(seats.iter().all(|&s| s != V), "VIP outside band in row {r}");
            }
        }
        assert_eq!(g.total(), 240);
    }

    #[test]
    fn test_row_usability() {
        let g = grid(vec![
            vec![X, X, X],
            vec![B, V, B],
            vec![X, A, B],
        ]);
        assert!(!is_row_usable(&g, 0));
        assert!(!is_row_usable(&g, 1));
        assert!(is_row_usable(&g, 2));
        assert!(!is_row_usable(&g, 3));
    }

    #[test]
    fn test_block_rejects_broken_neighbours() {
        // seat 1 touches the broken seat at 0, so the first clean pair starts at 2
        let g = grid(vec![vec![X, A, A, A, A]]);
        assert_eq!(find_block_start(&g, 0, 2), Some(2));
        assert_eq!(find_block_start(&g, 0, 3), Some(2));
        assert_eq!(find_block_start(&g, 0, 4), None);
    }

    #[test]
    fn test_block_accepts_vip_seats() {
        let g = grid(vec![vec![B, V, A, V, B]]);
        assert!(can_seat_group_in_row(&g, 0, 3));
        assert_eq!(find_block_start(&g, 0, 3), Some(1));
    }

    #[test]
    fn test_group_size_bounds() {
        let g = grid(vec![vec![A, A, A]]);
        assert!(!can_seat_group_in_row(&g, 0, 0));
        assert!(!can_seat_group_in_row(&g, 0, 4));
        assert!(can_seat_group_in_row(&g, 0, 3));
        assert_eq!(suggest_best_row(&g, 0), None);
        assert_eq!(suggest_best_row(&g, 4), None);
    }

    #[test]
    fn test_best_row_prefers_most_available_then_lowest_index() {
        let g = grid(vec![
            vec![A, A, B, B],
            vec![A, A, A, B],
            vec![B, A, A, A],
            vec![A, A, B, B],
        ]);
        assert_eq!(suggest_best_row(&g, 2), Some(1));

        let tied = grid(vec![vec![B, B, B, B], vec![A, A, B, B], vec![B, B, A, A]]);
        assert_eq!(suggest_best_row(&tied, 2), Some(1));
    }

    #[test]
    fn test_book_group_leaves_vip_seats() {
        let mut g = grid(vec![vec![V, A, A, B]]);
        let block = book_group(&mut g, 3).unwrap();
        assert_eq!(block.row, 0);
        assert_eq!(block.start_col, 0);
        assert_eq!(g.row(0).unwrap(), &[V, B, B, B]);
    }

    #[test]
    fn test_book_group_without_room() {
        let mut g = grid(vec![vec![B, A, B]]);
        let before = g.clone();
        assert_eq!(
            book_group(&mut g, 2),
            Err(BookingError::NoQualifyingRow { group_size: 2 })
        );
        assert_eq!(g, before);
    }
}
