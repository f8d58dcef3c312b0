//! render.rs
//!
//! Text renderings of the seating grid. Nothing here mutates state; the
//! symbols are part of the output contract and are covered by golden tests.

use std::fmt::Write;

use crate::models::SeatGrid;
use crate::services::vip_rows;

pub const CODES_LEGEND: &str = "Legend: 0=available, 1=booked, 2=broken, 3=VIP";
const LAYOUT_HEADER: &str = "Row  | Seats (R=Regular, V=VIP, _=Available)";
const LAYOUT_DIVIDER: &str = "-----|----------------------------------------";

/// Numeric-code printout: column numbers on top, `Row r:` lines, legend below.
pub fn seating_codes(grid: &SeatGrid) -> String {
    let mut out = String::from("--- SEATING ---\n     ");
    for c in 0..grid.cols() {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');

    for (r, seats) in grid.iter_rows().enumerate() {
        let _ = write!(out, "Row {}:", r);
        for seat in seats {
            let _ = write!(out, " {}", seat.code());
        }
        out.push('\n');
    }

    out.push_str(CODES_LEGEND);
    out.push('\n');
    out
}

/// Letter layout with VIP-eligible rows labelled.
pub fn seating_layout(grid: &SeatGrid, vip_rows: usize) -> String {
    let mut out = format!("--- SEATING LAYOUT ---\n{}\n{}\n", LAYOUT_HEADER, LAYOUT_DIVIDER);

    for (r, seats) in grid.iter_rows().enumerate() {
        let _ = write!(out, "  {}  | ", r);
        for seat in seats {
            let _ = write!(out, "{} ", seat.symbol());
        }
        if vip_rows::is_vip_row(r, vip_rows) {
            out.push_str(" (VIP)");
        }
        out.push('\n');
    }

    out.push_str(LAYOUT_DIVIDER);
    out.push('\n');
    out
}

/// Occupancy of one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSummary {
    pub row: usize,
    pub vip: bool,
    pub available: usize,
    pub booked: usize,
    pub broken: usize,
    pub percent_full: f64,
}

pub fn row_summaries(grid: &SeatGrid, is_vip_row: impl Fn(usize) -> bool) -> Vec<RowSummary> {
    grid.iter_rows()
        .enumerate()
        .map(|(r, seats)| {
            let available = seats.iter().filter(|s| s.is_available()).count();
            let booked = seats.iter().filter(|s| s.is_occupied()).count();
            let broken = seats.iter().filter(|s| s.is_broken()).count();
            let percent_full = if seats.is_empty() {
                0.0
            } else {
                booked as f64 * 100.0 / seats.len() as f64
            };
            RowSummary {
                row: r,
                vip: is_vip_row(r),
                available,
                booked,
                broken,
                percent_full,
            }
        })
        .collect()
}

/// Per-row report followed by totals. Percentages are rounded half away
/// from zero.
pub fn row_analysis(summaries: &[RowSummary]) -> String {
    let mut out = String::from("--- ROW ANALYSIS ---\n");
    let mut total_available = 0;
    let mut total_booked = 0;
    let mut total_seats = 0;

    for s in summaries {
        let label = if s.vip { " [VIP]" } else { "" };
        let _ = write!(
            out,
            "Row {}{}: {} available, {} booked",
            s.row, label, s.available, s.booked
        );
        if s.broken > 0 {
            let _ = write!(out, ", {} broken", s.broken);
        }
        let _ = writeln!(out, " ({:.0}% full)", s.percent_full.round());

        total_available += s.available;
        total_booked += s.booked;
        total_seats += s.available + s.booked + s.broken;
    }

    let overall = if total_seats == 0 {
        0.0
    } else {
        total_booked as f64 * 100.0 / total_seats as f64
    };
    let _ = writeln!(
        out,
        "\nTotal: {} available, {} booked. Overall occupancy: {:.0}%",
        total_available,
        total_booked,
        overall.round()
    );
    out
}
