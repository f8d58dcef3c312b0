use super::Seat;

/// Row-major seat storage with fixed dimensions.
///
/// All accessors are bounds-checked and return `None`/`false` instead of
/// panicking, so callers can pass unchecked indices straight through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    rows: usize,
    cols: usize,
    seats: Vec<Seat>,
}

impl SeatGrid {
    /// Grid with every seat `Available`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows or cannot be allocated. Use
    /// [`SeatGrid::try_new`] for sizes that come from outside.
    pub fn new(rows: usize, cols: usize) -> Self {
        SeatGrid {
            rows,
            cols,
            seats: vec![Seat::Available; rows * cols],
        }
    }

    /// Like [`SeatGrid::new`], but returns `None` when the seat count
    /// overflows `usize` or the storage cannot be reserved.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        let total = rows.checked_mul(cols)?;
        let mut seats = Vec::new();
        seats.try_reserve_exact(total).ok()?;
        seats.resize(total, Seat::Available);
        Some(SeatGrid { rows, cols, seats })
    }

    /// Builds a grid from explicit rows. Returns `None` when the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<Seat>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        let row_count = rows.len();
        let seats = rows.into_iter().flatten().collect();
        Some(SeatGrid { rows: row_count, cols, seats })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn total(&self) -> usize {
        self.seats.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Seat> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.seats.get(row * self.cols + col).copied()
    }

    /// Overwrites one seat. Returns `false` for out-of-range coordinates.
    pub fn set(&mut self, row: usize, col: usize, seat: Seat) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        match self.seats.get_mut(row * self.cols + col) {
            Some(slot) => {
                *slot = seat;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, row: usize) -> Option<&[Seat]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.seats.get(start..start + self.cols)
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> Option<&mut [Seat]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.seats.get_mut(start..start + self.cols)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Seat]> {
        // chunks(0) panics, and a zero-column grid has no seats anyway
        self.seats.chunks(self.cols.max(1))
    }

    pub fn count(&self, seat: Seat) -> usize {
        self.count_where(|s| s == seat)
    }

    pub fn count_where(&self, pred: impl Fn(Seat) -> bool) -> usize {
        self.seats.iter().filter(|&&s| pred(s)).count()
    }

    pub fn count_in_row(&self, row: usize, seat: Seat) -> usize {
        self.row(row)
            .map_or(0, |r| r.iter().filter(|&&s| s == seat).count())
    }
}
