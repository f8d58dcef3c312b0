use cinema_seating::{BookingRequest, Profile, Seat, SeatGrid, SeatingEngine};
use proptest::prelude::*;

fn seat_class() -> BoxedStrategy<Seat> {
    prop_oneof![
        4 => Just(Seat::Available),
        2 => Just(Seat::Booked),
        1 => Just(Seat::Broken),
        1 => Just(Seat::Vip),
    ]
    .boxed()
}

fn booking_outcome() -> BoxedStrategy<Seat> {
    prop_oneof![
        3 => Just(Seat::Available),
        1 => Just(Seat::RegularBooked),
        1 => Just(Seat::VipBooked),
    ]
    .boxed()
}

fn grid_of(seat: BoxedStrategy<Seat>) -> impl Strategy<Value = SeatGrid> {
    (1usize..8, 1usize..10).prop_flat_map(move |(rows, cols)| {
        prop::collection::vec(prop::collection::vec(seat.clone(), cols), rows)
            .prop_map(|rows| SeatGrid::from_rows(rows).unwrap())
    })
}

/// Small sizes plus values that overflow any `start_col + size` sum.
fn group_size() -> impl Strategy<Value = usize> {
    prop_oneof![
        8 => 0usize..11,
        1 => Just(usize::MAX),
        1 => (usize::MAX - 10)..=usize::MAX,
    ]
}

fn engines() -> impl Strategy<Value = SeatingEngine> {
    prop_oneof![
        grid_of(seat_class()).prop_map(|g| SeatingEngine::from_grid(g, Profile::RandomFill)),
        grid_of(booking_outcome()).prop_map(|g| SeatingEngine::from_grid(g, Profile::vip_rows())),
    ]
}

proptest! {
    #[test]
    fn counts_partition_the_grid(grid in grid_of(seat_class())) {
        let engine = SeatingEngine::from_grid(grid, Profile::RandomFill);
        prop_assert_eq!(
            engine.available_count() + engine.booked_count() + engine.broken_count() + engine.vip_count(),
            engine.rows() * engine.cols()
        );
    }

    #[test]
    fn occupancy_is_booked_plus_vip(engine in engines()) {
        let total = engine.rows() * engine.cols();
        let expected = (engine.booked_count() + engine.vip_count()) as f64 * 100.0 / total as f64;
        prop_assert_eq!(engine.occupancy_rate(), expected);
    }

    #[test]
    fn vip_rows_counts_cover_the_grid(grid in grid_of(booking_outcome())) {
        let engine = SeatingEngine::from_grid(grid, Profile::vip_rows());
        prop_assert_eq!(engine.available_count() + engine.booked_count(), engine.rows() * engine.cols());
        prop_assert_eq!(engine.vip_count(), 0);
    }

    #[test]
    fn occupancy_stays_in_bounds(engine in engines()) {
        let rate = engine.occupancy_rate();
        prop_assert!((0.0..=100.0).contains(&rate));
    }

    #[test]
    fn fit_check_agrees_with_locator(engine in engines(), row in 0usize..9, size in group_size()) {
        let fits = engine.can_seat_group_in_row(row, size);
        match engine.find_block_start(row, size) {
            Some(start) => {
                prop_assert!(fits);
                prop_assert!(start + size <= engine.cols());
            }
            None => prop_assert!(!fits),
        }
        // repeated queries see the same grid
        prop_assert_eq!(fits, engine.can_seat_group_in_row(row, size));
        prop_assert_eq!(engine.is_row_usable(row), engine.is_row_usable(row));
    }

    #[test]
    fn suggested_row_can_seat_the_group(engine in engines(), size in 0usize..11) {
        if let Some(row) = engine.suggest_best_row(size) {
            prop_assert!(engine.can_seat_group_in_row(row, size));
        } else {
            prop_assert!((0..engine.rows()).all(|r| !engine.can_seat_group_in_row(r, size)));
        }
    }

    #[test]
    fn placed_booking_is_all_or_nothing(
        grid in grid_of(booking_outcome()),
        row in 0usize..9,
        start_col in 0usize..11,
        size in group_size(),
        vip in any::<bool>(),
    ) {
        let mut engine = SeatingEngine::from_grid(grid, Profile::vip_rows());
        let before = engine.grid().clone();
        let request = BookingRequest::Placed { row, start_col, group_size: size, vip };

        match engine.try_book_group(request) {
            Ok(block) => {
                for c in start_col..start_col + size {
                    prop_assert_eq!(before.get(row, c), Some(Seat::Available));
                    prop_assert_eq!(engine.seat(row, c), Some(block.seat));
                }
                prop_assert_eq!(engine.available_count() + size, before.count(Seat::Available));
            }
            Err(_) => prop_assert_eq!(engine.grid(), &before),
        }
    }

    #[test]
    fn auto_booking_never_touches_broken_or_vip(grid in grid_of(seat_class()), size in 1usize..10) {
        let mut engine = SeatingEngine::from_grid(grid, Profile::RandomFill);
        let broken = engine.broken_count();
        let vip = engine.vip_count();
        let before = engine.grid().clone();

        if engine.book_group(BookingRequest::Auto { group_size: size }) {
            let converted = before.count(Seat::Available) - engine.available_count();
            prop_assert!(converted <= size);
            prop_assert_eq!(engine.count(Seat::Booked), before.count(Seat::Booked) + converted);
        } else {
            prop_assert_eq!(engine.grid(), &before);
        }
        prop_assert_eq!(engine.broken_count(), broken);
        prop_assert_eq!(engine.vip_count(), vip);
    }
}
