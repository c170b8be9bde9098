use armada::{can_place, place_fleet, Cells, Grid, Orientation, Ship, GRID_COLS, GRID_ROWS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new();
    place_fleet(&mut grid, &mut rng).unwrap();
    grid
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn can_place_iff_in_bounds_and_clear(
        seed in any::<u64>(),
        row in 0..GRID_ROWS + 2,
        col in 0..GRID_COLS + 2,
        len in 2u8..=5,
        orient in orientation(),
    ) {
        let grid = random_grid(seed);
        let ship = Ship::new(row, col, len, orient);
        let exits = match orient {
            Orientation::Horizontal => row >= GRID_ROWS || col + len > GRID_COLS,
            Orientation::Vertical => col >= GRID_COLS || row + len > GRID_ROWS,
        };
        let overlaps = !exits && ship.cells().any(|(r, c)| grid.is_occupied(r, c));
        prop_assert_eq!(can_place(&grid.occupied(), &ship), !exits && !overlaps);
    }

    #[test]
    fn random_fleet_never_overlaps(seed in any::<u64>()) {
        let grid = random_grid(seed);
        prop_assert_eq!(grid.occupied().count_ones(), 17);
        prop_assert_eq!(grid.remaining(), 17);
        let mut seen = Cells::new();
        for ship in grid.fleet().iter().flatten() {
            prop_assert!(ship.in_bounds());
            for (r, c) in ship.cells() {
                prop_assert!(seen.set(r as usize, c as usize).unwrap());
            }
        }
    }

    #[test]
    fn mark_attacked_true_then_false(row in 0..GRID_ROWS, col in 0..GRID_COLS) {
        let mut grid = Grid::new();
        prop_assert!(grid.mark_attacked(row, col).unwrap());
        prop_assert!(grid.is_attacked(row, col));
        prop_assert!(!grid.mark_attacked(row, col).unwrap());
        prop_assert!(grid.is_attacked(row, col));
    }

    #[test]
    fn remaining_drops_once_per_distinct_hit(seed in any::<u64>(), shots in 1usize..150) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = random_grid(seed);
        let mut distinct_hits = 0u8;
        for _ in 0..shots {
            let r = rng.random_range(0..GRID_ROWS);
            let c = rng.random_range(0..GRID_COLS);
            let before = grid.remaining();
            let first = grid.mark_attacked(r, c).unwrap();
            if first && grid.is_occupied(r, c) {
                let sunk = grid.register_hit();
                distinct_hits += 1;
                prop_assert_eq!(grid.remaining(), before - 1);
                prop_assert_eq!(sunk, grid.remaining() == 0);
            } else {
                prop_assert_eq!(grid.remaining(), before);
            }
        }
        prop_assert_eq!(grid.remaining(), 17 - distinct_hits);
    }
}
