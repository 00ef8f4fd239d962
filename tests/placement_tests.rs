use battleships::{generate_fleet, SetupError};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_default_config_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let fleet = generate_fleet(10, 4, 3, &mut rng).unwrap();
    assert_eq!(fleet.len(), 4);
    assert_eq!(fleet.total_cells(), 12);
}

#[test]
fn test_same_seed_same_fleet() {
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    let fleet1 = generate_fleet(10, 4, 3, &mut rng1).unwrap();
    let fleet2 = generate_fleet(10, 4, 3, &mut rng2).unwrap();
    assert_eq!(fleet1, fleet2);
}

#[test]
fn test_invalid_parameters_rejected() {
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        generate_fleet(2, 1, 1, &mut rng).unwrap_err(),
        SetupError::InvalidBoardSize(2)
    );
    assert_eq!(
        generate_fleet(30, 1, 3, &mut rng).unwrap_err(),
        SetupError::InvalidBoardSize(30)
    );
    assert!(matches!(
        generate_fleet(5, 1, 0, &mut rng).unwrap_err(),
        SetupError::InvalidShipLength { length: 0, .. }
    ));
    assert!(matches!(
        generate_fleet(5, 1, 6, &mut rng).unwrap_err(),
        SetupError::InvalidShipLength { length: 6, .. }
    ));
}

#[test]
fn test_overfull_board_fails_with_placement_error() {
    // A 3x3 board fits at most one length-3 run per column.
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(matches!(
        generate_fleet(3, 4, 3, &mut rng).unwrap_err(),
        SetupError::Placement { ship_count: 4, .. }
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// For every feasible configuration (at most one ship per column), the
    /// generator terminates with the requested number of vertical, in-bounds,
    /// pairwise-disjoint ships.
    #[test]
    fn generated_fleets_are_valid(
        seed in any::<u64>(),
        size in 3usize..=12,
        ships_frac in 0.0f64..1.0,
    ) {
        let ship_count = 1 + (ships_frac * (size - 1) as f64) as usize;
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = generate_fleet(size, ship_count, 3, &mut rng).unwrap();
        prop_assert_eq!(fleet.len(), ship_count);

        let mut seen = std::collections::BTreeSet::new();
        for ship in fleet.ships() {
            let cells = ship.cells();
            prop_assert_eq!(cells.len(), 3);
            for (i, coord) in cells.iter().enumerate() {
                prop_assert!(coord.row < size && coord.col < size);
                // vertical, contiguous, increasing rows
                prop_assert_eq!(coord.col, cells[0].col);
                prop_assert_eq!(coord.row, cells[0].row + i);
                prop_assert!(seen.insert(*coord), "ships overlap at {:?}", coord);
            }
        }
    }
}
