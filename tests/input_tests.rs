use battleships::{coord_to_string, parse_coord, Coord, Game, GameConfig, GuessError, Side};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_parse_valid_coordinates() {
    assert_eq!(parse_coord("A1"), Some(Coord::new(0, 0)));
    assert_eq!(parse_coord("B7"), Some(Coord::new(6, 1)));
    assert_eq!(parse_coord("j10"), Some(Coord::new(9, 9)));
    assert_eq!(parse_coord("  C3  "), Some(Coord::new(2, 2)));
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert_eq!(parse_coord(""), None);
    assert_eq!(parse_coord("A"), None);
    assert_eq!(parse_coord("7B"), None);
    assert_eq!(parse_coord("A0"), None); // rows are numbered from 1
    assert_eq!(parse_coord("A-1"), None);
    assert_eq!(parse_coord("AA7"), None);
    assert_eq!(parse_coord("!3"), None);
}

#[test]
fn test_roundtrip_formatting() {
    for coord in [Coord::new(0, 0), Coord::new(6, 1), Coord::new(9, 9)] {
        assert_eq!(parse_coord(&coord_to_string(coord)), Some(coord));
    }
}

#[test]
fn test_filter_rejects_out_of_bounds_before_resolver() {
    let mut rng = SmallRng::seed_from_u64(9);
    let game = Game::new(&GameConfig::default(), &mut rng).unwrap();
    // "A11" parses but row 10 is off a size-10 board; the filter stops it.
    let coord = parse_coord("A11").unwrap();
    assert_eq!(
        game.validate_guess(Side::Player, coord),
        Err(GuessError::OutOfBounds {
            row: 10,
            col: 0,
            size: 10
        })
    );
    // Column K is off the board too.
    let coord = parse_coord("K1").unwrap();
    assert!(matches!(
        game.validate_guess(Side::Player, coord),
        Err(GuessError::OutOfBounds { .. })
    ));
}

#[test]
fn test_filter_rejects_duplicates() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut game = Game::new(&GameConfig::default(), &mut rng).unwrap();
    let coord = Coord::new(4, 4);
    assert_eq!(game.validate_guess(Side::Player, coord), Ok(()));
    game.take_turn(coord);
    assert_eq!(
        game.validate_guess(Side::Player, coord),
        Err(GuessError::Duplicate { row: 4, col: 4 })
    );
}
