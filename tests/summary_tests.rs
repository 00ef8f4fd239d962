use battleships::{
    Board, Coord, Fleet, Game, JsonlSink, MemorySink, Outcome, RecordSink, ResultSummary, Ship,
    Side,
};

fn finished_game() -> Game {
    // One ship, generous budget: the player sinks it in three turns.
    let fleet = Fleet::new(vec![Ship::vertical("Ship1", Coord::new(0, 0), 3)]);
    let mut game = Game::with_fleet(Board::new(10).unwrap(), fleet, 10);
    game.take_turn(Coord::new(0, 0));
    game.take_turn(Coord::new(9, 9));
    game.take_turn(Coord::new(1, 0));
    game.take_turn(Coord::new(8, 8));
    game.take_turn(Coord::new(2, 0));
    game
}

#[test]
fn test_no_summary_before_game_ends() {
    let fleet = Fleet::new(vec![Ship::vertical("Ship1", Coord::new(0, 0), 3)]);
    let game = Game::with_fleet(Board::new(10).unwrap(), fleet, 10);
    assert!(game.summary("s", "Alice").is_none());
}

#[test]
fn test_summary_projects_finished_game() {
    let game = finished_game();
    assert_eq!(game.outcome(), Some(Outcome::Win));
    let summary = game.summary("abc123", "Alice").unwrap();
    assert_eq!(summary.session, "abc123");
    assert_eq!(summary.player, "Alice");
    assert_eq!(summary.player_hits, 3);
    assert_eq!(summary.opponent_hits, 0);
    assert_eq!(summary.outcome, "win");
    assert!(summary.timestamp > 0);
    assert_eq!(summary.player_hits, game.hits(Side::Player));
}

#[test]
fn test_memory_sink_collects_rows() {
    let game = finished_game();
    let summary = game.summary("abc123", "Alice").unwrap();
    let mut sink = MemorySink::new();
    sink.append(&summary).unwrap();
    sink.append(&summary).unwrap();
    assert_eq!(sink.rows(), &[summary.clone(), summary]);
}

#[test]
fn test_jsonl_sink_appends_parseable_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.jsonl");
    let mut sink = JsonlSink::new(&path);

    let game = finished_game();
    let first = game.summary("s1", "Alice").unwrap();
    let second = game.summary("s2", "Bob").unwrap();
    sink.append(&first).unwrap();
    sink.append(&second).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let rows: Vec<ResultSummary> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows, vec![first, second]);
}

#[test]
fn test_sink_failure_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory path cannot be opened for appending.
    let mut sink = JsonlSink::new(dir.path());
    let game = finished_game();
    let summary = game.summary("s", "Alice").unwrap();
    assert!(sink.append(&summary).is_err());
}
