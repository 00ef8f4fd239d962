use battleships::{render, Board, Coord};

#[test]
fn test_render_labels_and_cells() {
    let mut board = Board::new(3).unwrap();
    board.mark_hit(Coord::new(0, 0));
    board.mark_miss(Coord::new(2, 2));
    let out = render(&board);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "    A B C");
    assert_eq!(lines[1], " 1  X . .");
    assert_eq!(lines[2], " 2  . . .");
    assert_eq!(lines[3], " 3  . . o");
}

#[test]
fn test_render_never_reveals_ships() {
    // Rendering reads cell states only; an untouched board with any fleet
    // renders entirely unknown.
    let board = Board::new(4).unwrap();
    let out = render(&board);
    assert!(!out.contains('X'));
    assert!(!out.contains('o'));
    assert_eq!(out.matches('.').count(), 16);
}
