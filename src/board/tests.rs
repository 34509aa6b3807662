use super::*;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Human.opponent(), Side::Machine);
    assert_eq!(Side::Machine.opponent(), Side::Human);
    assert_eq!(Side::Human.stone(), Stone::Human);
    assert_eq!(Stone::Machine.side(), Some(Side::Machine));
    assert_eq!(Stone::Empty.side(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos, Pos::CENTER);
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.row, 7);
    assert_eq!(pos2.col, 7);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::new(0, 0).is_valid());
    assert!(Pos::new(14, 14).is_valid());
    assert!(!Pos::new(-1, 0).is_valid());
    assert!(!Pos::new(0, -1).is_valid());
    assert!(!Pos::new(15, 0).is_valid());
    assert!(!Pos::new(0, 15).is_valid());
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_off_board_is_absent() {
    let mut board = Board::new();
    for pos in [Pos::new(-1, 3), Pos::new(3, -1), Pos::new(15, 0), Pos::new(0, 15), Pos::new(99, 99)] {
        assert!(!board.is_in_bounds(pos));
        assert!(!board.is_empty(pos));
        assert_eq!(board.get(pos), None);
        assert!(!board.is(pos, Stone::Empty));
        assert!(!board.place(pos, Side::Human));
        board.clear(pos);
    }
    assert!(board.is_board_empty());
}

#[test]
fn test_place_twice_fails_without_change() {
    let mut board = Board::new();
    assert!(board.place(Pos::new(3, 4), Side::Human));
    let before = board.clone();

    assert!(!board.place(Pos::new(3, 4), Side::Machine));
    assert!(!board.place(Pos::new(3, 4), Side::Human));
    assert_eq!(board, before);
    assert_eq!(board.get(Pos::new(3, 4)), Some(Stone::Human));
}

#[test]
fn test_clear_restores_empty() {
    let mut board = Board::new();
    let pos = Pos::new(14, 0);
    assert!(board.place(pos, Side::Machine));
    assert_eq!(board.stone_count(), 1);
    board.clear(pos);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
    // Clearing an empty cell is harmless
    board.clear(pos);
    assert!(board.is_empty(pos));
}

#[test]
fn test_stones_iterate_row_major_with_owner() {
    let mut board = Board::new();
    for pos in [Pos::new(14, 14), Pos::new(0, 3), Pos::new(4, 2)] {
        board.place(pos, Side::Human);
    }
    board.place(Pos::new(4, 1), Side::Machine);

    let stones: Vec<(Pos, Side)> = board.stones().collect();
    assert_eq!(
        stones,
        vec![
            (Pos::new(0, 3), Side::Human),
            (Pos::new(4, 1), Side::Machine),
            (Pos::new(4, 2), Side::Human),
            (Pos::new(14, 14), Side::Human),
        ]
    );
    assert_eq!(board.stone_count(), 4);
}

#[test]
fn test_stone_count_tracks_place_and_clear() {
    let mut board = Board::new();
    assert!(board.place(Pos::new(2, 2), Side::Human));
    assert!(!board.place(Pos::new(2, 2), Side::Machine));
    assert!(!board.place(Pos::new(2, 15), Side::Machine));
    assert_eq!(board.stone_count(), 1);

    board.clear(Pos::new(2, 2));
    board.clear(Pos::new(2, 2));
    board.clear(Pos::new(-3, 2));
    assert_eq!(board.stone_count(), 0);
    assert!(board.is_board_empty());
    assert_eq!(board.stones().count(), 0);
}

#[test]
fn test_snapshot_and_full_board() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        let side = if idx % 2 == 0 { Side::Human } else { Side::Machine };
        assert!(board.place(Pos::from_index(idx), side));
    }
    assert!(board.is_full());

    let cells = board.snapshot();
    assert_eq!(cells[0][0], Stone::Human);
    assert_eq!(cells[0][1], Stone::Machine);
    assert_eq!(cells[14][14], Stone::Human);
}
