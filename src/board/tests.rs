use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    assert_eq!(CENTER.to_index(), 7 * 15 + 7);
    assert_eq!(CENTER.to_index(), 112);

    let pos = Pos::from_index(112);
    assert_eq!(pos, Pos::new(7, 7));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_offset_stays_on_board() {
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(14, 14).offset(0, 1), None);
    assert_eq!(Pos::new(3, 3).offset(1, -1), Some(Pos::new(4, 2)));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_with_stone_restores_cell() {
    let mut board = Board::new();
    board.place_stone(CENTER, Stone::Black);
    let before = board.clone();

    let seen = board.with_stone(Pos::new(0, 0), Stone::White, |b| b.get(Pos::new(0, 0)));

    assert_eq!(seen, Stone::White);
    assert_eq!(board, before);
}

#[test]
fn test_copy_isolation() {
    let mut original = Board::new();
    original.place_stone(CENTER, Stone::Black);

    let mut copy = original.clone();
    copy.place_stone(Pos::new(1, 1), Stone::White);
    copy.remove_stone(CENTER);

    assert_eq!(original.get(CENTER), Stone::Black);
    assert!(original.is_empty(Pos::new(1, 1)));
    assert_eq!(original.stone_count(), 1);
}

#[test]
fn test_occupied_row_major() {
    let mut board = Board::new();
    board.place_stone(Pos::new(9, 2), Stone::White);
    board.place_stone(Pos::new(0, 14), Stone::Black);
    board.place_stone(Pos::new(9, 1), Stone::Black);

    let cells: Vec<Pos> = board.occupied().collect();
    assert_eq!(cells, vec![Pos::new(0, 14), Pos::new(9, 1), Pos::new(9, 2)]);
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_stone(Pos::from_index(idx), stone);
    }
    assert!(board.is_full());
    assert_eq!(board.occupied().count(), TOTAL_CELLS);
}

#[test]
fn test_display_marks_stones() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    board.place_stone(Pos::new(0, 1), Stone::White);

    let text = board.to_string();
    let first_row = text.lines().nth(1).unwrap();
    assert!(first_row.trim_start().starts_with("0  X  O  ."));
    assert_eq!(text.lines().count(), BOARD_SIZE + 1);
}

#[test]
fn test_index_round_trip_is_row_major() {
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        assert_eq!(pos.to_index(), idx);
        assert_eq!(usize::from(pos.row) * BOARD_SIZE + usize::from(pos.col), idx);
    }
}

#[test]
fn test_offset_matches_is_valid() {
    let corner = Pos::new(14, 0);
    for dr in -2..=2 {
        for dc in -2..=2 {
            let r = 14 + dr;
            let c = dc;
            assert_eq!(corner.offset(dr, dc).is_some(), Pos::is_valid(r, c), "step ({dr}, {dc})");
        }
    }
}

#[test]
fn test_color_bitboards_partition_occupied() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 3), Stone::Black);
    board.place_stone(Pos::new(9, 9), Stone::White);
    board.place_stone(Pos::new(14, 1), Stone::Black);

    let black: Vec<Pos> = board.black.iter_ones().collect();
    let white: Vec<Pos> = board.white.iter_ones().collect();
    assert_eq!(black, vec![Pos::new(0, 3), Pos::new(14, 1)]);
    assert_eq!(white, vec![Pos::new(9, 9)]);
    assert_eq!(board.occupied().count(), black.len() + white.len());
}
