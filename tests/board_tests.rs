//! Board tests - occupancy, bounds, and line-clear compaction

use tui_blockfall::core::Board;
use tui_blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(PieceKind::I));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
}

#[test]
fn test_board_set_out_of_bounds_is_silent() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));

    // Nothing changed anywhere.
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_is_occupied_and_bounds() {
    let mut board = Board::new();

    assert!(!board.is_occupied(5, 10));
    board.set(5, 10, Some(PieceKind::T));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_valid(5, 10));

    assert!(!board.is_occupied(-1, 0));
    assert!(board.is_out_of_bounds(-1, 0));
    assert!(board.is_out_of_bounds(BOARD_WIDTH as i8, 0));
    assert!(!board.is_out_of_bounds(0, 0));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();

    assert!(!board.is_row_full(5));
    fill_row(&mut board, 5);
    assert!(board.is_row_full(5));

    // One gap breaks it
    board.set(3, 5, None);
    assert!(!board.is_row_full(5));

    // Out-of-range row index is never full
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_clear_nonadjacent_rows_preserves_order() {
    // Rows 2 and 5 full, everything else has at least one gap.
    let mut board = Board::new();
    fill_row(&mut board, 2);
    fill_row(&mut board, 5);

    // Markers in partially-filled rows, top to bottom: A(1), B(3), C(4), D(6)
    board.set(0, 1, Some(PieceKind::J));
    board.set(1, 3, Some(PieceKind::L));
    board.set(2, 4, Some(PieceKind::S));
    board.set(3, 6, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);
    assert!(cleared.contains(&2));
    assert!(cleared.contains(&5));

    // Two empty rows inserted at the top.
    for y in 0..2 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }

    // Survivors keep their relative order: the marker above both cleared
    // rows drops by 2, those between them drop by 1, the one below stays.
    assert_eq!(board.get(0, 3), Some(Some(PieceKind::J)));
    assert_eq!(board.get(1, 4), Some(Some(PieceKind::L)));
    assert_eq!(board.get(2, 5), Some(Some(PieceKind::S)));
    assert_eq!(board.get(3, 6), Some(Some(PieceKind::Z)));
}

#[test]
fn test_clear_adjacent_rows_in_one_call() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y);
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 4);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_clear_whole_board_in_one_call() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        fill_row(&mut board, y);
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), BOARD_HEIGHT as usize);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_clear_returns_empty_when_no_full_rows() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::O));

    let cleared = board.clear_full_rows();
    assert!(cleared.is_empty());
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::O)));
}
