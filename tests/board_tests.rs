//! Board tests: occupancy, placement and line clearing

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use blockfall::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use blockfall::game::{Board, BoardError, Cell, ColorId, Piece, ShapeKind};

fn fill_row(board: &mut Board, y: i32, color: ColorId) {
    for x in 0..BOARD_WIDTH as i32 {
        board.set(x, y, Cell::Filled(color)).unwrap();
    }
}

fn filled_count(board: &Board) -> usize {
    board.rows().iter().flatten().filter(|c| c.is_filled()).count()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.rows().len(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.is_occupied(x, y), Ok(false), "({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();
    let cell = Cell::Filled(ColorId::Red);

    assert_eq!(board.set(-1, 0, cell), Err(BoardError::OutOfRange { x: -1, y: 0 }));
    assert_eq!(board.set(0, -1, cell), Err(BoardError::OutOfRange { x: 0, y: -1 }));
    assert!(board.set(BOARD_WIDTH as i32, 0, cell).is_err());
    assert!(board.set(0, BOARD_HEIGHT as i32, cell).is_err());
    assert_eq!(board, Board::new());
}

#[test]
fn test_board_place_writes_piece_color() {
    let mut board = Board::new();
    let mut piece = Piece::spawn(ShapeKind::T);
    piece.y = 10;

    board.place(&piece);

    // T spawns as [111][010] at x = 4
    for x in 4..7 {
        assert_eq!(board.cell(x, 10), Some(Cell::Filled(ColorId::Blue)));
    }
    assert_eq!(board.cell(5, 11), Some(Cell::Filled(ColorId::Blue)));
    assert_eq!(board.cell(4, 11), Some(Cell::Empty));
    assert_eq!(filled_count(&board), 4);
}

#[test]
fn test_board_place_drops_cells_above_top() {
    let mut board = Board::new();
    let mut piece = Piece::spawn(ShapeKind::O);
    piece.y = -1;

    board.place(&piece);

    assert_eq!(filled_count(&board), 2);
    assert!(board.cell(4, 0).unwrap().is_filled());
    assert!(board.cell(5, 0).unwrap().is_filled());
}

#[test]
fn test_board_clear_no_full_rows() {
    let mut board = Board::new();
    board.set(0, 19, Cell::Filled(ColorId::Green)).unwrap();
    let before = board.clone();

    assert_eq!(board.clear_completed_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_board_clear_single_row_shifts_rows_above() {
    let mut board = Board::new();
    fill_row(&mut board, 19, ColorId::Red);
    board.set(3, 18, Cell::Filled(ColorId::Cyan)).unwrap();
    board.set(7, 10, Cell::Filled(ColorId::Yellow)).unwrap();

    assert_eq!(board.clear_completed_rows(), 1);

    assert_eq!(board.cell(3, 19), Some(Cell::Filled(ColorId::Cyan)));
    assert_eq!(board.cell(7, 11), Some(Cell::Filled(ColorId::Yellow)));
    assert!(board.rows()[0].iter().all(|c| *c == Cell::Empty));
    assert_eq!(filled_count(&board), 2);
}

#[test]
fn test_board_clear_separated_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19, ColorId::Red);
    fill_row(&mut board, 17, ColorId::Red);
    board.set(0, 18, Cell::Filled(ColorId::Blue)).unwrap();
    board.set(0, 16, Cell::Filled(ColorId::Green)).unwrap();
    board.set(0, 5, Cell::Filled(ColorId::Orange)).unwrap();

    assert_eq!(board.clear_completed_rows(), 2);

    // Row 18 sat above one cleared row, rows 16 and 5 above two.
    assert_eq!(board.cell(0, 19), Some(Cell::Filled(ColorId::Blue)));
    assert_eq!(board.cell(0, 18), Some(Cell::Filled(ColorId::Green)));
    assert_eq!(board.cell(0, 7), Some(Cell::Filled(ColorId::Orange)));
    assert_eq!(filled_count(&board), 3);
}

#[test]
fn test_board_clear_four_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, ColorId::Purple);
    }

    assert_eq!(board.clear_completed_rows(), 4);
    assert_eq!(board, Board::new());
}

#[test]
fn test_board_clear_preserves_dimensions() {
    let mut rng = StdRng::seed_from_u64(0xB10C);

    for _ in 0..200 {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i32 {
            // Roughly a third of the rows full, the rest sparse.
            let full = rng.gen_bool(0.3);
            for x in 0..BOARD_WIDTH as i32 {
                if full || rng.gen_bool(0.5) {
                    board.set(x, y, Cell::Filled(ColorId::Red)).unwrap();
                }
            }
        }

        let full_rows = board
            .rows()
            .iter()
            .filter(|row| row.iter().all(|c| c.is_filled()))
            .count();
        let before = filled_count(&board);

        let cleared = board.clear_completed_rows() as usize;

        assert_eq!(cleared, full_rows);
        assert_eq!(board.rows().len(), BOARD_HEIGHT);
        assert!(board.rows().iter().all(|row| row.len() == BOARD_WIDTH));
        assert_eq!(filled_count(&board), before - cleared * BOARD_WIDTH);
        assert!(board.rows()[..cleared].iter().flatten().all(|c| *c == Cell::Empty));
        assert!(!board.rows().iter().any(|row| row.iter().all(|c| c.is_filled())));
    }
}
