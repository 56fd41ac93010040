use thiserror::Error;

use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::piece::Piece;
use crate::game::shape::ColorId;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Filled(ColorId),
}

impl Cell {
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

pub type Row = [Cell; BOARD_WIDTH];

const EMPTY_ROW: Row = [Cell::Empty; BOARD_WIDTH];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({x}, {y}) is outside the board")]
    OutOfRange { x: i32, y: i32 },
}

/// Locked cells, row 0 at the top. Always exactly `BOARD_HEIGHT` rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Row>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            rows: vec![EMPTY_ROW; BOARD_HEIGHT],
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || x >= BOARD_WIDTH as i32 || y < 0 || y >= BOARD_HEIGHT as i32 {
            return None;
        }
        Some((x as usize, y as usize))
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|(x, y)| self.rows[y][x])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), BoardError> {
        let (col, row) = Self::index(x, y).ok_or(BoardError::OutOfRange { x, y })?;
        self.rows[row][col] = cell;
        Ok(())
    }

    /// Space above the board (`y < 0`) is always free. Anything else outside
    /// the grid is a caller bug and reported as `OutOfRange`.
    pub fn is_occupied(&self, x: i32, y: i32) -> Result<bool, BoardError> {
        if y < 0 && (0..BOARD_WIDTH as i32).contains(&x) {
            return Ok(false);
        }
        self.cell(x, y)
            .map(Cell::is_filled)
            .ok_or(BoardError::OutOfRange { x, y })
    }

    /// Writes the piece's colour into every board cell it covers. Cells still
    /// above the top edge are dropped.
    pub fn place(&mut self, piece: &Piece) {
        for (x, y) in piece.blocks() {
            if let Some((col, row)) = Self::index(x, y) {
                self.rows[row][col] = Cell::Filled(piece.color);
            }
        }
    }

    /// Removes every full row, inserting an empty row at the top for each.
    /// Returns how many rows were removed.
    pub fn clear_completed_rows(&mut self) -> u32 {
        let mut lines_cleared = 0;
        let mut y = BOARD_HEIGHT;

        // Stay on the same index after a removal: the row above has shifted into it.
        while y > 0 {
            if self.rows[y - 1].iter().all(|cell| cell.is_filled()) {
                self.rows.remove(y - 1);
                self.rows.insert(0, EMPTY_ROW);
                lines_cleared += 1;
            } else {
                y -= 1;
            }
        }

        lines_cleared
    }
}
