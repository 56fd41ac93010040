use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::board::Board;
use crate::game::shape::{ColorId, Matrix, ShapeKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: ShapeKind,
    pub matrix: Matrix,
    pub color: ColorId,
    pub x: i32,
    pub y: i32,
}

/// Whether `matrix` anchored at `(x, y)` stays inside the side walls and above
/// the floor without overlapping a locked cell. Rows above the board never collide.
pub fn fits(board: &Board, matrix: &Matrix, x: i32, y: i32) -> bool {
    matrix.filled().all(|(col, row)| {
        let bx = x + col as i32;
        let by = y + row as i32;

        if bx < 0 || bx >= BOARD_WIDTH as i32 || by >= BOARD_HEIGHT as i32 {
            return false;
        }
        by < 0 || !board.is_occupied(bx, by).unwrap_or(true)
    })
}

impl Piece {
    /// A fresh piece in spawn orientation, centred horizontally on the top row.
    pub fn spawn(kind: ShapeKind) -> Self {
        let matrix = kind.matrix();
        let x = (BOARD_WIDTH / 2) as i32 - (matrix.width() / 2) as i32;

        Self {
            kind,
            color: kind.color(),
            matrix,
            x,
            y: 0,
        }
    }

    pub fn can_occupy(&self, board: &Board, dx: i32, dy: i32) -> bool {
        fits(board, &self.matrix, self.x + dx, self.y + dy)
    }

    /// Unchecked move. Callers validate with `can_occupy` first.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// The clockwise rotation of the current matrix. Does not modify the piece.
    pub fn rotate(&self) -> Matrix {
        self.matrix.rotated_clockwise()
    }

    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
    }

    /// Absolute board coordinates of every occupied cell.
    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.matrix
            .filled()
            .map(move |(col, row)| (self.x + col as i32, self.y + row as i32))
    }
}
