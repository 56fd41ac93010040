use rand::Rng;

/// Colour tag stored in locked cells. Mapped to a display colour by the renderer only.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ColorId {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ShapeKind {
    I, T, L, J, O, Z, S
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I, ShapeKind::T, ShapeKind::L, ShapeKind::J,
        ShapeKind::O, ShapeKind::Z, ShapeKind::S,
    ];

    /// Uniform pick among the seven catalog entries.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn color(self) -> ColorId {
        match self {
            ShapeKind::I => ColorId::Cyan,
            ShapeKind::T => ColorId::Blue,
            ShapeKind::L => ColorId::Orange,
            ShapeKind::J => ColorId::Yellow,
            ShapeKind::O => ColorId::Green,
            ShapeKind::Z => ColorId::Purple,
            ShapeKind::S => ColorId::Red,
        }
    }

    /// The spawn orientation of this shape, cropped to its bounding box.
    pub fn matrix(self) -> Matrix {
        let rows: Vec<Vec<u8>> = match self {
            ShapeKind::I => vec![vec![1, 1, 1, 1]],
            ShapeKind::T => vec![vec![1, 1, 1], vec![0, 1, 0]],
            ShapeKind::L => vec![vec![1, 1, 1], vec![1, 0, 0]],
            ShapeKind::J => vec![vec![1, 1, 1], vec![0, 0, 1]],
            ShapeKind::O => vec![vec![1, 1], vec![1, 1]],
            ShapeKind::Z => vec![vec![1, 1, 0], vec![0, 1, 1]],
            ShapeKind::S => vec![vec![0, 1, 1], vec![1, 1, 0]],
        };

        Matrix {
            cells: rows
                .iter()
                .map(|row| row.iter().map(|&v| v != 0).collect())
                .collect(),
        }
    }
}

/// Rectangular occupancy grid of a piece, indexed `[row][col]`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Matrix {
    cells: Vec<Vec<bool>>,
}

impl Matrix {
    /// Builds a matrix from rows. Returns `None` if the rows are empty or ragged.
    pub fn from_rows(cells: Vec<Vec<bool>>) -> Option<Self> {
        let width = cells.first()?.len();
        if width == 0 || cells.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self { cells })
    }

    pub fn width(&self) -> usize {
        self.cells[0].len()
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// `(col, row)` of every occupied cell.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell)
                .map(move |(col, _)| (col, row))
        })
    }

    /// Clockwise quarter turn: transpose with the row order reversed.
    /// The result has swapped dimensions.
    pub fn rotated_clockwise(&self) -> Self {
        let height = self.height();
        let width = self.width();
        let mut cells = vec![vec![false; height]; width];

        for i in 0..width {
            for j in 0..height {
                cells[i][j] = self.cells[height - 1 - j][i];
            }
        }

        Self { cells }
    }
}
