pub mod board;
pub mod piece;
pub mod scheduler;
pub mod shape;
pub mod state;

pub use board::{Board, BoardError, Cell};
pub use piece::Piece;
pub use shape::{ColorId, Matrix, ShapeKind};
pub use state::{Command, GameState, GameStatus, TickOutcome};
