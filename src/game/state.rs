use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Settings;
use crate::constants::POINTS_PER_LINE;
use crate::game::board::Board;
use crate::game::piece::{fits, Piece};
use crate::game::scheduler::TickScheduler;
use crate::game::shape::ShapeKind;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// Not running; nothing happened.
    Idle,
    /// The piece fell one row.
    Fell,
    /// The piece locked and a new one spawned.
    Locked { lines_cleared: u32 },
    /// The freshly spawned piece had no room. The session is over.
    GameOver { final_score: u32 },
}

pub struct GameState {
    board: Board,
    piece: Piece,
    score: u32,
    lines: u32,
    status: GameStatus,
    ticker: TickScheduler,
    rng: StdRng,
}

impl GameState {
    /// A fresh session with an empty board. The ticker stays idle until `start`.
    pub fn new(settings: Settings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let piece = Piece::spawn(ShapeKind::random(&mut rng));

        Self {
            board: Board::new(),
            piece,
            score: 0,
            lines: 0,
            status: GameStatus::Running,
            ticker: TickScheduler::new(settings.tick_interval),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn tick_interval(&self) -> Duration {
        self.ticker.interval()
    }

    /// Time until the next gravity step, `None` while paused or over.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until(now)
    }

    /// Starts or restarts the session from an empty board.
    pub fn start(&mut self, now: Instant) {
        self.board = Board::new();
        self.score = 0;
        self.lines = 0;
        self.piece = self.next_piece();
        self.status = GameStatus::Running;
        self.ticker.reschedule(now);
        info!("game started with {:?}", self.piece.kind);
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        match self.status {
            GameStatus::Running => {
                self.status = GameStatus::Paused;
                self.ticker.cancel();
                info!("paused at score {}", self.score);
            }
            GameStatus::Paused => {
                self.status = GameStatus::Running;
                self.ticker.reschedule(now);
                info!("resumed");
            }
            GameStatus::GameOver => {}
        }
    }

    /// Runs a gravity step if the ticker is due.
    pub fn poll_tick(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.ticker.poll(now) {
            Some(self.tick())
        } else {
            None
        }
    }

    /// One gravity step: fall a row, or lock, clear, score and respawn.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        if self.piece.can_occupy(&self.board, 0, 1) {
            self.piece.translate(0, 1);
            return TickOutcome::Fell;
        }

        self.board.place(&self.piece);
        let lines_cleared = self.board.clear_completed_rows();
        self.lines += lines_cleared;
        self.score += lines_cleared * POINTS_PER_LINE;
        debug!(
            "locked {:?} at ({}, {}), cleared {} line(s)",
            self.piece.kind, self.piece.x, self.piece.y, lines_cleared
        );

        self.piece = self.next_piece();
        if !self.piece.can_occupy(&self.board, 0, 0) {
            self.status = GameStatus::GameOver;
            self.ticker.cancel();
            info!("game over with score {}", self.score);
            return TickOutcome::GameOver { final_score: self.score };
        }

        TickOutcome::Locked { lines_cleared }
    }

    /// Applies a player command. Rejected moves are silent; returns whether the piece changed.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        match command {
            Command::MoveLeft => self.shift(-1, 0),
            Command::MoveRight => self.shift(1, 0),
            // Never locks; locking is left to the next tick.
            Command::SoftDrop => self.shift(0, 1),
            Command::Rotate => self.rotate(),
        }
    }

    fn shift(&mut self, dx: i32, dy: i32) -> bool {
        if !self.piece.can_occupy(&self.board, dx, dy) {
            return false;
        }
        self.piece.translate(dx, dy);
        true
    }

    fn rotate(&mut self) -> bool {
        let rotated = self.piece.rotate();
        if !fits(&self.board, &rotated, self.piece.x, self.piece.y) {
            return false;
        }
        self.piece.set_matrix(rotated);
        true
    }

    fn next_piece(&mut self) -> Piece {
        Piece::spawn(ShapeKind::random(&mut self.rng))
    }
}
