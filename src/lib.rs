//! Terminal falling-block puzzle.
//!
//! `game` holds the engine (board, pieces, tick scheduling, scoring) and has no
//! terminal dependencies. `input` and `ui` are thin crossterm / ratatui adapters.

pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;
