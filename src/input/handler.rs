use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::debug;

use crate::game::{Command, GameState};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Input {
    Command(Command),
    TogglePause,
    Restart,
    Quit,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Quit,
}

impl Input {
    /// Maps a key press to an input. Releases, repeats and unbound keys map to `None`.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let input = match key.code {
            KeyCode::Left => Input::Command(Command::MoveLeft),
            KeyCode::Right => Input::Command(Command::MoveRight),
            KeyCode::Down => Input::Command(Command::SoftDrop),
            KeyCode::Up => Input::Command(Command::Rotate),
            KeyCode::Char('p') | KeyCode::Char('P') => Input::TogglePause,
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Input::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Input::Quit,
            _ => return None,
        };
        Some(input)
    }
}

pub fn handle_input(game: &mut GameState, key: KeyEvent, now: Instant) -> Flow {
    let Some(input) = Input::from_key(key) else {
        return Flow::Continue;
    };

    match input {
        Input::Command(command) => {
            // The engine ignores commands unless running.
            if !game.apply(command) {
                debug!("{:?} rejected", command);
            }
        }
        Input::TogglePause => game.toggle_pause(now),
        Input::Restart => game.start(now),
        Input::Quit => return Flow::Quit,
    }
    Flow::Continue
}
