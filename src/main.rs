use crossterm::{
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{
    io::{stdout, Stdout},
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use blockfall::config::Args;
use blockfall::constants::IDLE_POLL_MS;
use blockfall::game::{GameState, TickOutcome};
use blockfall::input::{handle_input, Flow};
use blockfall::logging;
use blockfall::ui::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args.settings()?;
    logging::init(args.log_file.as_deref())?;
    info!("starting with {:?}", settings);

    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    let mut game = GameState::new(settings);

    let result = run(&mut terminal, &mut game);

    // Always restore the terminal, even if the loop failed.
    restore_terminal(&mut terminal).context("failed to restore terminal")?;
    result?;

    println!("Final score: {}", game.score());
    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(terminal: &mut Tui, game: &mut GameState) -> Result<()> {
    game.start(Instant::now());

    loop {
        terminal.draw(|f| ui(f, game))?;

        // Sleep until the next tick unless a key arrives first.
        let timeout = game
            .next_tick_in(Instant::now())
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if handle_input(game, key, Instant::now()) == Flow::Quit {
                    info!("quit with score {}", game.score());
                    return Ok(());
                }
            }
        }

        if let Some(TickOutcome::GameOver { final_score }) = game.poll_tick(Instant::now()) {
            info!("session ended, final score {}", final_score);
        }
    }
}
