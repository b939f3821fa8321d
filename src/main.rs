mod config;
mod error;
mod game;
mod geometry;
mod input;
mod render;
mod snake;
mod term;

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;
use crate::game::GameLoop;
use crate::snake::GameState;
use crate::term::{TermInput, TermManager, GRID_TOP};

pub type TermInt = u16;
pub type Coords = (u16, u16);

const LOG_FILE: &str = "wrapsnake.log";

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::default();
    let (cols, rows) = terminal::size().context("Error reading size.")?;
    let state = GameState::new(cols as i32, rows as i32 - GRID_TOP as i32, &config)?;
    info!(width = state.width(), height = state.height(), "starting");

    let mut term = TermManager::stdout();
    term.setup()?;

    let mut game = GameLoop::new(state, term, config);
    let res = game.run(&mut TermInput);

    // The loop only returns on quit or error; either way hand the terminal back
    game.renderer_mut().restore()?;
    info!(score = game.state().score(), "quit");
    res
}

/// Logs go to a file, stdout belongs to the game.
fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path).with_context(|| format!("Error creating log file {:?}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
