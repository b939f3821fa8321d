use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info, trace, warn};

use crate::config::GameConfig;
use crate::input::{Command, InputSource};
use crate::render::Renderer;
use crate::snake::{GameState, Tick};
use crate::term::GRID_TOP;

/// Drives a [`GameState`] at a fixed period and hands every frame to a
/// [`Renderer`]. Input is read between ticks on the same thread.
pub struct GameLoop<R: Renderer> {
    state: GameState,
    renderer: R,
    config: GameConfig,
}

impl<R: Renderer> GameLoop<R> {
    pub fn new(state: GameState, renderer: R, config: GameConfig) -> Self {
        GameLoop { state, renderer, config }
    }

    /// Runs until the player quits.
    pub fn run(&mut self, input: &mut impl InputSource) -> Result<()> {
        self.renderer.clear()?;
        self.renderer.draw(&self.state)?;

        let mut next_tick = Instant::now() + self.config.tick_period;

        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());

            if let Some(command) = input.next_command(timeout)? {
                if command == Command::Quit {
                    return Ok(());
                }
                self.handle(command)?;
            }

            // A slow frame only pushes the next tick back, ticks are never made up
            if Instant::now() >= next_tick {
                self.tick()?;
                next_tick = Instant::now() + self.config.tick_period;
            }
        }
    }

    pub fn tick(&mut self) -> Result<()> {
        self.renderer.clear()?;

        let outcome = self.state.advance();
        match outcome {
            Tick::Ate { score } => debug!(score, "food eaten"),
            Tick::Crashed { score } => info!(score, "game over"),
            Tick::Moved | Tick::Idle => trace!(?outcome, "tick"),
        }

        self.renderer.draw(&self.state)
    }

    pub fn handle(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Turn(dir) => {
                if !self.state.set_direction(dir) {
                    debug!(?dir, "reversal ignored");
                }
            }
            Command::Confirm => {
                if self.state.is_game_over() {
                    self.state.reset();
                    info!("new game");
                }
            }
            Command::Resize(cols, rows) => {
                // Too small to hold a board: keep the current one until the window grows again
                let (width, height) = (cols as i32, rows as i32 - GRID_TOP as i32);
                match self.state.resize(width, height) {
                    Ok(()) => info!(width, height, "board resized"),
                    Err(err) => warn!(%err, "resize ignored"),
                }
            }
            Command::Quit => {}
        }

        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
