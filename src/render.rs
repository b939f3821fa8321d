use anyhow::Result;

use crate::snake::GameState;

/// Something that can show a frame of the game.
///
/// Frames are not diffed: every tick calls `clear` and then draws the whole
/// state again.
pub trait Renderer {
    fn clear(&mut self) -> Result<()>;

    fn draw(&mut self, state: &GameState) -> Result<()>;
}
