use std::io::{stdout, BufWriter, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{cursor, event, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use crate::geometry::Position;
use crate::input::{command_for, Command, InputSource};
use crate::render::Renderer;
use crate::snake::GameState;
use crate::{Coords, TermInt};

/// Terminal row where board row 0 is drawn; the score bar sits above it.
pub const GRID_TOP: TermInt = 1;

const HEAD_COLOR: Color = Color::Green;
const BODY_COLOR: Color = Color::DarkGreen;
const FOOD_COLOR: Color = Color::White;

const GAME_OVER_MSG: &str = "Game over, press enter to try again!";

pub struct TermManager<W: Write> {
    out: W,
}

impl TermManager<BufWriter<Stdout>> {
    /// Buffered so a whole frame reaches the terminal in one write.
    pub fn stdout() -> Self {
        TermManager::new(BufWriter::with_capacity(1 << 16, stdout()))
    }
}

impl<W: Write> TermManager<W> {
    pub fn new(out: W) -> Self {
        TermManager { out }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.out, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.out, cursor::Hide, cursor::DisableBlinking).context("Error hiding cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error disabling raw mode")?;
        execute!(self.out, style::ResetColor, cursor::Show, cursor::EnableBlinking)
            .context("Error showing cursor")?;
        execute!(self.out, LeaveAlternateScreen).context("Error leaving alt screen")?;
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: Coords, text: &str, fg: Color, bg: Color) -> Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(fg),
            style::SetBackgroundColor(bg),
            style::Print(text),
            style::ResetColor
        )?;
        Ok(())
    }

    fn fill_cell(&mut self, pos: Position, color: Color) -> Result<()> {
        self.print_at(to_screen(pos), " ", color, color)
    }

    fn draw_score_bar(&mut self, width: TermInt, score: u32) -> Result<()> {
        let text = fit(&format!("Score {}", score), width as usize, false);
        self.print_at((0, 0), &text, Color::Black, Color::White)
    }

    /// Paints a filled box and centers `line` on its middle row.
    fn show_message(&mut self, top_left: Coords, width: TermInt, height: TermInt, line: &str) -> Result<()> {
        let blank = " ".repeat(width as usize);
        let text = fit(line, width as usize, true);

        for y_diff in 0..height {
            let row = if y_diff == height / 2 { &text } else { &blank };
            self.print_at((top_left.0, top_left.1 + y_diff), row, Color::Black, Color::White)?;
        }

        Ok(())
    }
}

impl<W: Write> Renderer for TermManager<W> {
    fn clear(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All)).context("Error clearing.")?;
        Ok(())
    }

    fn draw(&mut self, state: &GameState) -> Result<()> {
        let (width, height) = (state.width() as TermInt, state.height() as TermInt);

        self.draw_score_bar(width, state.score())?;

        for (i, segment) in state.snake().iter().enumerate() {
            let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
            self.fill_cell(*segment, color)?;
        }

        self.fill_cell(state.food(), FOOD_COLOR)?;

        if state.is_game_over() {
            let top_left = (width / 4, GRID_TOP + height / 4);
            self.show_message(top_left, (width / 2).max(1), (height / 2).max(1), GAME_OVER_MSG)?;
        }

        self.out.flush().context("Error flushing.")?;
        Ok(())
    }
}

/// Keyboard and resize events from the terminal the game runs in.
pub struct TermInput;

impl InputSource for TermInput {
    fn next_command(&mut self, timeout: Duration) -> Result<Option<Command>> {
        if !event::poll(timeout).context("Error polling events")? {
            return Ok(None);
        }

        let ev = event::read().context("Error reading event")?;
        Ok(command_for(&ev))
    }
}

fn to_screen(pos: Position) -> Coords {
    (pos.x as TermInt, pos.y as TermInt + GRID_TOP)
}

/// Pads or cuts `text` to exactly `width` characters.
fn fit(text: &str, width: usize, centered: bool) -> String {
    let cut: String = text.chars().take(width).collect();
    if centered {
        format!("{: ^width$}", cut, width = width)
    } else {
        format!("{: <width$}", cut, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn render(state: &GameState) -> String {
        let mut term = TermManager::new(Vec::new());
        term.clear().unwrap();
        term.draw(state).unwrap();
        String::from_utf8(term.into_inner()).unwrap()
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Score 3", 10, false), "Score 3   ");
        assert_eq!(fit("abc", 7, true), "  abc  ");
        assert_eq!(fit("abcdef", 3, true), "abc");
    }

    #[test]
    fn test_grid_sits_below_score_bar() {
        assert_eq!(to_screen(Position::new(0, 0)), (0, 1));
        assert_eq!(to_screen(Position::new(12, 4)), (12, 5));
    }

    #[test]
    fn test_frame_shows_score() {
        let state = GameState::with_rng(30, 10, &GameConfig::default(), StdRng::seed_from_u64(3)).unwrap();
        let frame = render(&state);

        assert!(frame.contains("Score 0"));
        assert!(!frame.contains(GAME_OVER_MSG));
    }

    #[test]
    fn test_frame_shows_game_over() {
        // Longer than the board is wide, so the first step runs into the body
        let config = GameConfig { starting_length: 85, ..GameConfig::default() };
        let mut state = GameState::with_rng(80, 12, &config, StdRng::seed_from_u64(3)).unwrap();
        state.advance();
        assert!(state.is_game_over());

        let frame = render(&state);
        assert!(frame.contains(GAME_OVER_MSG));
    }
}
