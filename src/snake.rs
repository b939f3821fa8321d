use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::{FoodPlacement, GameConfig};
use crate::error::GameError;
use crate::geometry::{Direction::{self, *}, Position};

/// What a call to [`GameState::advance`] did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tick {
    /// The game is over, nothing moved
    Idle,
    Moved,
    Ate { score: u32 },
    Crashed { score: u32 },
}

/// Authoritative state of one game: the snake, its food and the score.
///
/// Positions are always kept inside the board; moving off an edge comes back
/// in on the opposite one. The head is the front of `snake`.
pub struct GameState {
    width: i32,
    height: i32,
    snake: VecDeque<Position>,
    food: Position,
    direction: Direction,
    score: u32,
    game_over: bool,
    starting_length: usize,
    food_placement: FoodPlacement,
    rng: StdRng,
}

impl GameState {
    pub fn new(width: i32, height: i32, config: &GameConfig) -> Result<Self, GameError> {
        Self::with_rng(width, height, config, StdRng::from_entropy())
    }

    pub fn with_rng(width: i32, height: i32, config: &GameConfig, rng: StdRng) -> Result<Self, GameError> {
        check_grid(width, height)?;
        if config.starting_length == 0 {
            return Err(GameError::InvalidStartingLength);
        }

        let mut state = GameState {
            width,
            height,
            snake: VecDeque::new(),
            food: Position::new(0, 0),
            direction: Right,
            score: 0,
            game_over: false,
            starting_length: config.starting_length,
            food_placement: config.food_placement,
            rng,
        };
        state.reset();
        Ok(state)
    }

    /// Puts the game back to its starting configuration on the current board.
    pub fn reset(&mut self) {
        self.direction = Right;

        self.snake.clear();
        self.snake.push_back(Position::new(self.width / 4, self.height / 4));
        while self.snake.len() < self.starting_length {
            self.add_segment();
        }

        self.score = 0;
        self.game_over = false;
        self.food = self.spawn_food();
    }

    /// Changes the heading unless it would turn the head straight back into
    /// the segment behind it. Returns whether the change was taken.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.snake.len() > 1 {
            let target = self.head().step(requested).wrapped(self.width, self.height);
            if target == self.snake[1] {
                return false;
            }
        }

        self.direction = requested;
        true
    }

    pub fn advance(&mut self) -> Tick {
        if self.game_over {
            return Tick::Idle;
        }

        let new_head = self.head().step(self.direction).wrapped(self.width, self.height);

        // Food counts as eaten while any segment, tail included, still sits on it
        let ate = self.snake.contains(&self.food);
        if ate {
            self.score += 1;
            self.food = self.spawn_food();
        } else {
            self.snake.pop_back();
        }

        if self.snake.contains(&new_head) {
            self.game_over = true;
        }

        self.snake.push_front(new_head);

        if self.game_over {
            Tick::Crashed { score: self.score }
        } else if ate {
            Tick::Ate { score: self.score }
        } else {
            Tick::Moved
        }
    }

    /// Moves the game onto a board of a different size, folding anything that
    /// falls outside back in. The game itself carries on.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), GameError> {
        check_grid(width, height)?;

        self.width = width;
        self.height = height;
        for segment in self.snake.iter_mut() {
            *segment = segment.wrapped(width, height);
        }
        self.food = self.food.wrapped(width, height);

        Ok(())
    }

    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    ///////////////////////////////////////////////////////////////////////////

    fn add_segment(&mut self) {
        if let Some(&tail) = self.snake.back() {
            let segment = tail.step(self.direction.reverse()).wrapped(self.width, self.height);
            self.snake.push_back(segment);
        }
    }

    fn spawn_food(&mut self) -> Position {
        if self.food_placement == FoodPlacement::AvoidSnake {
            let free: Vec<Position> = (0..self.height)
                .flat_map(|y| (0..self.width).map(move |x| Position::new(x, y)))
                .filter(|pos| !self.snake.contains(pos))
                .collect();

            if let Some(&pos) = free.choose(&mut self.rng) {
                return pos;
            }
        }

        Position::new(self.rng.gen_range(0..self.width), self.rng.gen_range(0..self.height))
    }
}

fn check_grid(width: i32, height: i32) -> Result<(), GameError> {
    if width <= 0 || height <= 0 {
        return Err(GameError::InvalidGrid { width, height });
    }
    Ok(())
}
