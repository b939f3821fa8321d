use std::time::Duration;

/// Where new food may appear.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FoodPlacement {
    /// Any cell, including ones the snake covers.
    Anywhere,
    /// Only cells the snake does not cover. Falls back to `Anywhere` on a
    /// full board.
    AvoidSnake,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Time between two calls to `advance`
    pub tick_period: Duration,
    /// Segments in a fresh snake, head included
    pub starting_length: usize,
    pub food_placement: FoodPlacement,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tick_period: Duration::from_millis(50),
            starting_length: 10,
            food_placement: FoodPlacement::Anywhere,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.tick_period, Duration::from_millis(50));
        assert_eq!(config.starting_length, 10);
        assert_eq!(config.food_placement, FoodPlacement::Anywhere);
    }
}
