use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    InvalidGrid { width: i32, height: i32 },

    #[error("snake needs at least one segment")]
    InvalidStartingLength,
}
