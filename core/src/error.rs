use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside of the board")]
    OutOfBounds,
    #[error("Too many mines for the board size")]
    TooManyMines,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("No cards left in the deck")]
    EmptyDeck,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to encode or decode game state: {0}")]
    Json(#[from] serde_json::Error),
}
