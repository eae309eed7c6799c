use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown maze preset: {0}")]
    UnknownPreset(String),
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),
    #[error("Invalid maze dimensions {width}x{height}, both must be at least 1")]
    InvalidDimensions { width: u8, height: u8 },
    #[error("Game already finished, no new moves are accepted")]
    AlreadyFinished,
}

pub type Result<T> = core::result::Result<T, GameError>;
