//! Error types for Disha

use thiserror::Error;

/// Disha error type
///
/// Geometric constraint violations (blocked moves, wall clamping, authoring
/// under the robot) are not errors; they are reported through
/// [`MoveOutcome`](crate::lattice::MoveOutcome), [`Clamp`](crate::arena::Clamp)
/// and [`CellEdit`](crate::lattice::CellEdit).
#[derive(Error, Debug)]
pub enum DishaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid command: {0}")]
    Command(String),

    #[error("Thread error: {0}")]
    Thread(String),
}

impl From<toml::de::Error> for DishaError {
    fn from(e: toml::de::Error) -> Self {
        DishaError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for DishaError {
    fn from(e: toml::ser::Error) -> Self {
        DishaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DishaError>;
