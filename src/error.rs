//! Error types for bombe setup.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BombeError>;

/// Everything that can go wrong while setting a bombe up.
///
/// Once a machine is built, trials never fail.
#[derive(Error, Debug)]
pub enum BombeError {
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    #[error("invalid wheel positions '{0}', expected three letters")]
    InvalidPositions(String),

    #[error("invalid signal '{0}', expected a bank letter and a wire letter")]
    InvalidSignal(String),

    #[error("invalid wiring '{spec}': {reason}")]
    InvalidWiring { spec: String, reason: String },

    #[error("unknown wheel '{0}'")]
    UnknownWheel(String),

    #[error("unknown reflector '{0}'")]
    UnknownReflector(String),

    #[error("menu is empty and no start signal was given")]
    EmptyMenu,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
