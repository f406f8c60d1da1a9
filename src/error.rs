//! Errors reported by the predictor and the turn engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("the number of rounds must be at least 1")]
    InvalidRounds,
    #[error("the context length must be at least 1")]
    InvalidContextLength,
    #[error("expected a bit (0 or 1), got {0}")]
    InvalidBit(u8),
    #[error("the session already finished after {rounds} rounds")]
    SessionFinished { rounds: usize },
}

/// The broad class of an error, used by callers that decide whether to
/// re-prompt the player or abort the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad construction parameters.
    Config,
    /// A value outside of the input alphabet.
    InvalidInput,
    /// An operation that the current session state does not allow.
    Misuse,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidRounds | Error::InvalidContextLength => {
                ErrorKind::Config
            }
            Error::InvalidBit(_) => ErrorKind::InvalidInput,
            Error::SessionFinished { .. } => ErrorKind::Misuse,
        }
    }
}
