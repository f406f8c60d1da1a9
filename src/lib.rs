pub mod engine;
pub mod error;
pub mod models;

pub use engine::{Engine, LogRow, RoundRecord, Summary, LOG_COLUMNS};
pub use error::{Error, ErrorKind, Result};

/// A single binary symbol. Only the values 0 and 1 are valid.
pub type Bit = u8;

/// Returns true if 'bit' is one of the two valid symbols.
pub fn is_bit(bit: u8) -> bool {
    bit <= 1
}

/// Stores the configuration of a game session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Specifies the number of rounds in a session.
    rounds: usize,
    /// Specifies the longest context that the predictor considers.
    context_len: usize,
}

impl Config {
    pub fn new(rounds: usize, context_len: usize) -> Result<Self> {
        if rounds == 0 {
            return Err(Error::InvalidRounds);
        }
        if context_len == 0 {
            return Err(Error::InvalidContextLength);
        }
        Ok(Self {
            rounds,
            context_len,
        })
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn context_len(&self) -> usize {
        self.context_len
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounds: 50,
            context_len: 2,
        }
    }
}

#[test]
fn test_config_validation() {
    assert_eq!(Config::new(0, 2), Err(Error::InvalidRounds));
    assert_eq!(Config::new(10, 0), Err(Error::InvalidContextLength));
    let cfg = Config::new(10, 3).unwrap();
    assert_eq!(cfg.rounds(), 10);
    assert_eq!(cfg.context_len(), 3);
    assert_eq!(Config::default(), Config::new(50, 2).unwrap());
}
