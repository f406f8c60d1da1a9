//! The turn engine. The player picks a bit each round and the model tries to
//! predict it before it is revealed. A correct prediction scores a point for
//! the model, and a wrong one scores a point for the player.

use crate::models::{Model, NGramModel};
use crate::{is_bit, Bit, Config, Error, Result};

/// The names of the columns of a row in the exported log.
pub const LOG_COLUMNS: [&str; 6] = [
    "round_no",
    "ai_prediction",
    "player_bit",
    "correct",
    "player_score",
    "ai_score",
];

/// A row of the exported log, in the order of LOG_COLUMNS.
pub type LogRow = (usize, Bit, Bit, bool, usize, usize);

/// The outcome of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRecord {
    /// The 1-based index of the round.
    pub round: usize,
    /// The bit that the model predicted.
    pub prediction: Bit,
    /// The bit that the player picked.
    pub bit: Bit,
    /// True if the prediction matched the bit.
    pub correct: bool,
    /// The player score after this round.
    pub player_score: usize,
    /// The model score after this round.
    pub ai_score: usize,
}

impl RoundRecord {
    pub fn to_row(&self) -> LogRow {
        (
            self.round,
            self.prediction,
            self.bit,
            self.correct,
            self.player_score,
            self.ai_score,
        )
    }
}

/// A snapshot of the score board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub rounds: usize,
    pub played: usize,
    pub player_score: usize,
    pub ai_score: usize,
    pub remaining: usize,
}

/// Runs a session of the game. The engine owns the history of the bits that
/// were played, and the model only reads it.
pub struct Engine<M: Model = NGramModel> {
    config: Config,
    model: M,
    history: Vec<Bit>,
    log: Vec<RoundRecord>,
    round: usize,
    player_score: usize,
    ai_score: usize,
}

impl Engine<NGramModel> {
    /// Creates a session of 'rounds' rounds, with a predictor that looks at
    /// up to 'context_len' previous bits.
    pub fn new(rounds: usize, context_len: usize) -> Result<Self> {
        Self::with_config(Config::new(rounds, context_len)?)
    }
}

impl<M: Model> Engine<M> {
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            model: M::new(config.context_len())?,
            history: Vec::new(),
            log: Vec::new(),
            round: 0,
            player_score: 0,
            ai_score: 0,
        })
    }

    /// Start over. This drops everything that the model learned.
    pub fn reset(&mut self) -> Result<()> {
        self.model = M::new(self.config.context_len())?;
        self.history.clear();
        self.log.clear();
        self.round = 0;
        self.player_score = 0;
        self.ai_score = 0;
        log::debug!("Reset the session ({} rounds)", self.config.rounds());
        Ok(())
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn history(&self) -> &[Bit] {
        &self.history
    }

    pub fn log(&self) -> &[RoundRecord] {
        &self.log
    }

    pub fn played(&self) -> usize {
        self.round
    }

    pub fn remaining(&self) -> usize {
        self.config.rounds() - self.round
    }

    pub fn is_finished(&self) -> bool {
        self.round >= self.config.rounds()
    }

    /// Play the bit 'bit' and return the outcome of the round. The state is
    /// not modified if an error is returned.
    pub fn play_round(&mut self, bit: Bit) -> Result<RoundRecord> {
        if !is_bit(bit) {
            return Err(Error::InvalidBit(bit));
        }
        if self.is_finished() {
            return Err(Error::SessionFinished {
                rounds: self.config.rounds(),
            });
        }

        // The prediction must be made before the bit is learned or recorded.
        let prediction = self.model.predict(&self.history);
        let correct = prediction == bit;
        if correct {
            self.ai_score += 1;
        } else {
            self.player_score += 1;
        }

        self.model.learn(&self.history, bit);
        self.history.push(bit);
        self.round += 1;

        let record = RoundRecord {
            round: self.round,
            prediction,
            bit,
            correct,
            player_score: self.player_score,
            ai_score: self.ai_score,
        };
        self.log.push(record);

        log::debug!(
            "Round {}: predicted {}, played {} ({}:{})",
            record.round,
            prediction,
            bit,
            self.player_score,
            self.ai_score
        );
        if self.is_finished() {
            log::info!(
                "Session finished. Player {} - AI {}",
                self.player_score,
                self.ai_score
            );
        }

        Ok(record)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            rounds: self.config.rounds(),
            played: self.round,
            player_score: self.player_score,
            ai_score: self.ai_score,
            remaining: self.remaining(),
        }
    }

    /// Returns the log of the session as rows, in the order of LOG_COLUMNS.
    pub fn export_log(&self) -> Vec<LogRow> {
        self.log.iter().map(RoundRecord::to_row).collect()
    }
}
