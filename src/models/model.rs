use crate::{Bit, Result};

/// A trait that defines the interface for predicting the next bit of a
/// sequence. The sequence itself is owned by the caller, and the model only
/// reads the suffix that it needs.
pub trait Model {
    /// Construct a new model that looks at up to 'context_len' previous bits.
    fn new(context_len: usize) -> Result<Self>
    where
        Self: Sized;

    /// Return the most likely bit to follow 'history'. This does not modify
    /// the internal state.
    #[must_use]
    fn predict(&self, history: &[Bit]) -> Bit;

    /// Record that 'bit' followed 'history'.
    fn learn(&mut self, history: &[Bit], bit: Bit);
}
