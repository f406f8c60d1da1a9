//! This module contains models that predict the next bit in a sequence of bits.

pub mod counter;
pub mod model;
pub mod ngram;

pub use counter::BitCounts;
pub use model::Model;
pub use ngram::NGramModel;
