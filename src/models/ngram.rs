//! An order-N bit predictor with backoff to shorter contexts.

use std::collections::HashMap;

use super::counter::BitCounts;
use super::model::Model;
use crate::{Bit, Error, Result};

/// Predicts the next bit by majority vote over the bits that followed the
/// same context in the past. Contexts of every length from 'context_len'
/// down to zero are tracked, and the prediction uses the longest context
/// that is not tied.
pub struct NGramModel {
    context_len: usize,
    /// Maps a context (oldest bit first) to the bits that followed it.
    counts: HashMap<Box<[Bit]>, BitCounts>,
    /// The distribution of all of the bits, regardless of context.
    global: BitCounts,
}

impl NGramModel {
    pub fn context_len(&self) -> usize {
        self.context_len
    }

    /// Returns the number of bits that the model learned from.
    pub fn observations(&self) -> u64 {
        self.global.total()
    }

    /// Returns the counts that were recorded for 'context', or None if the
    /// context was never seen.
    pub fn counts(&self, context: &[Bit]) -> Option<&BitCounts> {
        self.counts.get(context)
    }

    /// Returns the number of distinct contexts in the table.
    pub fn num_contexts(&self) -> usize {
        self.counts.len()
    }

    /// Returns the last 'context_len' bits of 'history', or all of it if the
    /// history is shorter.
    fn longest_context<'a>(&self, history: &'a [Bit]) -> &'a [Bit] {
        let len = self.context_len.min(history.len());
        &history[history.len() - len..]
    }
}

impl Model for NGramModel {
    fn new(context_len: usize) -> Result<Self> {
        if context_len == 0 {
            return Err(Error::InvalidContextLength);
        }
        Ok(Self {
            context_len,
            counts: HashMap::new(),
            global: BitCounts::new(),
        })
    }

    fn predict(&self, history: &[Bit]) -> Bit {
        let ctx = self.longest_context(history);

        // Try the longest context first and back off to the empty one.
        for start in 0..=ctx.len() {
            if let Some(bit) =
                self.counts.get(&ctx[start..]).and_then(|c| c.majority())
            {
                return bit;
            }
        }

        // Every context is tied or unseen. Use the global skew, and break
        // ties towards zero.
        self.global.majority().unwrap_or(0)
    }

    fn learn(&mut self, history: &[Bit], bit: Bit) {
        let ctx = self.longest_context(history);

        // Update the context and all of its suffixes, so that the shorter
        // contexts have data to back off to.
        for start in 0..=ctx.len() {
            let key = &ctx[start..];
            match self.counts.get_mut(key) {
                Some(counts) => counts.update(bit),
                None => {
                    let mut counts = BitCounts::new();
                    counts.update(bit);
                    self.counts.insert(key.into(), counts);
                }
            }
        }
        self.global.update(bit);
    }
}

#[test]
fn test_empty_model() {
    let model = NGramModel::new(3).unwrap();
    assert_eq!(model.predict(&[]), 0);
    assert_eq!(model.predict(&[1, 1, 1, 1]), 0);
    assert_eq!(model.num_contexts(), 0);
}

#[test]
fn test_invalid_context_len() {
    assert!(matches!(
        NGramModel::new(0),
        Err(Error::InvalidContextLength)
    ));
}

#[test]
fn test_learn_updates_all_suffixes() {
    let mut model = NGramModel::new(2).unwrap();
    model.learn(&[0, 1, 1, 0], 1);

    assert_eq!(model.counts(&[1, 0]).unwrap().get(1), 1);
    assert_eq!(model.counts(&[0]).unwrap().get(1), 1);
    assert_eq!(model.counts(&[]).unwrap().get(1), 1);
    // Only the last two bits are used as context.
    assert!(model.counts(&[1, 1, 0]).is_none());
    assert_eq!(model.num_contexts(), 3);
    assert_eq!(model.observations(), 1);
}

#[test]
fn test_short_history() {
    let mut model = NGramModel::new(4).unwrap();
    model.learn(&[], 1);
    model.learn(&[1], 1);
    assert_eq!(model.counts(&[]).unwrap().get(1), 2);
    assert_eq!(model.counts(&[1]).unwrap().get(1), 1);
    assert_eq!(model.predict(&[1]), 1);
}

#[test]
fn test_predict_does_not_insert() {
    let mut model = NGramModel::new(2).unwrap();
    model.learn(&[], 1);
    let before = model.num_contexts();
    let _ = model.predict(&[0, 0]);
    let _ = model.predict(&[1, 0, 1]);
    assert_eq!(model.num_contexts(), before);
    assert!(model.counts(&[0, 0]).is_none());
}
