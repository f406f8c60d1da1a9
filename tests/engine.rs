use bitduel::models::{Model, NGramModel};
use bitduel::{Bit, Config, Engine, Error, ErrorKind, RoundRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Bernoulli, Distribution};

/// Check the invariants that must hold between rounds.
fn check_invariants<M: Model>(engine: &Engine<M>) {
    let s = engine.summary();
    assert_eq!(s.player_score + s.ai_score, s.played);
    assert_eq!(engine.log().len(), s.played);
    assert_eq!(engine.history().len(), s.played);
    assert_eq!(s.remaining, s.rounds - s.played);
    assert!(s.played <= s.rounds);
}

#[test]
fn test_fresh_session() {
    for rounds in [1, 3, 50] {
        let engine = Engine::new(rounds, 2).unwrap();
        let s = engine.summary();
        assert_eq!(s.rounds, rounds);
        assert_eq!(s.played, 0);
        assert_eq!(s.player_score, 0);
        assert_eq!(s.ai_score, 0);
        assert_eq!(engine.remaining(), rounds);
        assert!(engine.history().is_empty());
        assert!(engine.export_log().is_empty());
        assert!(!engine.is_finished());
    }
}

#[test]
fn test_invalid_config() {
    let err = Engine::new(0, 2).err().unwrap();
    assert_eq!(err, Error::InvalidRounds);
    assert_eq!(err.kind(), ErrorKind::Config);

    let err = Engine::new(10, 0).err().unwrap();
    assert_eq!(err, Error::InvalidContextLength);
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_all_zeros_session() {
    let mut engine = Engine::new(3, 1).unwrap();
    for _ in 0..3 {
        let r = engine.play_round(0).unwrap();
        assert_eq!(r.prediction, 0);
        assert!(r.correct);
    }

    let s = engine.summary();
    assert_eq!(s.player_score, 0);
    assert_eq!(s.ai_score, 3);
    assert_eq!(s.played, 3);
    assert_eq!(s.remaining, 0);
    assert!(engine.is_finished());

    let rows = engine.export_log();
    assert_eq!(
        rows,
        vec![
            (1, 0, 0, true, 0, 1),
            (2, 0, 0, true, 0, 2),
            (3, 0, 0, true, 0, 3),
        ]
    );
}

#[test]
fn test_alternating_pattern() {
    let mut engine = Engine::new(20, 1).unwrap();
    for i in 0..20 {
        let _ = engine.play_round((i % 2) as Bit).unwrap();
        check_invariants(&engine);
    }

    // The AI misses the second round, before it saw a '1'. It predicts the
    // third round by the zero tie-break, and has the pattern after that.
    let misses: Vec<usize> = engine
        .log()
        .iter()
        .filter(|r| !r.correct)
        .map(|r| r.round)
        .collect();
    assert_eq!(misses, vec![2]);
    assert_eq!(engine.summary().ai_score, 19);
}

#[test]
fn test_invalid_bit_keeps_state() {
    let mut engine = Engine::new(5, 2).unwrap();
    let _ = engine.play_round(1).unwrap();
    let before = engine.summary();

    for bit in [2, 7, 255] {
        let err = engine.play_round(bit).err().unwrap();
        assert_eq!(err, Error::InvalidBit(bit));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    assert_eq!(engine.summary(), before);
    assert_eq!(engine.history(), &[1]);
    assert_eq!(engine.model().observations(), 1);
}

#[test]
fn test_play_after_finish() {
    let mut engine = Engine::new(2, 2).unwrap();
    let _ = engine.play_round(1).unwrap();
    let _ = engine.play_round(0).unwrap();
    assert!(engine.is_finished());

    let before = engine.summary();
    let log: Vec<RoundRecord> = engine.log().to_vec();

    let err = engine.play_round(1).err().unwrap();
    assert_eq!(err, Error::SessionFinished { rounds: 2 });
    assert_eq!(err.kind(), ErrorKind::Misuse);
    assert_eq!(engine.summary(), before);
    assert_eq!(engine.log(), &log[..]);

    // The finished check happens after the bit check.
    assert_eq!(engine.play_round(3), Err(Error::InvalidBit(3)));
}

#[test]
fn test_reset_forgets_everything() {
    let mut engine = Engine::new(10, 2).unwrap();
    for _ in 0..10 {
        let _ = engine.play_round(1).unwrap();
    }
    assert!(engine.is_finished());
    assert_eq!(engine.model().predict(engine.history()), 1);

    engine.reset().unwrap();
    assert_eq!(engine.played(), 0);
    assert_eq!(engine.remaining(), 10);
    assert!(engine.log().is_empty());
    assert!(engine.history().is_empty());
    assert_eq!(engine.model().observations(), 0);
    assert_eq!(engine.model().num_contexts(), 0);

    // A fresh model falls back to the zero default.
    let r = engine.play_round(1).unwrap();
    assert_eq!(r.round, 1);
    assert_eq!(r.prediction, 0);
    assert!(!r.correct);
    assert_eq!(r.player_score, 1);
}

/// A model that predicts the last bit of the history. If the engine appended
/// the current bit before asking for a prediction, this model would never
/// miss.
struct Echo {
    learned: usize,
}

impl Model for Echo {
    fn new(_context_len: usize) -> bitduel::Result<Self> {
        Ok(Self { learned: 0 })
    }

    fn predict(&self, history: &[Bit]) -> Bit {
        assert_eq!(history.len(), self.learned);
        history.last().copied().unwrap_or(0)
    }

    fn learn(&mut self, history: &[Bit], _bit: Bit) {
        assert_eq!(history.len(), self.learned);
        self.learned += 1;
    }
}

#[test]
fn test_prediction_precedes_the_bit() {
    let config = Config::new(4, 1).unwrap();
    let mut engine = Engine::<Echo>::with_config(config).unwrap();

    let predictions: Vec<Bit> = [1, 0, 1, 0]
        .iter()
        .map(|bit| engine.play_round(*bit).unwrap().prediction)
        .collect();

    assert_eq!(predictions, vec![0, 1, 0, 1]);
    assert_eq!(engine.summary().player_score, 4);
    assert_eq!(engine.model().learned, 4);
}

#[test]
fn test_round_does_not_see_its_own_bit() {
    let mut engine = Engine::new(3, 1).unwrap();
    let r = engine.play_round(1).unwrap();
    assert_eq!(r.prediction, 0);
    assert!(!r.correct);

    // Only now does the model know about the '1'.
    assert_eq!(engine.model().predict(engine.history()), 1);
}

#[test]
fn test_random_sessions() {
    let mut rng = StdRng::seed_from_u64(42);
    for (i, p) in [0.1, 0.5, 0.8].iter().enumerate() {
        let coin = Bernoulli::new(*p).unwrap();
        let mut engine = Engine::new(100 + i, 1 + i).unwrap();
        while !engine.is_finished() {
            let bit = coin.sample(&mut rng) as Bit;
            let r = engine.play_round(bit).unwrap();
            assert_eq!(r.correct, r.prediction == bit);
            assert_eq!(r.round, engine.played());
            check_invariants(&engine);
        }
        assert_eq!(engine.played(), 100 + i);
        let rows = engine.export_log();
        for (idx, row) in rows.iter().enumerate() {
            assert_eq!(row.0, idx + 1);
            assert_eq!(*row, engine.log()[idx].to_row());
        }
    }
}

#[test]
fn test_biased_player_loses() {
    let mut rng = StdRng::seed_from_u64(5);
    let coin = Bernoulli::new(0.85).unwrap();
    let mut engine = Engine::new(500, 2).unwrap();
    while !engine.is_finished() {
        let _ = engine.play_round(coin.sample(&mut rng) as Bit).unwrap();
    }
    let s = engine.summary();
    println!("Player {} - AI {}", s.player_score, s.ai_score);
    assert!(s.ai_score > s.player_score);
}

#[test]
fn test_default_config() {
    let mut engine =
        Engine::<NGramModel>::with_config(Config::default()).unwrap();
    assert_eq!(engine.remaining(), 50);
    assert_eq!(engine.model().context_len(), 2);
    let _ = engine.play_round(0).unwrap();
    assert_eq!(engine.remaining(), 49);
}
