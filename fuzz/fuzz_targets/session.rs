#![no_main]

use bitduel::{Engine, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // The first byte picks the configuration, the rest are played as bits.
    let rounds = 1 + (data[0] as usize % 64);
    let context_len = 1 + (data[0] as usize >> 6);
    let mut engine = Engine::new(rounds, context_len).unwrap();

    for &bit in &data[1..] {
        let before = engine.summary();
        match engine.play_round(bit) {
            Ok(r) => {
                assert_eq!(r.round, before.played + 1);
                assert_eq!(r.correct, r.prediction == bit);
            }
            Err(Error::InvalidBit(b)) => {
                assert!(b > 1);
                assert_eq!(engine.summary(), before);
            }
            Err(Error::SessionFinished { .. }) => {
                assert!(engine.is_finished());
                assert_eq!(engine.summary(), before);
            }
            Err(err) => panic!("Unexpected error {}", err),
        }

        let s = engine.summary();
        assert_eq!(s.player_score + s.ai_score, s.played);
        assert_eq!(engine.export_log().len(), s.played);
    }
});
