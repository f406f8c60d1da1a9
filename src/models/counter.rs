use crate::Bit;

/// Counts how many times each bit was observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitCounts {
    data: [u64; 2],
}

impl BitCounts {
    pub fn new() -> Self {
        Self { data: [0; 2] }
    }

    pub fn update(&mut self, bit: Bit) {
        debug_assert!(bit <= 1, "Invalid bit {}", bit);
        self.data[usize::from(bit & 1)] += 1;
    }

    /// Returns the number of times that 'bit' was observed.
    pub fn get(&self, bit: Bit) -> u64 {
        self.data[usize::from(bit & 1)]
    }

    pub fn total(&self) -> u64 {
        self.data[0] + self.data[1]
    }

    /// Returns the bit with the strictly larger count, or None on a tie
    /// (including the empty counter).
    pub fn majority(&self) -> Option<Bit> {
        let (zeros, ones) = (self.data[0], self.data[1]);
        if zeros > ones {
            Some(0)
        } else if ones > zeros {
            Some(1)
        } else {
            None
        }
    }
}

#[test]
fn test_majority() {
    let mut counts = BitCounts::new();
    assert_eq!(counts.majority(), None);
    counts.update(1);
    assert_eq!(counts.majority(), Some(1));
    counts.update(0);
    assert_eq!(counts.majority(), None);
    counts.update(0);
    assert_eq!(counts.majority(), Some(0));
    assert_eq!(counts.get(0), 2);
    assert_eq!(counts.get(1), 1);
    assert_eq!(counts.total(), 3);
}
