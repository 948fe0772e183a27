use serde::{Deserialize, Serialize};

/// Fixed-increment SplitMix64, after Vigna's public-domain C version. Fast,
/// 64 bits of state, and the exact stream matters here: every puzzle ever
/// generated from a seed must replay identically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform draw in `[0, bound)` by rejection, so no modulo bias.
    fn next_below(&mut self, bound: u64) -> u64 {
        loop {
            let raw = self.next_u64();
            let rem = raw % bound;
            if raw - rem <= u64::MAX - (bound - 1) {
                return rem;
            }
        }
    }

    /// Uniform digit in `[0, 9]`.
    pub fn next_digit(&mut self) -> u8 {
        self.next_below(10) as u8
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }
}
