//! Random sources
//!
//! Rules never call a global RNG: they draw from the `RandomSource` handed in
//! through the update context, so tests can swap in `FixedSequence` and make
//! every coin flip and probability gate predictable.

pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Fair coin. `true` means "first option first".
    #[inline]
    fn coin(&mut self) -> bool {
        self.next_u32() & 1 == 0
    }

    /// `true` with probability `p` (clamped to `[0, 1]`).
    #[inline]
    fn chance(&mut self, p: f32) -> bool {
        if p <= 0.0 {
            return false;
        }
        let unit = self.next_u32() as f64 / 4_294_967_296.0;
        unit < p as f64
    }

    /// Uniform-ish integer in `0..n` (`n > 0`).
    #[inline]
    fn below(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0);
        self.next_u32() % n
    }
}

/// Xorshift32 generator
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift.
        Self { state: if seed == 0 { 0x9E37_79B9 } else { seed } }
    }
}

impl RandomSource for XorShift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

/// Replays a fixed list of words forever.
///
/// `FixedSequence::always(0)` takes the first option of every pair and passes
/// every probability gate; `FixedSequence::always(u32::MAX)` takes the second
/// option and fails every gate below 1.0.
#[derive(Clone, Debug)]
pub struct FixedSequence {
    words: Vec<u32>,
    pos: usize,
}

impl FixedSequence {
    pub fn new(words: Vec<u32>) -> Self {
        let words = if words.is_empty() { vec![0] } else { words };
        Self { words, pos: 0 }
    }

    pub fn always(word: u32) -> Self {
        Self::new(vec![word])
    }

    /// Number of words drawn so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for FixedSequence {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let w = self.words[self.pos % self.words.len()];
        self.pos += 1;
        w
    }
}
