//! RNG module - uniform pair generation and the lookahead queue
//!
//! Colors are drawn independently and uniformly from the 5-color palette
//! with no anti-repetition constraint: repeats within and across pairs are
//! normal. The queue keeps a constant lookahead of upcoming pairs, appending
//! one freshly generated pair each time the front is consumed.

use arrayvec::ArrayVec;

use crate::types::{TokenColor, QUEUE_LOOKAHEAD};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// The two colors of a queued or held pair. Position and orientation are
/// assigned only when the pair enters play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairColors {
    pub primary: TokenColor,
    pub secondary: TokenColor,
}

impl Default for PairColors {
    fn default() -> Self {
        Self {
            primary: TokenColor::Red,
            secondary: TokenColor::Red,
        }
    }
}

/// FIFO of upcoming pairs with a constant lookahead depth
#[derive(Debug, Clone)]
pub struct PairQueue {
    upcoming: ArrayVec<PairColors, QUEUE_LOOKAHEAD>,
    rng: SimpleRng,
}

impl PairQueue {
    /// Create a queue pre-filled to full lookahead depth
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            upcoming: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        };
        while !queue.upcoming.is_full() {
            let pair = queue.generate();
            queue.upcoming.push(pair);
        }
        queue
    }

    fn generate(&mut self) -> PairColors {
        let palette = TokenColor::ALL;
        let primary = palette[self.rng.next_range(palette.len() as u32) as usize];
        let secondary = palette[self.rng.next_range(palette.len() as u32) as usize];
        PairColors { primary, secondary }
    }

    /// Next pair to enter play, without consuming it
    pub fn peek(&self) -> PairColors {
        self.upcoming[0]
    }

    /// The full lookahead window, front first
    pub fn preview(&self) -> [PairColors; QUEUE_LOOKAHEAD] {
        let mut out = [PairColors::default(); QUEUE_LOOKAHEAD];
        for (slot, &pair) in out.iter_mut().zip(self.upcoming.iter()) {
            *slot = pair;
        }
        out
    }

    /// Dequeue the front pair and refill the back, keeping depth constant
    pub fn advance(&mut self) -> PairColors {
        let front = self.upcoming.remove(0);
        let fresh = self.generate();
        self.upcoming.push(fresh);
        front
    }

    /// Current RNG state (for restarting with the same stream)
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for PairQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
