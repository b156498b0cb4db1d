//! RNG module - uniform random piece generation
//!
//! Each spawn is an independent uniform draw over the seven kinds; repeats
//! are allowed and no bag history is kept. A simple seedable LCG keeps the
//! engine deterministic under test.

use crate::pieces::Piece;
use crate::types::PieceKind;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Produces freshly spawned pieces, one uniform independent draw per call.
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
}

impl PieceFactory {
    /// Create a factory with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw a random kind and construct it at the spawn position.
    pub fn next_piece(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        Piece::spawn(kind)
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new(1)
    }
}
