//! RNG module - seedable piece selection
//!
//! The board takes an injected, seedable generator instead of a process-wide
//! random source, so the same seed always produces the same piece sequence.
//!
//! Piece selection uses a soft anti-repeat policy rather than a bag: draw
//! uniformly from 8 buckets, and if the draw lands in the extra bucket or
//! matches the piece that just retired, redraw once from the 7 real buckets.
//! The redraw can still coincide with the previous kind; the bias is
//! statistical, not a guarantee.

use quadris_types::PieceKind;

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

    /// Current internal state (for deterministic restarts)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Piece selector with the two-step anti-repeat draw policy.
#[derive(Debug, Clone)]
pub struct PiecePicker {
    rng: SimpleRng,
}

impl PiecePicker {
    /// Create a new picker with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind.
    ///
    /// `retired` is the kind of the piece that just locked (or `None` for the
    /// very first draw). A first draw of the 8th bucket, or one matching the
    /// retired kind, triggers exactly one uniform redraw over the 7 kinds.
    pub fn pick(&mut self, retired: Option<PieceKind>) -> PieceKind {
        let mut num = self.rng.next_range(8) as usize;

        let repeats = retired.map_or(false, |kind| num == (kind.code() - 1) as usize);
        if num == 7 || repeats {
            num = self.rng.next_range(7) as usize;
        }

        PieceKind::ALL[num]
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PiecePicker {
    fn default() -> Self {
        Self::new(1)
    }
}
