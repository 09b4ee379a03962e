//! RNG module - deterministic shuffling and sampling
//!
//! A small LCG is all the game needs: deck layouts must be uniformly shuffled
//! and reproducible under a fixed seed (for tests), but PRNG quality is not a
//! gameplay contract. Provides Fisher-Yates shuffling and
//! sampling-without-replacement for picking the session's symbols.

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

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Draw `count` distinct indices from `[0, pool)` without replacement.
    ///
    /// Precondition: `count <= pool` (checked by the caller as part of deck
    /// configuration validation).
    pub fn sample_indices(&mut self, pool: usize, count: usize) -> Vec<usize> {
        debug_assert!(count <= pool);
        let mut indices: Vec<usize> = (0..pool).collect();
        self.shuffle(&mut indices);
        indices.truncate(count);
        indices
    }
}
