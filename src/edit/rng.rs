//! Randomness seam for stochastic edits
//!
//! Every `rand::Rng` is an `EditRng`, so callers pass a seeded `SmallRng` in
//! production. Tests can also script exact draws with `ScriptedRng`.

use rand::Rng;

/// The two kinds of draw the edit algorithms need
pub trait EditRng {
    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index in `0..n` (`n` must be non-zero)
    fn below(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> EditRng for R {
    fn chance(&mut self, p: f64) -> bool {
        self.random::<f64>() < p
    }

    fn below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedRng;
