//! Random number source consumed by the stochastic effects

use rand_core::RngCore;

/// Source of uniformly distributed integers
///
/// Only a handful of effects draw from it (fire, sparkle, waterfall and
/// random blink). Implement it over whatever generator the platform has, or
/// wrap any [`RngCore`] in [`RngSource`].
pub trait RandomSource {
    /// Get an integer in `[low, high)`
    ///
    /// Returns `low` if the range is empty.
    fn random_range(&mut self, low: u32, high: u32) -> u32;

    /// Get an integer in `[0, high)`
    fn random_below(&mut self, high: u32) -> u32 {
        self.random_range(0, high)
    }
}

/// Adapter from a [`RngCore`] generator to [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Get the wrapped generator back
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn random_range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        low + self.rng.next_u32() % (high - low)
    }
}

/// Pick a random index into a slice of `len` elements
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn random_index(random: &mut dyn RandomSource, len: usize) -> usize {
    let high = u32::try_from(len).unwrap_or(u32::MAX);
    random.random_below(high) as usize
}
