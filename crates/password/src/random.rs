//! Unbiased random indices from a secure generator.
use rand::{rngs::OsRng, CryptoRng, RngCore};

/// Range covered by a single 32-bit draw.
const U32_RANGE: u64 = 1 << 32;

/// Source of uniformly distributed indices.
///
/// Draws are reduced with rejection sampling so every index in
/// `[0, n)` is equally likely; the modulo bias of a plain
/// `value % n` is removed exactly.
#[derive(Debug, Clone)]
pub struct UniformSource<R> {
    rng: R,
}

impl UniformSource<OsRng> {
    /// Uniform source backed by the operating system RNG.
    pub fn os() -> Self {
        Self::new(crate::csprng())
    }
}

impl Default for UniformSource<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl<R> UniformSource<R>
where
    R: RngCore + CryptoRng,
{
    /// Create a uniform source from a cryptographically secure RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Random index in `[0, n)`.
    ///
    /// Returns zero when `n` is zero; callers must not treat
    /// that as a random value.
    pub fn index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let n = n as u64;
        if n <= U32_RANGE {
            let limit = (U32_RANGE / n) * n;
            loop {
                let value = self.rng.next_u32() as u64;
                if value < limit {
                    return (value % n) as usize;
                }
            }
        } else {
            let range = u64::MAX as u128 + 1;
            let limit = (range / n as u128) * n as u128;
            loop {
                let value = self.rng.next_u64() as u128;
                if value < limit {
                    return (value % n as u128) as usize;
                }
            }
        }
    }

    /// Random decimal digit.
    pub fn digit(&mut self) -> char {
        crate::DIGITS[self.index(crate::DIGITS.len())]
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.index(2) == 0
    }

    /// Choose an element of a slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.index(items.len()))
        }
    }

    /// Choose `count` distinct positions in `[0, len)`.
    ///
    /// Position draws are repeated until enough distinct values
    /// have been collected; positions are returned in the order
    /// they were first drawn. `count` is capped at `len`.
    pub fn distinct_positions(
        &mut self,
        len: usize,
        count: usize,
    ) -> Vec<usize> {
        let count = count.min(len);
        let mut chosen = Vec::with_capacity(count);
        while chosen.len() < count {
            let position = self.index(len);
            if !chosen.contains(&position) {
                chosen.push(position);
            }
        }
        chosen
    }
}
