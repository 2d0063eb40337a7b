//! The random capability handed to the engine.

/// A source of uniformly distributed 64-bit values.
///
/// Implementors only provide [`next_u64`](RandomSource::next_u64); bounded
/// draws are derived from it so every source shares the same mapping from
/// raw values to door indices. That keeps seeded runs reproducible and
/// lets tests script exact door picks.
pub trait RandomSource {
    /// Next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    fn below(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot draw from an empty range");
        (self.next_u64() % n as u64) as usize
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}
