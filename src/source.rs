use rand::Rng;

/// A source of uniform choices.
///
/// The generator only ever asks "pick one of `len` options", so any uniform
/// integer source will do. Every [`rand::Rng`] implements this trait; tests
/// can supply scripted sources to steer a walk.
pub trait UniformSource {
    /// Returns an index uniformly distributed in `0..len`.
    ///
    /// Callers guarantee `len >= 1`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> UniformSource for R {
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn rng_picks_stay_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for len in 1..=4 {
            for _ in 0..1_000 {
                assert!(rng.pick(len) < len);
            }
        }
    }

    #[test]
    fn single_option_is_always_chosen() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        assert!((0..100).all(|_| rng.pick(1) == 0));
    }

    #[test]
    fn picks_cover_every_index() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let mut counts = [0u32; 4];
        for _ in 0..4_000 {
            counts[rng.pick(4)] += 1;
        }
        assert!(counts.iter().all(|&c| c > 800), "skewed counts {counts:?}");
    }
}
