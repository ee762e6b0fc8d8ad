//! RNG module - seeded pseudo-random source for the machine
//!
//! Every random decision the machine makes (initial symbols, rollover symbols,
//! spin stagger, forced-symbol choice, celebration placement) draws from one
//! [`SimpleRng`], so a seed fully determines a run for a given clock.
//!
//! Symbol selection is uniform but not audited for fairness.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform integer in `[0, max)`; `0` when `max` is zero.
    ///
    /// Draws from the high bits: the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        (self.next_u32() >> 8) % max
    }

    /// Uniform float in `[0, 1)` with 24 bits of precision.
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32() >> 8) / f64::from(1u32 << 24)
    }

    /// Pick one element uniformly.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        items.get(i)
    }

    /// Current internal state (feed it back to `new` to replay from here).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng, SimpleRng::new(1));
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let v = rng.next_range(3);
            assert!(v < 3);
            seen[v as usize] = true;
        }
        assert_eq!(seen, [true; 3], "all stagger steps should show up");
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_unit_is_half_open() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_pick() {
        let mut rng = SimpleRng::new(3);
        let empty: [u8; 0] = [];
        assert_eq!(rng.pick(&empty), None);

        let items = ['a', 'b', 'c', 'd'];
        let mut hits = [0u32; 4];
        for _ in 0..400 {
            let c = *rng.pick(&items).unwrap();
            hits[items.iter().position(|x| *x == c).unwrap()] += 1;
        }
        assert!(hits.iter().all(|&h| h > 0), "uneven pick: {:?}", hits);
    }
}
