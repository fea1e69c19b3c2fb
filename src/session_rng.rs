use std::fmt;

use bc_rand::RandomNumberGenerator;
use rand::{CryptoRng, RngCore, SeedableRng, rngs::StdRng};

/// A cryptographically strong generator owned by a single session.
///
/// Each instance carries its own ChaCha state seeded from OS entropy, so no
/// two sessions ever draw from the same stream.
pub struct SessionRandomNumberGenerator {
    rng: StdRng,
}

impl SessionRandomNumberGenerator {
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// A reproducible generator, for tests.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self { rng: StdRng::from_seed(seed) }
    }
}

impl RngCore for SessionRandomNumberGenerator {
    fn next_u32(&mut self) -> u32 { self.rng.next_u32() }

    fn next_u64(&mut self) -> u64 { self.rng.next_u64() }

    fn fill_bytes(&mut self, dest: &mut [u8]) { self.rng.fill_bytes(dest); }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl CryptoRng for SessionRandomNumberGenerator {}

impl RandomNumberGenerator for SessionRandomNumberGenerator {}

impl fmt::Debug for SessionRandomNumberGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRandomNumberGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_streams_are_reproducible() {
        let mut a = SessionRandomNumberGenerator::from_seed([7; 32]);
        let mut b = SessionRandomNumberGenerator::from_seed([7; 32]);
        assert_eq!(a.random_data(64), b.random_data(64));
    }

    #[test]
    fn test_generators_do_not_share_state() {
        let mut a = SessionRandomNumberGenerator::from_seed([7; 32]);
        let mut other = SessionRandomNumberGenerator::from_seed([7; 32]);
        // Drawing from one generator leaves another untouched.
        other.random_data(1024);
        let mut fresh = SessionRandomNumberGenerator::from_seed([7; 32]);
        assert_eq!(a.random_data(64), fresh.random_data(64));
    }

    #[test]
    fn test_entropy_seeds_differ() {
        let mut a = SessionRandomNumberGenerator::from_entropy();
        let mut b = SessionRandomNumberGenerator::from_entropy();
        assert_ne!(a.random_data(32), b.random_data(32));
    }

    #[test]
    fn test_debug_hides_state() {
        let rng = SessionRandomNumberGenerator::from_seed([1; 32]);
        assert_eq!(format!("{:?}", rng), "SessionRandomNumberGenerator { .. }");
    }
}
