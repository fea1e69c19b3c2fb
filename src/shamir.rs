use bc_rand::RandomNumberGenerator;
use tracing::debug;

use crate::{
    PRIME, Polynomial, Result, SessionRandomNumberGenerator, ShamirError, Share,
};

/// One secret-splitting session: a fixed polynomial and the shares issued
/// from it so far.
///
/// Shares are issued at `x = 1, 2, 3, ...` in order and are never reissued.
/// Mutating calls take `&mut self`; sharing a session across threads needs
/// external synchronization.
#[derive(Debug)]
pub struct SecretSharingSession {
    polynomial: Polynomial,
    shares: Vec<Share>,
}

impl SecretSharingSession {
    /// Start a session whose coefficients come from a generator seeded from
    /// OS entropy for this session alone. The generator is dropped once the
    /// polynomial is drawn.
    pub fn new(secret: u64, threshold: u64) -> Result<Self> {
        let mut rng = SessionRandomNumberGenerator::from_entropy();
        Self::new_using(secret, threshold, &mut rng)
    }

    pub fn new_using(
        secret: u64,
        threshold: u64,
        random_generator: &mut impl RandomNumberGenerator,
    ) -> Result<Self> {
        let polynomial = Polynomial::new(secret, threshold, random_generator)?;
        debug!(threshold, "created secret sharing session");
        Ok(Self { polynomial, shares: Vec::new() })
    }

    /// Issue `count` more shares and return every share issued so far.
    ///
    /// Either all `count` shares are issued or, on error, none are.
    pub fn generate_shares(&mut self, count: u64) -> Result<&[Share]> {
        let issued = self.issued_count();
        let total = issued
            .checked_add(count)
            .filter(|&total| total < PRIME)
            .ok_or(ShamirError::ShareDomainExceeded { issued, requested: count })?;

        debug!(requested = count, issued, "generating shares");
        let polynomial = &self.polynomial;
        self.shares
            .extend((issued + 1..=total).map(|x| Share::new(x, polynomial.evaluate(x))));
        Ok(&self.shares)
    }

    pub fn threshold(&self) -> u64 {
        self.polynomial.threshold()
    }

    pub fn issued_count(&self) -> u64 {
        self.shares.len() as u64
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }
}

/// Split `secret` into `share_count` shares, any `threshold` of which
/// recover it.
pub fn split_secret(
    secret: u64,
    threshold: u64,
    share_count: u64,
    random_generator: &mut impl RandomNumberGenerator,
) -> Result<Vec<Share>> {
    let mut session = SecretSharingSession::new_using(secret, threshold, random_generator)?;
    session.generate_shares(share_count)?;
    Ok(session.shares)
}
