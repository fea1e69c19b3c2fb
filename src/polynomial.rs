use std::fmt;

use bc_rand::RandomNumberGenerator;

use crate::{MIN_THRESHOLD, PRIME, Result, ShamirError, field};

pub(crate) fn validate_parameters(secret: u64, threshold: u64) -> Result<()> {
    if secret >= PRIME {
        return Err(ShamirError::InvalidSecret);
    } else if !(MIN_THRESHOLD..PRIME).contains(&threshold) {
        return Err(ShamirError::InvalidThreshold(threshold));
    }
    Ok(())
}

/// The polynomial `P(x) = secret + a_1 x + ... + a_{k-1} x^{k-1} (mod p)`.
///
/// The coefficients are drawn once, when the polynomial is created, and are
/// never changed afterwards. Every share evaluated from it stays consistent.
pub struct Polynomial {
    secret: u64,
    coefficients: Vec<u64>,
}

impl Polynomial {
    /// Hide `secret` in a random polynomial of degree `threshold - 1`.
    pub fn new(
        secret: u64,
        threshold: u64,
        random_generator: &mut impl RandomNumberGenerator,
    ) -> Result<Self> {
        validate_parameters(secret, threshold)?;
        let coefficients = (1..threshold)
            .map(|_| field::random_element(&mut *random_generator))
            .collect();
        Ok(Self { secret, coefficients })
    }

    #[cfg(test)]
    pub(crate) fn from_coefficients(secret: u64, coefficients: Vec<u64>) -> Self {
        Self { secret, coefficients }
    }

    /// Evaluate the polynomial at `x`, keeping a running power of `x`.
    pub fn evaluate(&self, x: u64) -> u64 {
        debug_assert!(x < PRIME);
        let mut y = self.secret;
        let mut x_pow = 1;
        for &coefficient in &self.coefficients {
            x_pow = field::mul(x_pow, x);
            y = field::add(y, field::mul(coefficient, x_pow));
        }
        y
    }

    /// The number of points needed to reconstruct the polynomial.
    pub fn threshold(&self) -> u64 {
        self.coefficients.len() as u64 + 1
    }

    pub fn degree(&self) -> u64 {
        self.coefficients.len() as u64
    }

    /// The random coefficients `a_1..a_{k-1}`, excluding the secret.
    pub fn coefficients(&self) -> &[u64] {
        &self.coefficients
    }
}

/// Renders the full polynomial, secret included.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P(x) = {}", self.secret)?;
        for (power, coefficient) in self.coefficients.iter().enumerate() {
            write!(f, " + {} x^{}", coefficient, power + 1)?;
        }
        write!(f, " (mod {})", PRIME)
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .finish_non_exhaustive()
    }
}
