//! Arithmetic in the prime field GF(p), p = 2^61 - 1.
//!
//! Every function takes operands already reduced into `[0, p)` and returns a
//! value in `[0, p)`. Nothing here allocates or holds state.

use bc_rand::RandomNumberGenerator;

use crate::{PRIME, Result, ShamirError};

const PRIME_BITS: u32 = 61;

/// Reduce an arbitrary `u64` into `[0, p)`.
pub fn reduce(x: u64) -> u64 {
    // 2^61 ≡ 1 (mod p), so the high bits fold onto the low ones.
    let folded = (x & PRIME) + (x >> PRIME_BITS);
    if folded >= PRIME { folded - PRIME } else { folded }
}

/// Reduce a double-width product into `[0, p)`.
///
/// Valid for any `x < 2^122`, which covers `(p - 1)^2`.
pub fn reduce_wide(x: u128) -> u64 {
    let lo = (x as u64) & PRIME;
    let hi = (x >> PRIME_BITS) as u64;
    // lo < 2^61 and hi < 2^61, so the sum fits in 62 bits.
    reduce(lo + hi)
}

/// `a + b mod p`.
pub fn add(a: u64, b: u64) -> u64 {
    debug_assert!(a < PRIME && b < PRIME);
    let sum = a + b;
    if sum >= PRIME { sum - PRIME } else { sum }
}

/// `a - b mod p`, adding `p` first when `a < b`.
pub fn sub(a: u64, b: u64) -> u64 {
    debug_assert!(a < PRIME && b < PRIME);
    if a >= b { a - b } else { a + (PRIME - b) }
}

/// `a * b mod p` through a 128-bit product.
pub fn mul(a: u64, b: u64) -> u64 {
    debug_assert!(a < PRIME && b < PRIME);
    reduce_wide(a as u128 * b as u128)
}

/// Compute `base^exp` by repeated squaring.
pub fn pow(base: u64, mut exp: u64) -> u64 {
    let mut result = 1;
    let mut base = base;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul(result, base);
        }
        base = mul(base, base);
        exp >>= 1;
    }
    result
}

/// Multiplicative inverse via Fermat's little theorem, `a^(p-2)`.
pub fn inverse(a: u64) -> Result<u64> {
    if a == 0 {
        return Err(ShamirError::NonInvertible);
    }
    Ok(pow(a, PRIME - 2))
}

/// Draw a uniformly distributed field element.
///
/// Masking to 61 bits yields `[0, 2^61)`; the one value equal to `p` is
/// rejected, so there is no modulo bias.
pub fn random_element(rng: &mut impl RandomNumberGenerator) -> u64 {
    let mut bytes = [0u8; 8];
    loop {
        rng.fill_random_data(&mut bytes);
        let candidate = u64::from_le_bytes(bytes) & PRIME;
        if candidate < PRIME {
            return candidate;
        }
    }
}
