use std::collections::HashSet;

use tracing::trace;

use crate::{PRIME, Result, ShamirError, Share, field};

fn validate_shares(shares: &[Share]) -> Result<()> {
    if let Some(share) = shares.iter().find(|s| s.x >= PRIME || s.y >= PRIME) {
        return Err(ShamirError::InvalidShareValue { x: share.x });
    }
    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if !seen.insert(share.x) {
            return Err(ShamirError::DuplicatePoint(share.x));
        }
    }
    Ok(())
}

/// Calculate the Lagrange basis coefficients for the points with
/// x-coordinates `xc`, evaluated at `x`.
///
/// ```text
///                ---     (x - xc[j])
///   values[i] =  | |   ---------------
///              j != i  (xc[i] - xc[j])
/// ```
///
/// The x-coordinates must be distinct; a repeated one leaves a zero
/// denominator and fails with `NonInvertible`.
fn lagrange_basis(xc: &[u64], x: u64) -> Result<Vec<u64>> {
    xc.iter()
        .enumerate()
        .map(|(i, &xi)| {
            let mut numerator = 1;
            let mut denominator = 1;
            for (j, &xj) in xc.iter().enumerate() {
                if j != i {
                    numerator = field::mul(numerator, field::sub(x, xj));
                    denominator = field::mul(denominator, field::sub(xi, xj));
                }
            }
            Ok(field::mul(numerator, field::inverse(denominator)?))
        })
        .collect()
}

/// Evaluate, at `x`, the lowest-degree polynomial passing through `shares`.
///
/// Given `k` shares of a session with threshold `k`, interpolating at a new
/// `x` yields the share that session would have issued there.
pub fn interpolate(shares: &[Share], x: u64) -> Result<u64> {
    if x >= PRIME {
        return Err(ShamirError::InvalidEvaluationPoint(x));
    }
    validate_shares(shares)?;
    trace!(points = shares.len(), "interpolating");

    let xc: Vec<u64> = shares.iter().map(|s| s.x).collect();
    let basis = lagrange_basis(&xc, x)?;

    Ok(shares
        .iter()
        .zip(basis)
        .fold(0, |acc, (share, l)| field::add(acc, field::mul(share.y, l))))
}

/// Recover the secret, `P(0)`, from a set of shares.
///
/// This does not know the threshold the shares were issued with. Given fewer
/// shares than the threshold, or shares from different polynomials, it
/// still returns a field element; it just isn't the secret.
pub fn recover_secret(shares: &[Share]) -> Result<u64> {
    interpolate(shares, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shares(points: &[(u64, u64)]) -> Vec<Share> {
        points.iter().copied().map(Share::from).collect()
    }

    #[test]
    fn test_recover_line() {
        // P(x) = 5 + 3x
        assert_eq!(recover_secret(&shares(&[(1, 8), (2, 11)])), Ok(5));
        assert_eq!(recover_secret(&shares(&[(7, 26), (3, 14)])), Ok(5));
    }

    #[test]
    fn test_recover_wrapping_quadratic() {
        // P(x) = (p - 3) + 2x + x^2, so P(1) = 0, P(2) = 5, P(3) = 12.
        let points = shares(&[(1, 0), (2, 5), (3, 12)]);
        assert_eq!(recover_secret(&points), Ok(PRIME - 3));
    }

    #[test]
    fn test_interpolate_other_points() {
        // P(x) = 7 + 3x + 2x^2
        let points = shares(&[(1, 12), (2, 21), (3, 34)]);
        assert_eq!(interpolate(&points, 10), Ok(237));
        assert_eq!(interpolate(&points, 2), Ok(21));
        assert_eq!(
            interpolate(&points, PRIME),
            Err(ShamirError::InvalidEvaluationPoint(PRIME))
        );
    }

    #[test]
    fn test_order_independent() {
        let points = shares(&[(1, 12), (2, 21), (3, 34), (4, 51)]);
        let mut reversed = points.clone();
        reversed.reverse();
        let mut rotated = points.clone();
        rotated.rotate_left(2);
        assert_eq!(recover_secret(&points), Ok(7));
        assert_eq!(recover_secret(&reversed), Ok(7));
        assert_eq!(recover_secret(&rotated), Ok(7));
    }

    #[test]
    fn test_duplicate_point() {
        assert_eq!(
            recover_secret(&shares(&[(1, 2), (2, 3), (1, 4)])),
            Err(ShamirError::DuplicatePoint(1))
        );
    }

    #[test]
    fn test_value_outside_field() {
        assert_eq!(
            recover_secret(&shares(&[(PRIME, 2), (2, 2)])),
            Err(ShamirError::InvalidShareValue { x: PRIME })
        );
        assert_eq!(
            recover_secret(&shares(&[(1, 2), (2, PRIME)])),
            Err(ShamirError::InvalidShareValue { x: 2 })
        );
    }

    #[test]
    fn test_range_checked_before_duplicates() {
        assert_eq!(
            recover_secret(&shares(&[(1, 2), (1, 3), (4, PRIME)])),
            Err(ShamirError::InvalidShareValue { x: 4 })
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(recover_secret(&[]), Ok(0));
        // A single point is a constant polynomial.
        assert_eq!(recover_secret(&shares(&[(9, 77)])), Ok(77));
    }

    #[test]
    fn test_repeated_x_has_no_basis() {
        assert_eq!(lagrange_basis(&[3, 5, 3], 0), Err(ShamirError::NonInvertible));
    }
}
