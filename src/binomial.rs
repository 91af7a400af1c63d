// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact binomial coefficients.
//!
//! Used by the orchestrator to report the expected combination count without
//! enumerating anything, so the streamed total can be cross-checked against
//! an independent computation.
//!
//! The product is accumulated as consecutive binomial-coefficient steps:
//! after iteration `i` the accumulator holds exactly `C(n-k+i, i)`, so each
//! division is exact and intermediates stay far below `u64::MAX` for the
//! universe sizes used here (n ≤ 25).

use crate::error::{Error, Result};

/// Compute `C(n, k)` exactly.
///
/// Fails with an arithmetic-precondition error when `n < 0`, `k < 0`, or
/// `k > n`. Uses the symmetry `C(n, k) = C(n, n-k)` to minimize iterations.
///
/// # Example
///
/// ```
/// use combigen::binomial::binomial;
///
/// assert_eq!(binomial(25, 15).unwrap(), 3_268_760);
/// assert_eq!(binomial(23, 13).unwrap(), 1_144_066);
/// ```
pub fn binomial(n: i64, k: i64) -> Result<u64> {
    if n < 0 || k < 0 || k > n {
        return Err(Error::BinomialDomain { n, k });
    }

    let n = n as u64;
    let k = (k as u64).min(n - k as u64);

    let mut res: u64 = 1;
    for i in 1..=k {
        // Multiply before dividing: the partial product is a binomial
        // coefficient itself, so the division is exact.
        res = res * (n - k + i) / i;
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_small_values() {
        assert_eq!(binomial(0, 0).unwrap(), 1);
        assert_eq!(binomial(1, 0).unwrap(), 1);
        assert_eq!(binomial(1, 1).unwrap(), 1);
        assert_eq!(binomial(5, 2).unwrap(), 10);
        assert_eq!(binomial(6, 3).unwrap(), 20);
        assert_eq!(binomial(10, 5).unwrap(), 252);
    }

    #[test]
    fn test_symmetry() {
        for k in 0..=25 {
            assert_eq!(binomial(25, k).unwrap(), binomial(25, 25 - k).unwrap());
        }
    }

    #[test]
    fn test_game_totals() {
        // Full universe: C(25,15)
        assert_eq!(binomial(25, 15).unwrap(), 3_268_760);
        // Two required numbers pinned: C(23,13)
        assert_eq!(binomial(23, 13).unwrap(), 1_144_066);
        // Fourteen pinned: C(11,1)
        assert_eq!(binomial(11, 1).unwrap(), 11);
        // All fifteen pinned: C(10,0)
        assert_eq!(binomial(10, 0).unwrap(), 1);
    }

    #[test]
    fn test_domain_errors() {
        for (n, k) in [(-1, 0), (5, -1), (3, 5)] {
            let err = binomial(n, k).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArithmeticPrecondition);
            assert_eq!(err, Error::BinomialDomain { n, k });
        }
    }

    #[test]
    fn test_pascal_identity() {
        // C(n,k) = C(n-1,k-1) + C(n-1,k) across the whole working range.
        for n in 2..=25i64 {
            for k in 1..n {
                assert_eq!(
                    binomial(n, k).unwrap(),
                    binomial(n - 1, k - 1).unwrap() + binomial(n - 1, k).unwrap()
                );
            }
        }
    }
}
