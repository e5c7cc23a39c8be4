//! Linear objective of the harmonic integer program.

use crate::error::{HarmonicError, Result};
use crate::rational::{ratio, Rational};
use num_bigint::BigInt;

/// Precomputed objective for one `(k, mu)` pair.
///
/// The objective is
///
/// ```text
/// score(y) = mu + sum_{j=1}^{k-1} y_j * (1/j - mu/(j+1))
/// ```
///
/// The coefficients `1/j - mu/(j+1)` depend only on `k` and `mu`, so a
/// search scoring many vectors against the same query builds them once.
#[derive(Debug, Clone)]
pub struct Scorer {
    mu: Rational,
    coefficients: Vec<Rational>,
}

impl Scorer {
    /// Builds the objective for vectors of length `k - 1`.
    pub fn new(k: usize, mu: Rational) -> Self {
        let coefficients = (1..k.max(1))
            .map(|j| ratio(1, j as i64) - &mu * ratio(1, (j + 1) as i64))
            .collect();
        Self { mu, coefficients }
    }

    /// The query value this scorer was built for.
    pub fn mu(&self) -> &Rational {
        &self.mu
    }

    /// Expected vector length, `k - 1`.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the objective has no terms (`k == 1`).
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Scores a vector of length `k - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`HarmonicError::LengthMismatch`] on a wrong-length vector.
    pub fn score(&self, solution: &[usize]) -> Result<Rational> {
        if solution.len() != self.coefficients.len() {
            return Err(HarmonicError::LengthMismatch {
                expected: self.coefficients.len(),
                actual: solution.len(),
            });
        }
        let mut total = self.mu.clone();
        for (&y, c) in solution.iter().zip(&self.coefficients) {
            if y != 0 {
                total += c * Rational::from_integer(BigInt::from(y));
            }
        }
        Ok(total)
    }
}

/// Scores `solution` for problem size `k` and query `mu`.
///
/// # Errors
///
/// Returns [`HarmonicError::LengthMismatch`] unless `solution.len() == k - 1`.
pub fn score(solution: &[usize], k: usize, mu: &Rational) -> Result<Rational> {
    Scorer::new(k, mu.clone()).score(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::integer;
    use num_traits::Zero;

    #[test]
    fn test_empty_vector_scores_mu() {
        assert_eq!(score(&[], 1, &ratio(7, 3)).unwrap(), ratio(7, 3));
    }

    #[test]
    fn test_zero_vector_scores_mu() {
        assert_eq!(score(&[0, 0, 0], 4, &integer(1)).unwrap(), integer(1));
    }

    #[test]
    fn test_hand_computed() {
        // k = 2, mu = 1: 1 + 1 * (1 - 1/2) = 3/2
        assert_eq!(score(&[1], 2, &integer(1)).unwrap(), ratio(3, 2));
        // k = 3, mu = 0: 1 * 1 + 1 * 1/2 = 3/2
        assert_eq!(score(&[1, 1], 3, &Rational::zero()).unwrap(), ratio(3, 2));
        // k = 4, mu = 1: 1 + (1 - 1/2) + (1/2 - 1/3) = 5/3
        assert_eq!(score(&[1, 1, 0], 4, &integer(1)).unwrap(), ratio(5, 3));
    }

    #[test]
    fn test_negative_coefficients() {
        // k = 3, mu = 2: coefficients are 0 and 1/2 - 2/3 = -1/6.
        assert_eq!(score(&[0, 2], 3, &integer(2)).unwrap(), ratio(5, 3));
    }

    #[test]
    fn test_length_mismatch() {
        let err = score(&[1, 0], 2, &integer(1)).unwrap_err();
        assert!(matches!(
            err,
            HarmonicError::LengthMismatch {
                expected: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_scorer_reuse_matches_free_function() {
        let scorer = Scorer::new(4, ratio(4, 3));
        assert_eq!(scorer.len(), 3);
        for v in [[0, 0, 3], [0, 2, 1], [1, 0, 1]] {
            assert_eq!(scorer.score(&v).unwrap(), score(&v, 4, &ratio(4, 3)).unwrap());
        }
    }

    #[test]
    fn test_scorer_k1_is_empty() {
        let scorer = Scorer::new(1, integer(1));
        assert!(scorer.is_empty());
        assert_eq!(scorer.mu(), &integer(1));
    }
}
