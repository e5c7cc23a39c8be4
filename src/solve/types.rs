//! Query and per-query result types.

use crate::rational::Rational;

/// A single `mu` value, or `None` to skip it for this `k`.
pub type Query = Option<Rational>;

/// Best vector and score found for one defined query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryOutcome {
    /// The query value.
    pub mu: Rational,

    /// First vector (in traversal order) reaching `best_score`.
    pub best_solution: Vec<usize>,

    /// Optimal objective value.
    pub best_score: Rational,
}

impl QueryOutcome {
    /// Starting point of a search: the all-zero vector, which scores `mu`.
    pub fn initial(k: usize, mu: Rational) -> Self {
        Self {
            best_solution: vec![0; k.saturating_sub(1)],
            best_score: mu.clone(),
            mu,
        }
    }

    /// Replaces the incumbent if `score` is strictly better.
    ///
    /// Returns `true` on replacement. Ties keep the earlier vector.
    pub fn offer(&mut self, solution: &[usize], score: Rational) -> bool {
        if score > self.best_score {
            self.best_solution.clear();
            self.best_solution.extend_from_slice(solution);
            self.best_score = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::{integer, ratio};

    #[test]
    fn test_initial() {
        let outcome = QueryOutcome::initial(4, integer(1));
        assert_eq!(outcome.best_solution, vec![0, 0, 0]);
        assert_eq!(outcome.best_score, integer(1));
    }

    #[test]
    fn test_initial_k1() {
        assert!(QueryOutcome::initial(1, integer(2)).best_solution.is_empty());
    }

    #[test]
    fn test_offer_strict() {
        let mut outcome = QueryOutcome::initial(3, integer(1));
        assert!(!outcome.offer(&[1, 0], integer(1)));
        assert_eq!(outcome.best_solution, vec![0, 0]);
        assert!(outcome.offer(&[1, 1], ratio(5, 3)));
        assert_eq!(outcome.best_solution, vec![1, 1]);
        assert!(!outcome.offer(&[0, 2], ratio(5, 3)));
        assert_eq!(outcome.best_solution, vec![1, 1]);
    }
}
