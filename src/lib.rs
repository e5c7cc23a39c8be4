//! Exact solver for the parameterized harmonic integer program.
//!
//! Given a positive integer `k` and a rational weight `mu >= 0`, find the
//! integer vector `(y_1, ..., y_{k-1})` maximizing
//!
//! ```text
//! mu + sum_{j=1}^{k-1} y_j * (1/j - mu/(j+1))
//! ```
//!
//! subject to the cumulative constraint `sum_{j<=i} y_j / (j+1) < 1` for
//! every `i`. All arithmetic is exact.
//!
//! - **Feasible vectors** ([`feasible`]): lazy depth-first enumeration with
//!   an exact per-level branching bound.
//! - **Search** ([`solve`]): one traversal per `k`, scoring every vector
//!   against a batch of mu queries and keeping the best per query.
//! - **Tables** ([`table`]): CSV/TeX tables of optima over a range of `k`.
//!
//! # Examples
//!
//! ```
//! use u_harmonic::rational::ratio;
//! use u_harmonic::solve::solve;
//!
//! let best = solve(3, &[Some(ratio(3, 2))], false).unwrap();
//! assert_eq!(best, vec![Some(ratio(7, 4))]);
//! ```

pub mod error;
pub mod feasible;
pub mod rational;
pub mod solve;
pub mod table;

pub use error::{HarmonicError, Result};
pub use rational::Rational;
