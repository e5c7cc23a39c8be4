//! Feasible-vector generation.
//!
//! Enumerates every integer vector `(y_1, ..., y_{k-1})` whose cumulative
//! accumulator
//!
//! ```text
//! s_1 = 0,    s_{i+1} = s_i + y_i / (i + 1)
//! ```
//!
//! stays strictly below 1 at every level. At level `i` the coordinate `y_i`
//! ranges over `0 <= y_i < ceil((1 - s_i) * (i + 1))`, which is exactly the
//! set of values keeping `s_{i+1} < 1`. The bound is computed on exact
//! rationals, never floats.
//!
//! The enumeration is a depth-first traversal with an explicit frame stack,
//! exposed as a lazy [`Iterator`]. Vectors come out in lexicographic order
//! (depth-first, `y_i` ascending).
//!
//! # Examples
//!
//! ```
//! use u_harmonic::feasible::feasible_solutions;
//! use u_harmonic::rational::Rational;
//! use num_traits::Zero;
//!
//! let all: Vec<Vec<usize>> = feasible_solutions(3, 1, &Rational::zero())
//!     .unwrap()
//!     .collect();
//! assert_eq!(all, vec![vec![0, 0], vec![0, 1], vec![0, 2], vec![1, 0], vec![1, 1]]);
//! ```

mod generator;

pub use generator::{
    branch_bound, count_feasible, feasible_solutions, replay_accumulators, FeasibleSolutions,
};
