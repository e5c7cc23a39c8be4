//! Depth-first generator over feasible vectors.

use crate::error::{HarmonicError, Result};
use crate::rational::{ceil_to_usize, ratio, Rational};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::iter::FusedIterator;

/// Number of admissible values for `y_i` given accumulator `s`:
/// `ceil((1 - s) * (i + 1))`.
///
/// Any `y_i` below this bound keeps `s + y_i / (i + 1) < 1`; the bound
/// itself does not.
pub fn branch_bound(i: usize, s: &Rational) -> usize {
    let slack = (Rational::one() - s) * Rational::from_integer(BigInt::from(i + 1));
    // A non-positive slack admits no branch.
    ceil_to_usize(&slack).unwrap_or(0)
}

/// One level of the traversal.
#[derive(Debug, Clone)]
struct Frame {
    /// Accumulator on entry to this level.
    s: Rational,
    /// Next value of `y_i` to try.
    next: usize,
    /// Exclusive upper bound on `y_i`.
    bound: usize,
}

impl Frame {
    fn new(i: usize, s: Rational) -> Self {
        let bound = branch_bound(i, &s);
        Self { s, next: 0, bound }
    }
}

/// Lazy sequence of feasible suffix vectors for levels `i..k`.
///
/// Created by [`feasible_solutions`]. Each item has length `k - i`.
#[derive(Debug, Clone)]
pub struct FeasibleSolutions {
    k: usize,
    start: usize,
    /// Choices made by every frame below the top one.
    prefix: Vec<usize>,
    stack: Vec<Frame>,
    /// Set while the single empty vector of a terminal start is pending.
    emit_empty: bool,
}

impl FeasibleSolutions {
    fn new(k: usize, start: usize, s: Rational) -> Self {
        let mut stack = Vec::new();
        let emit_empty = start == k;
        if !emit_empty {
            stack.push(Frame::new(start, s));
        }
        Self {
            k,
            start,
            prefix: Vec::new(),
            stack,
            emit_empty,
        }
    }

    /// Total problem size `k`.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Length of every vector this generator yields.
    pub fn vector_len(&self) -> usize {
        self.k - self.start
    }
}

impl Iterator for FeasibleSolutions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.emit_empty {
            self.emit_empty = false;
            return Some(Vec::new());
        }

        loop {
            let depth = self.start + self.stack.len() - 1;
            let top = self.stack.last_mut()?;

            if top.next < top.bound {
                let y = top.next;
                top.next += 1;

                if depth + 1 == self.k {
                    let mut solution = self.prefix.clone();
                    solution.push(y);
                    return Some(solution);
                }

                let s = &top.s + ratio(y as i64, (depth + 1) as i64);
                self.prefix.push(y);
                self.stack.push(Frame::new(depth + 1, s));
            } else {
                self.stack.pop();
                if self.stack.is_empty() {
                    return None;
                }
                self.prefix.pop();
            }
        }
    }
}

impl FusedIterator for FeasibleSolutions {}

/// Enumerates every feasible suffix `(y_i, ..., y_{k-1})` reachable from
/// accumulator `s` at level `i`.
///
/// With `i == k` the sequence is the single empty vector. Calling again
/// restarts the enumeration from scratch.
///
/// # Errors
///
/// - [`HarmonicError::DepthOutOfRange`] unless `1 <= i <= k`
/// - [`HarmonicError::AccumulatorOutOfRange`] unless `0 <= s < 1`
pub fn feasible_solutions(k: usize, i: usize, s: &Rational) -> Result<FeasibleSolutions> {
    if i == 0 || i > k {
        return Err(HarmonicError::DepthOutOfRange { i, k });
    }
    if s.is_negative() || *s >= Rational::one() {
        return Err(HarmonicError::AccumulatorOutOfRange { s: s.to_string() });
    }
    Ok(FeasibleSolutions::new(k, i, s.clone()))
}

/// Number of feasible vectors for `k`. Depends on `k` alone.
///
/// # Errors
///
/// Returns [`HarmonicError::InvalidK`] if `k == 0`.
pub fn count_feasible(k: usize) -> Result<u64> {
    if k == 0 {
        return Err(HarmonicError::InvalidK { k: 0 });
    }
    Ok(feasible_solutions(k, 1, &Rational::zero())?.count() as u64)
}

/// Replays a full vector and returns the accumulators `s_1, ..., s_k`,
/// where `s_1 = 0` and `s_{i+1} = s_i + y_i / (i + 1)`.
pub fn replay_accumulators(solution: &[usize]) -> Vec<Rational> {
    let mut out = Vec::with_capacity(solution.len() + 1);
    let mut s = Rational::zero();
    out.push(s.clone());
    for (idx, &y) in solution.iter().enumerate() {
        let i = idx + 1;
        s += ratio(y as i64, (i + 1) as i64);
        out.push(s.clone());
    }
    out
}
