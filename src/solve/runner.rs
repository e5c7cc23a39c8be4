//! Search driver: one traversal, many queries.

use super::config::SolveConfig;
use super::score::Scorer;
use super::trace::{DiagnosticSink, NoopSink, TracingSink};
use super::types::{Query, QueryOutcome};
use crate::error::{HarmonicError, Result};
use crate::feasible::feasible_solutions;
use crate::rational::{frac_str, is_negative, Rational};
use num_traits::Zero;

/// Result of one search for a fixed `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IpResult {
    /// Problem size.
    pub k: usize,

    /// Number of feasible vectors visited.
    pub visited: u64,

    /// One entry per query, in input order. `None` for skipped queries.
    pub outcomes: Vec<Option<QueryOutcome>>,
}

impl IpResult {
    /// Optimal score per query, in input order.
    pub fn best_scores(&self) -> Vec<Query> {
        self.outcomes
            .iter()
            .map(|o| o.as_ref().map(|o| o.best_score.clone()))
            .collect()
    }

    /// Maximizing vector per query, in input order.
    pub fn best_solutions(&self) -> Vec<Option<&[usize]>> {
        self.outcomes
            .iter()
            .map(|o| o.as_ref().map(|o| o.best_solution.as_slice()))
            .collect()
    }
}

/// Executes the batched exhaustive search.
pub struct IpRunner;

impl IpRunner {
    /// Solves for every query in one traversal.
    ///
    /// With `config.trace` set, diagnostics go to [`TracingSink`].
    pub fn run(k: usize, queries: &[Query], config: &SolveConfig) -> Result<IpResult> {
        if config.trace {
            Self::run_with_sink(k, queries, config, &mut TracingSink)
        } else {
            Self::run_with_sink(k, queries, config, &mut NoopSink)
        }
    }

    /// Solves for every query, sending diagnostics to `sink` when
    /// `config.trace` is set.
    ///
    /// # Errors
    ///
    /// - [`HarmonicError::InvalidConfig`] if the configuration is invalid
    /// - [`HarmonicError::InvalidK`] if `k == 0`
    /// - [`HarmonicError::KTooLarge`] if `k` exceeds `config.max_k`
    /// - [`HarmonicError::NegativeMu`] if a defined query is negative
    pub fn run_with_sink(
        k: usize,
        queries: &[Query],
        config: &SolveConfig,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<IpResult> {
        config.validate().map_err(HarmonicError::InvalidConfig)?;
        if k == 0 {
            return Err(HarmonicError::InvalidK { k: 0 });
        }
        if k > config.max_k {
            return Err(HarmonicError::KTooLarge {
                k,
                max_k: config.max_k,
            });
        }
        if let Some(mu) = queries.iter().flatten().find(|mu| is_negative(mu)) {
            return Err(HarmonicError::NegativeMu { mu: mu.to_string() });
        }

        if config.trace {
            sink.emit(&format!(
                "calling solve(k={k}, mus={})",
                list_str(queries.iter().map(|q| frac_str(q.as_ref(), false)))
            ));
        }
        tracing::debug!(k, queries = queries.len(), "search started");

        let scorers: Vec<Option<Scorer>> = queries
            .iter()
            .map(|q| q.as_ref().map(|mu| Scorer::new(k, mu.clone())))
            .collect();
        let mut outcomes: Vec<Option<QueryOutcome>> = queries
            .iter()
            .map(|q| q.as_ref().map(|mu| QueryOutcome::initial(k, mu.clone())))
            .collect();

        let mut visited = 0u64;
        for solution in feasible_solutions(k, 1, &Rational::zero())? {
            visited += 1;
            for (scorer, outcome) in scorers.iter().zip(outcomes.iter_mut()) {
                if let (Some(scorer), Some(outcome)) = (scorer, outcome) {
                    let score = scorer.score(&solution)?;
                    outcome.offer(&solution, score);
                }
            }
        }

        tracing::debug!(k, visited, "search finished");

        let result = IpResult {
            k,
            visited,
            outcomes,
        };
        if config.trace {
            emit_summary(&result, sink);
        }
        Ok(result)
    }
}

/// Solves the harmonic integer program for `k` and each query, returning the
/// optimal score per query in input order.
///
/// # Examples
///
/// ```
/// use u_harmonic::rational::ratio;
/// use u_harmonic::solve::solve;
///
/// let best = solve(4, &[Some(ratio(1, 1)), None], false).unwrap();
/// assert_eq!(best, vec![Some(ratio(5, 3)), None]);
/// ```
pub fn solve(k: usize, queries: &[Query], trace: bool) -> Result<Vec<Query>> {
    let config = SolveConfig::default().with_trace(trace);
    Ok(IpRunner::run(k, queries, &config)?.best_scores())
}

fn emit_summary(result: &IpResult, sink: &mut dyn DiagnosticSink) {
    let k = result.k;
    sink.emit(&format!("k={k}: {} solutions found", result.visited));
    for outcome in &result.outcomes {
        match outcome {
            Some(o) => sink.emit(&format!(
                "k={k}: mu={}, sol={}, score={}={}",
                o.mu,
                tuple_str(&o.best_solution),
                frac_str(Some(&o.best_score), false),
                frac_str(Some(&o.best_score), true),
            )),
            None => sink.emit(&format!("k={k}: mu=null, skipped")),
        }
    }
}

fn list_str(items: impl Iterator<Item = String>) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(", "))
}

fn tuple_str(solution: &[usize]) -> String {
    let parts: Vec<String> = solution.iter().map(|y| y.to_string()).collect();
    match parts.as_slice() {
        [single] => format!("({single},)"),
        _ => format!("({})", parts.join(", ")),
    }
}
