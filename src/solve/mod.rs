//! Batched exact search for the harmonic integer program.
//!
//! For a fixed `k`, [`IpRunner`] walks every feasible vector once (see
//! [`crate::feasible`]) and scores it against every defined query `mu`,
//! keeping the best `(vector, score)` per query. Batching the queries
//! amortizes the exponential traversal across all of them; results are
//! identical to solving each query alone.
//!
//! Replacement is strict (`>`), so on ties the first vector in traversal
//! order is kept.
//!
//! # Examples
//!
//! ```
//! use u_harmonic::rational::ratio;
//! use u_harmonic::solve::{IpRunner, SolveConfig};
//!
//! let queries = [Some(ratio(1, 1)), Some(ratio(4, 3)), None];
//! let result = IpRunner::run(4, &queries, &SolveConfig::default()).unwrap();
//!
//! assert_eq!(result.visited, 12);
//! assert_eq!(
//!     result.best_scores(),
//!     vec![Some(ratio(5, 3)), Some(ratio(31, 18)), None]
//! );
//! ```

mod config;
mod runner;
mod score;
mod trace;
mod types;

pub use config::{SolveConfig, DEFAULT_MAX_K};
pub use runner::{solve, IpResult, IpRunner};
pub use score::{score, Scorer};
pub use trace::{CollectSink, DiagnosticSink, NoopSink, TracingSink};
pub use types::{Query, QueryOutcome};
