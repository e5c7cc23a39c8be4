//! Solver configuration.

/// Default largest `k` accepted by the runner.
///
/// At `k = 30` the search already visits on the order of `10^11` vectors,
/// so anything past this limit cannot finish.
pub const DEFAULT_MAX_K: usize = 64;

/// Configuration for [`IpRunner`](super::IpRunner).
///
/// # Examples
///
/// ```
/// use u_harmonic::solve::SolveConfig;
///
/// let config = SolveConfig::default()
///     .with_trace(true)
///     .with_max_k(12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveConfig {
    /// Emit diagnostic lines (visited count, per-query optimum).
    pub trace: bool,

    /// Largest `k` the runner accepts.
    ///
    /// The number of feasible vectors grows combinatorially with `k` and
    /// the search has no timeout, so this is the only runtime bound.
    pub max_k: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            trace: false,
            max_k: DEFAULT_MAX_K,
        }
    }
}

impl SolveConfig {
    /// Enables or disables diagnostic output.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Sets the largest accepted `k`.
    pub fn with_max_k(mut self, max_k: usize) -> Self {
        self.max_k = max_k;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_k == 0 {
            return Err("max_k must be at least 1".into());
        }
        Ok(())
    }
}
