//! Diagnostic sinks.
//!
//! The runner reports what it did (search size, optimum per query) through a
//! [`DiagnosticSink`]. Nothing written here can affect a result.

/// Receives human-readable diagnostic lines.
pub trait DiagnosticSink {
    /// Emits one line.
    fn emit(&mut self, line: &str);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn emit(&mut self, _line: &str) {}
}

/// Forwards lines as `tracing` debug events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, line: &str) {
        tracing::debug!(target: "u_harmonic::trace", "{line}");
    }
}

/// Buffers lines in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    /// Every line emitted so far, oldest first.
    pub lines: Vec<String>,
}

impl CollectSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for CollectSink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_sink() {
        let mut sink = CollectSink::new();
        sink.emit("a");
        sink.emit("b");
        assert_eq!(sink.lines, vec!["a", "b"]);
    }

    fn emit_twice<S: DiagnosticSink>(mut sink: S) {
        sink.emit("x");
        sink.emit("y");
    }

    #[test]
    fn test_forward_through_reference() {
        let mut sink = CollectSink::new();
        emit_twice(&mut sink);
        assert_eq!(sink.lines, vec!["x", "y"]);
    }

    #[test]
    fn test_noop_and_tracing_accept_lines() {
        NoopSink.emit("ignored");
        TracingSink.emit("ignored without a subscriber");
    }
}
