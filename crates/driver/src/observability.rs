//! Metrics sink and tracer.
//!
//! The driver reports two things: how long a connect took and how many
//! session creations failed. [`MetricsSink`] is the collaborator interface
//! those land in; the driver never aggregates or exports metrics itself.
//! Log output goes through `tracing` alongside every sink call.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

/// Timer metric recorded once per successful connect.
pub const METRIC_CONNECT: &str = "athenadriver.connector.connect";

/// Counter incremented exactly once per failed session creation.
pub const METRIC_SESSION_FAILURE: &str = "athenadriver.failure.connector.new_session";

/// Named counters and timers consumed by the connector.
///
/// Implementations must tolerate concurrent calls; the connector invokes
/// the sink from arbitrary tasks.
pub trait MetricsSink: Send + Sync {
    fn incr_counter(&self, name: &str);
    fn record_timer(&self, name: &str, elapsed: Duration);
}

/// Sink that drops every metric. Default for no-op connectors.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn incr_counter(&self, _name: &str) {}
    fn record_timer(&self, _name: &str, _elapsed: Duration) {}
}

/// Bundles the active metrics scope and mirrors every emission into the
/// `tracing` log stream.
#[derive(Clone)]
pub struct Tracer {
    scope: Arc<dyn MetricsSink>,
}

impl Tracer {
    pub fn new(scope: Arc<dyn MetricsSink>) -> Self {
        Self { scope }
    }

    /// Tracer wired to a discarding sink.
    pub fn noop() -> Self {
        Self::new(Arc::new(NoopMetrics))
    }

    /// Same tracer with the metrics scope swapped, for per-call overrides.
    pub fn with_scope(&self, scope: Arc<dyn MetricsSink>) -> Self {
        Self::new(scope)
    }

    pub fn incr_counter(&self, name: &str) {
        warn!(counter = %name, "incrementing failure counter");
        self.scope.incr_counter(name);
    }

    pub fn record_timer(&self, name: &str, elapsed: Duration) {
        debug!(timer = %name, elapsed_ms = elapsed.as_millis() as u64, "recording timer");
        self.scope.record_timer(name, elapsed);
    }
}

impl std::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::noop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        counters: Mutex<Vec<String>>,
        timers: Mutex<Vec<String>>,
    }

    impl MetricsSink for Recording {
        fn incr_counter(&self, name: &str) {
            self.counters.lock().unwrap().push(name.to_string());
        }
        fn record_timer(&self, name: &str, _elapsed: Duration) {
            self.timers.lock().unwrap().push(name.to_string());
        }
    }

    #[test]
    fn tracer_forwards_to_scope() {
        let sink = Arc::new(Recording::default());
        let tracer = Tracer::new(sink.clone());

        tracer.incr_counter(METRIC_SESSION_FAILURE);
        tracer.record_timer(METRIC_CONNECT, Duration::from_millis(3));

        assert_eq!(
            sink.counters.lock().unwrap().as_slice(),
            [METRIC_SESSION_FAILURE]
        );
        assert_eq!(sink.timers.lock().unwrap().as_slice(), [METRIC_CONNECT]);
    }

    #[test]
    fn with_scope_replaces_only_the_sink() {
        let first = Arc::new(Recording::default());
        let second = Arc::new(Recording::default());

        let tracer = Tracer::new(first.clone());
        let overridden = tracer.with_scope(second.clone());
        overridden.incr_counter("x");

        assert!(first.counters.lock().unwrap().is_empty());
        assert_eq!(second.counters.lock().unwrap().len(), 1);
    }

    #[test]
    fn noop_tracer_accepts_everything() {
        let tracer = Tracer::noop();
        tracer.incr_counter("anything");
        tracer.record_timer("anything", Duration::ZERO);
    }
}
