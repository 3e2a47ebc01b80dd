//! Policies for classifying and emitting widget errors.
//!
//! Code that detects a checkout fault should build and return a [`WidgetError`]
//! rather than log it on the spot; the boundary that finally handles it picks
//! an [`ErrorPolicy`] to decide where the diagnostic goes.
//!
//! A policy sorts each error into a client or server [`Severity`] and sends it
//! to one sink:
//! - the stderr diagnostic record ([`ConsolePolicy`])
//! - tracing events (`TracingPolicy`, feature `tracing`)
//! - nowhere ([`NoopPolicy`])
//!
//! Example
//! ```rust,ignore
//! use widget_error::{ErrorPolicy, Severity, WidgetError};
//!
//! struct PrintPolicy;
//! impl ErrorPolicy for PrintPolicy {
//!     fn classify(&self, e: &WidgetError) -> Severity { e.classify() }
//!     fn emit(&self, e: &WidgetError) { eprintln!("[{:?}] {e}", self.classify(e)); }
//! }
//! ```
use super::{Severity, WidgetError};

pub trait ErrorPolicy: Send + Sync {
    /// Client or server fault, as this policy sees it.
    fn classify(&self, error: &WidgetError) -> Severity;

    /// Route the diagnostic for `error` to wherever this policy sends it.
    fn emit(&self, error: &WidgetError);
}

/// Classifies by status class and emits nothing.
#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl ErrorPolicy for NoopPolicy {
    fn classify(&self, error: &WidgetError) -> Severity {
        error.classify()
    }

    fn emit(&self, _error: &WidgetError) {}
}

/// Writes the full diagnostic record, trace included, to stderr.
#[derive(Debug, Clone, Default)]
pub struct ConsolePolicy;

impl ErrorPolicy for ConsolePolicy {
    fn classify(&self, error: &WidgetError) -> Severity {
        error.classify()
    }

    fn emit(&self, error: &WidgetError) {
        let mut stderr = std::io::stderr().lock();
        let _ = error.log_to(&mut stderr);
    }
}

/// Emits a `tracing` event: WARN for client errors, ERROR for server faults.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy;

#[cfg(feature = "tracing")]
impl ErrorPolicy for TracingPolicy {
    fn classify(&self, error: &WidgetError) -> Severity {
        error.classify()
    }

    fn emit(&self, error: &WidgetError) {
        error.emit_tracing();
    }
}

/// Fans one error out to several policies.
///
/// An error counts as a server fault if the error itself or any inner policy
/// says so; otherwise it stays a client error. Emission runs through every
/// inner policy in the order they were pushed.
///
/// Example
/// ```rust,ignore
/// use widget_error::policy::{CombinedPolicy, ConsolePolicy};
/// let policy = CombinedPolicy::new().push(ConsolePolicy);
/// // #[cfg(feature = "tracing")] let policy = policy.push(widget_error::policy::TracingPolicy);
/// ```
#[derive(Default)]
pub struct CombinedPolicy {
    policies: Vec<Box<dyn ErrorPolicy>>,
}

impl CombinedPolicy {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    /// Wraps policies that were already boxed, e.g. chosen at runtime.
    pub fn from_vec(policies: Vec<Box<dyn ErrorPolicy>>) -> Self {
        Self { policies }
    }

    /// Appends `policy`; it emits after every policy pushed before it.
    pub fn push<P: ErrorPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl ErrorPolicy for CombinedPolicy {
    fn classify(&self, error: &WidgetError) -> Severity {
        self.policies
            .iter()
            .map(|p| p.classify(error))
            .fold(error.classify(), Ord::max)
    }

    fn emit(&self, error: &WidgetError) {
        for p in &self.policies {
            p.emit(error);
        }
    }
}
