//! Error taxonomy for the widget checkout domain.
//!
//! A raised [`WidgetError`] pairs an [`ErrorKind`] from a closed hierarchy with
//! an internal (operator) message, a user-safe message, supplementary values
//! and the stack captured where it was built. It is consumed at a boundary by
//! [`WidgetError::to_payload`] for clients and/or [`WidgetError::log`] for
//! operators.
pub mod error;
pub mod kind;
pub mod payload;
pub mod policy;
pub mod report;
pub mod result_ext;
pub mod severity;
pub mod trace;

// public exports
pub use error::{WidgetError, WidgetErrorBuilder};
pub use kind::{ErrorKind, KindDefaults};
pub use payload::Payload;
pub use policy::ErrorPolicy;
pub use report::DiagnosticReport;
pub use result_ext::ResultExt;
pub use severity::Severity;
pub use trace::{Frame, Trace};

pub type Result<T, E = WidgetError> = std::result::Result<T, E>;

#[cfg(all(test, feature = "tracing"))]
pub(crate) mod test_support {
    /// Install a basic tracing subscriber if none is set yet. Honors RUST_LOG.
    pub fn init_tracing_once() -> bool {
        use tracing_subscriber::{EnvFilter, fmt};
        fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .is_ok()
    }
}
