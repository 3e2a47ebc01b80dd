use super::{ErrorPolicy, Result, Severity};

/// Emits a [`crate::WidgetError`] on its way through a checkout call chain.
///
/// Each helper hands the error to an [`ErrorPolicy`] (or stderr) and gives the
/// same `Result` back, so the API boundary can still map it to a response.
///
/// Example
/// ```rust,ignore
/// use widget_error::{ErrorKind, ResultExt, Result, policy::ConsolePolicy};
///
/// fn apply_coupon(code: &str) -> Result<u32> {
///     Err(ErrorKind::InvalidCouponCodeError.builder().detail(code).build())
/// }
///
/// let r = apply_coupon("XYZ").emit_event(&ConsolePolicy); // still Err for the caller
/// ```
pub trait ResultExt<T> {
    /// Emit any error through `policy`.
    fn emit_event(self, policy: &impl ErrorPolicy) -> Self;

    /// If the policy classifies the error as client-caused, emit it
    fn emit_client(self, policy: &impl ErrorPolicy) -> Self;

    /// If the policy classifies the error as a server fault, emit it
    fn emit_server(self, policy: &impl ErrorPolicy) -> Self;

    /// Write the stderr diagnostic record for the error, if any
    fn log_err(self) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn emit_event(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            policy.emit(e);
        }
        self
    }

    fn emit_client(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            if policy.classify(e) == Severity::Client {
                policy.emit(e);
            }
        }
        self
    }

    fn emit_server(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            if policy.classify(e) == Severity::Server {
                policy.emit(e);
            }
        }
        self
    }

    fn log_err(self) -> Self {
        if let Err(ref e) = self {
            e.log();
        }
        self
    }
}
