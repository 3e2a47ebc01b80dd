//! Operator-facing diagnostic record for a [`WidgetError`].
use std::fmt;
use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::{WidgetError, payload::format_time, severity::reason_phrase};

/// Marker written in place of an empty extra argument list.
pub const NO_EXTRAS: &str = "<none>";

/// A diagnostic record stamped at a specific time.
///
/// Every field goes on its own labelled line and the formatted trace closes
/// the record, so each piece can be located independently in captured output.
#[derive(Debug, Clone)]
pub struct DiagnosticReport<'a> {
    error: &'a WidgetError,
    time: DateTime<Utc>,
}

impl<'a> DiagnosticReport<'a> {
    pub fn new(error: &'a WidgetError, time: DateTime<Utc>) -> Self {
        Self { error, time }
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    fn extras(&self) -> String {
        match self.error.extra_args() {
            [] => NO_EXTRAS.to_string(),
            args => format!("[{}]", args.join(", ")),
        }
    }
}

impl fmt::Display for DiagnosticReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.error.severity();
        writeln!(f, "[widget-error] time_utc: {}", format_time(self.time))?;
        writeln!(f, "exception_type: {}", self.error.kind())?;
        writeln!(f, "severity: {} {}", status.as_u16(), reason_phrase(status))?;
        writeln!(f, "internal_message: {}", self.error.internal_message())?;
        writeln!(f, "extra_args: {}", self.extras())?;
        writeln!(f, "trace:")?;
        writeln!(f, "{}", self.error.formatted_trace())
    }
}

impl WidgetError {
    /// Diagnostic record stamped with the current UTC time.
    pub fn report(&self) -> DiagnosticReport<'_> {
        DiagnosticReport::new(self, Utc::now())
    }

    pub fn report_at(&self, time: DateTime<Utc>) -> DiagnosticReport<'_> {
        DiagnosticReport::new(self, time)
    }

    /// Write a freshly stamped diagnostic record to `sink`.
    pub fn log_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        let report = self.report();
        write!(sink, "{report}")?;
        sink.flush()
    }

    /// Write the diagnostic record to stderr.
    ///
    /// Failures of the stream itself are ignored. With the `tracing` feature
    /// the same fields are also emitted as a structured event.
    pub fn log(&self) {
        let mut stderr = io::stderr().lock();
        let _ = self.log_to(&mut stderr);

        #[cfg(feature = "tracing")]
        self.emit_tracing();
    }

    #[cfg(feature = "tracing")]
    pub(crate) fn emit_tracing(&self) {
        use tracing::{Level, event};

        let status = self.severity().as_u16();
        let trace = self.formatted_trace();
        match self.classify() {
            crate::Severity::Client => event!(
                Level::WARN,
                exception_type = self.kind().name(),
                severity = status,
                internal_message = self.internal_message(),
                extra_args = ?self.extra_args(),
                trace = %trace,
                "widget error"
            ),
            crate::Severity::Server => event!(
                Level::ERROR,
                exception_type = self.kind().name(),
                severity = status,
                internal_message = self.internal_message(),
                extra_args = ?self.extra_args(),
                trace = %trace,
                "widget error"
            ),
        }
    }
}
