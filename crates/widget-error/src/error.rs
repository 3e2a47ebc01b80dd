use std::borrow::Cow;

use http::StatusCode;

use crate::{ErrorKind, Severity, Trace};

/// A raised checkout error.
///
/// Built once through [`WidgetError::new`], [`WidgetError::with_detail`] or
/// [`WidgetError::builder`], and never mutated afterwards. The severity is
/// always the kind's fixed severity.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {internal_message}")]
pub struct WidgetError {
    kind: ErrorKind,
    internal_message: Cow<'static, str>,
    user_message: Cow<'static, str>,
    extra_args: Vec<String>,
    trace: Trace,
}

/// Collects optional overrides before a [`WidgetError`] is built.
#[derive(Debug, Clone)]
#[must_use]
pub struct WidgetErrorBuilder {
    kind: ErrorKind,
    detail: Option<String>,
    user_message: Option<String>,
    extra_args: Vec<String>,
}

impl WidgetErrorBuilder {
    /// Replaces the kind's default internal message.
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Replaces the kind's default user message.
    pub fn user_message(mut self, message: impl Into<String>) -> Self {
        self.user_message = Some(message.into());
        self
    }

    /// Appends a supplementary value, kept for operators only.
    pub fn extra(mut self, value: impl std::fmt::Debug) -> Self {
        self.extra_args.push(format!("{value:?}"));
        self
    }

    pub fn extras<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Debug,
    {
        values.into_iter().fold(self, |b, v| b.extra(v))
    }

    #[track_caller]
    pub fn build(self) -> WidgetError {
        let defaults = self.kind.defaults();
        WidgetError {
            kind: self.kind,
            internal_message: self
                .detail
                .map_or(Cow::Borrowed(defaults.internal_message), Cow::Owned),
            user_message: self
                .user_message
                .map_or(Cow::Borrowed(defaults.user_message), Cow::Owned),
            extra_args: self.extra_args,
            trace: Trace::capture(),
        }
    }
}

impl WidgetError {
    #[track_caller]
    pub fn new(kind: ErrorKind) -> Self {
        Self::builder(kind).build()
    }

    #[track_caller]
    pub fn with_detail(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self::builder(kind).detail(detail).build()
    }

    pub fn builder(kind: ErrorKind) -> WidgetErrorBuilder {
        WidgetErrorBuilder {
            kind,
            detail: None,
            user_message: None,
            extra_args: Vec::new(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn severity(&self) -> StatusCode {
        self.kind.severity()
    }

    pub fn classify(&self) -> Severity {
        Severity::of(self.severity())
    }

    pub fn internal_message(&self) -> &str {
        &self.internal_message
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    /// Supplementary values in the order they were given, `Debug`-formatted.
    pub fn extra_args(&self) -> &[String] {
        &self.extra_args
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Formatted stack trace, as written by the diagnostic log.
    pub fn formatted_trace(&self) -> String {
        self.trace.render(self.kind, &self.internal_message)
    }

    pub fn is_a(&self, ancestor: ErrorKind) -> bool {
        self.kind.is_a(ancestor)
    }
}

impl From<ErrorKind> for WidgetError {
    #[track_caller]
    fn from(kind: ErrorKind) -> Self {
        WidgetError::new(kind)
    }
}
