use std::fmt::{self, Write as _};
use std::panic::Location;
use std::path::Path;

use backtrace::Backtrace;

use crate::ErrorKind;

/// Call stack captured where a [`crate::WidgetError`] was built.
///
/// Capture only walks the stack. Symbol resolution is deferred until the
/// frames are actually requested, which in practice means when an error is
/// logged for an operator.
#[derive(Clone, Debug)]
pub struct Trace {
    location: &'static Location<'static>,
    backtrace: Backtrace,
}

/// One resolved frame, oldest-first position within the trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub function: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.function)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, " at {file}:{line}"),
            (Some(file), None) => write!(f, " at {file}"),
            _ => Ok(()),
        }
    }
}

// Symbols belonging to the capture path itself rather than to the caller.
const CAPTURE_PREFIXES: &[&str] = &[
    "backtrace::",
    "widget_error::trace::Trace::capture",
    "widget_error::error::WidgetError::new",
    "widget_error::error::WidgetError::with_detail",
    "widget_error::error::WidgetErrorBuilder::build",
    "widget_error::kind::ErrorKind::error",
    "<widget_error::error::WidgetError as core::convert::From",
];

fn is_capture_frame(frame: &Frame) -> bool {
    frame.function == UNKNOWN
        || CAPTURE_PREFIXES
            .iter()
            .any(|prefix| frame.function.starts_with(prefix))
}

const UNKNOWN: &str = "<unknown>";

impl Trace {
    #[track_caller]
    #[inline(never)]
    pub fn capture() -> Self {
        Self {
            location: Location::caller(),
            backtrace: Backtrace::new_unresolved(),
        }
    }

    /// Source location of the construction call.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Resolved frames, oldest call first, capture machinery removed.
    pub fn frames(&self) -> Vec<Frame> {
        let mut backtrace = self.backtrace.clone();
        backtrace.resolve();

        let innermost_first = backtrace.frames().iter().flat_map(|frame| {
            frame.symbols().iter().map(|symbol| Frame {
                function: symbol
                    .name()
                    .map(|name| format!("{name:#}"))
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                file: symbol.filename().map(|path| path.display().to_string()),
                line: symbol.lineno(),
            })
        });

        let mut frames: Vec<Frame> = innermost_first
            .skip_while(is_capture_frame)
            .collect();
        frames.reverse();
        frames
    }

    /// Whether `frame` is the resolved form of the construction site.
    fn is_site(&self, frame: &Frame) -> bool {
        frame.line == Some(self.location.line())
            && frame
                .file
                .as_deref()
                .is_some_and(|file| Path::new(file).ends_with(self.location.file()))
    }

    /// Human-readable trace: one frame per line oldest first, then
    /// `<Tag>: <message>`.
    ///
    /// The newest frame is the construction site. When symbols could not be
    /// resolved down to it (stripped builds, remapped paths) a `raised at`
    /// line taken from the caller location stands in for it.
    pub fn render(&self, kind: ErrorKind, message: &str) -> String {
        let frames = self.frames();
        let mut out = String::new();
        for (i, frame) in frames.iter().enumerate() {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "  {i:>3}: {frame}");
        }
        if !frames.last().is_some_and(|f| self.is_site(f)) {
            let _ = writeln!(out, "  raised at {}", self.location);
        }
        let _ = write!(out, "{kind}: {message}");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WidgetError;

    #[test]
    fn records_construction_site() {
        let line = line!() + 1;
        let trace = Trace::capture();
        assert_eq!(trace.location().line(), line);
        assert!(trace.location().file().ends_with("trace.rs"));
    }

    #[test]
    fn render_ends_with_tag_and_message() {
        let trace = Trace::capture();
        let text = trace.render(ErrorKind::OutOfStockError, "sku 42 gone");
        assert!(text.ends_with("OutOfStockError: sku 42 gone"));
        assert!(text.contains("trace.rs"));
    }

    #[inline(never)]
    fn reserve_inner() -> WidgetError {
        ErrorKind::OutOfStockError.builder().detail("x").build()
    }

    #[inline(never)]
    fn reserve_outer() -> WidgetError {
        reserve_inner()
    }

    #[test]
    fn frames_run_oldest_to_newest() {
        let err = reserve_outer();

        let frames = err.trace().frames();
        let position = |name: &str| {
            frames
                .iter()
                .position(|f| f.function.ends_with(name))
                .unwrap_or_else(|| panic!("{name} missing from {frames:#?}"))
        };
        let outer = position("::reserve_outer");
        let inner = position("::reserve_inner");
        assert!(outer < inner);
        assert_eq!(inner, frames.len() - 1, "newest frame must come last");

        let text = err.formatted_trace();
        let outer_at = text.find("::reserve_outer").expect("outer in text");
        let inner_at = text.find("::reserve_inner").expect("inner in text");
        assert!(outer_at < inner_at);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.last(), Some(&"OutOfStockError: x"));
        let newest = lines[..lines.len() - 1]
            .iter()
            .rev()
            .find(|l| !l.starts_with("  raised at "))
            .expect("at least one frame line");
        assert!(newest.contains("::reserve_inner"), "{newest}");
    }

    #[test]
    fn construction_site_printed_once() {
        let err = reserve_outer();
        let loc = err.trace().location();
        let site = format!("{}:{}", loc.file(), loc.line());
        let text = err.formatted_trace();
        assert_eq!(text.matches(&site).count(), 1, "{text}");
    }

    #[test]
    fn render_is_stable_across_calls() {
        let trace = Trace::capture();
        assert_eq!(
            trace.render(ErrorKind::WidgetError, "x"),
            trace.render(ErrorKind::WidgetError, "x")
        );
    }

    #[test]
    fn capture_machinery_is_not_reported() {
        let trace = Trace::capture();
        assert!(
            trace
                .frames()
                .iter()
                .all(|f| !f.function.starts_with("backtrace::"))
        );
    }

    #[test]
    fn frame_display() {
        let frame = Frame {
            function: "shop::checkout".to_string(),
            file: Some("src/shop.rs".to_string()),
            line: Some(12),
        };
        assert_eq!(frame.to_string(), "shop::checkout at src/shop.rs:12");

        let bare = Frame {
            function: UNKNOWN.to_string(),
            file: None,
            line: None,
        };
        assert_eq!(bare.to_string(), "<unknown>");
    }
}
