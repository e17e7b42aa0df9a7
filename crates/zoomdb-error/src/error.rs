use std::error::Error;
use std::fmt;
use std::io::Write;

use zoomdb_common::printf::{vformat, Arg};

use crate::kind::ErrorKind;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A ZoomDB error: a category plus a fully rendered message.
///
/// The message is computed once when the error is built. Categorised
/// errors read `"<label>: <message>"`; the plain constructor keeps the
/// message as given.
///
/// ```
/// use zoomdb_error::{ErrorKind, ZError};
///
/// let e = ZError::with_kind(ErrorKind::Catalog, "table t not found");
/// assert_eq!(e.message(), "Catalog: table t not found");
///
/// let e = ZError::new("raw text");
/// assert_eq!(e.message(), "raw text");
/// ```
///
/// # Stack traces (`feature = "backtrace"`)
///
/// With the feature on, every constructor also captures a symbolized trace
/// of the constructing thread, readable through [`ZError::captured_trace`].
pub struct ZError {
    kind: ErrorKind,
    message: String,
    source: Option<BoxError>,
    #[cfg(feature = "backtrace")]
    trace: Option<String>,
}

// ── Constructors ──────────────────────────────────────────────────

impl ZError {
    /// Plain error: kind `Invalid`, message stored verbatim.
    pub fn new(message: impl Into<String>) -> Self {
        Self::build(ErrorKind::Invalid, message.into())
    }

    /// Categorised error: `"<label>: <message>"`. The message is not
    /// treated as a template.
    pub fn with_kind(kind: ErrorKind, message: impl AsRef<str>) -> Self {
        let message = message.as_ref();
        let label = kind.label();
        let mut text = String::with_capacity(label.len() + 2 + message.len());
        text.push_str(label);
        text.push_str(": ");
        text.push_str(message);
        Self::build(kind, text)
    }

    /// First phase of the two-phase builder: attach the category prefix to
    /// `pattern` without substituting anything yet.
    ///
    /// ```
    /// use zoomdb_error::{Arg, ErrorKind, ZError};
    ///
    /// let e = ZError::template(ErrorKind::Parser, "unexpected token %s at %d")
    ///     .format_with(&[Arg::from("FROM"), Arg::from(17)]);
    /// assert_eq!(e.message(), "Parser: unexpected token FROM at 17");
    /// ```
    pub fn template(kind: ErrorKind, pattern: &str) -> ErrorTemplate {
        ErrorTemplate::new(kind, pattern)
    }

    pub(crate) fn build(kind: ErrorKind, message: String) -> Self {
        #[cfg(feature = "metrics")]
        crate::metrics::bump(kind);

        Self {
            kind,
            message,
            source: None,
            #[cfg(feature = "backtrace")]
            trace: Some(zoomdb_trace::stack_trace_string(
                zoomdb_trace::DEFAULT_MAX_FRAMES,
            )),
        }
    }

    /// Attach an underlying cause. The message is left unchanged.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

// ── Re-formatting ─────────────────────────────────────────────────

impl ZError {
    /// Replace the message with `template` rendered against `args`.
    ///
    /// No category prefix is added; callers wanting one build the prefixed
    /// template first (see [`ZError::template`]).
    pub fn reformat(&mut self, template: &str, args: &[Arg<'_>]) {
        self.message = vformat(template, args);
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl ZError {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Category label of this error's kind.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// The final rendered text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }

    /// Trace captured at construction.
    #[cfg(feature = "backtrace")]
    pub fn captured_trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    /// Always `None`: the `backtrace` feature is off.
    #[cfg(not(feature = "backtrace"))]
    pub fn captured_trace(&self) -> Option<&str> {
        None
    }
}

// ── Diagnostics ───────────────────────────────────────────────────

impl ZError {
    /// Print the current thread's stack to stderr.
    pub fn print_stack_trace() {
        zoomdb_trace::print_stack_trace();
    }

    /// Print up to `max_frames` frames of the current thread's stack to `out`.
    pub fn print_stack_trace_to(out: &mut dyn Write, max_frames: usize) {
        zoomdb_trace::print_stack_trace_to(out, max_frames);
    }
}

// ── std::error::Error ─────────────────────────────────────────────

impl Error for ZError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

// ── Display / Debug ───────────────────────────────────────────────

impl fmt::Display for ZError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for ZError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("ZError");
        d.field("kind", &self.kind).field("message", &self.message);
        if let Some(src) = &self.source {
            d.field("source", src);
        }
        d.finish()
    }
}

// ── ErrorTemplate ─────────────────────────────────────────────────

/// A category-prefixed message pattern awaiting its arguments.
///
/// Produced by [`ZError::template`]; [`ErrorTemplate::format_with`] performs
/// the single substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTemplate {
    kind: ErrorKind,
    pattern: String,
}

impl ErrorTemplate {
    pub fn new(kind: ErrorKind, pattern: &str) -> Self {
        let label = kind.label();
        let mut prefixed = String::with_capacity(label.len() + 2 + pattern.len());
        prefixed.push_str(label);
        prefixed.push_str(": ");
        prefixed.push_str(pattern);
        Self {
            kind,
            pattern: prefixed,
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The prefixed pattern, placeholders intact.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Substitute `args` into the pattern and build the error.
    pub fn format_with(&self, args: &[Arg<'_>]) -> ZError {
        ZError::build(self.kind, vformat(&self.pattern, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn categorised_message_has_label_prefix() {
        for kind in ErrorKind::ALL {
            let e = ZError::with_kind(kind, "X");
            assert_eq!(e.message(), format!("{}: X", kind.label()));
            assert_eq!(e.kind(), kind);
            assert_eq!(e.label(), kind.label());
        }
    }

    #[test]
    fn plain_message_is_verbatim() {
        let e = ZError::new("raw");
        assert_eq!(e.message(), "raw");
        assert_eq!(e.kind(), ErrorKind::Invalid);
    }

    #[test]
    fn with_kind_does_not_interpret_placeholders() {
        let e = ZError::with_kind(ErrorKind::Syntax, "near '%s' 100%");
        assert_eq!(e.message(), "Syntax: near '%s' 100%");
    }

    #[test]
    fn message_is_idempotent() {
        let e = ZError::with_kind(ErrorKind::Index, "key exists");
        let first = e.message().to_string();
        for _ in 0..3 {
            assert_eq!(e.message(), first);
        }
        assert_eq!(e.to_string(), first);
    }

    #[test]
    fn reformat_replaces_message_without_prefix() {
        let mut e = ZError::with_kind(ErrorKind::Executor, "placeholder");
        e.reformat("%s failed after %d rows", &[Arg::from("scan"), Arg::from(12)]);
        assert_eq!(e.message(), "scan failed after 12 rows");
        assert_eq!(e.kind(), ErrorKind::Executor);
    }

    #[test]
    fn reformat_prefixed_template() {
        let kind = ErrorKind::Constraint;
        let mut e = ZError::with_kind(kind, "column %s is NOT NULL");
        let template = e.message().to_string();
        e.reformat(&template, &[Arg::from("id")]);
        assert_eq!(e.message(), "Constraint: column id is NOT NULL");
    }

    #[test]
    fn two_phase_builder() {
        let tpl = ZError::template(ErrorKind::Planner, "no plan for %s (%d joins)");
        assert_eq!(tpl.pattern(), "Planner: no plan for %s (%d joins)");
        assert_eq!(tpl.kind(), ErrorKind::Planner);

        let e = tpl.format_with(&[Arg::from("q1"), Arg::from(3)]);
        assert_eq!(e.message(), "Planner: no plan for q1 (3 joins)");

        let again = tpl.format_with(&[Arg::from("q2"), Arg::from(0)]);
        assert_eq!(again.message(), "Planner: no plan for q2 (0 joins)");
    }

    #[test]
    fn long_template_is_not_truncated() {
        let long = "x".repeat(500);
        let e = ZError::template(ErrorKind::Expression, "%s|%s|%s").format_with(&[
            Arg::from(long.as_str()),
            Arg::from(long.as_str()),
            Arg::from("end"),
        ]);
        assert_eq!(e.message().len(), "Expression: ".len() + 500 + 1 + 500 + 1 + 3);
        assert!(e.message().ends_with("|end"));
    }

    #[test]
    fn source_chain() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "wal segment");
        let e =
            ZError::with_kind(ErrorKind::Transaction, "commit failed").with_source(io_err);
        assert_eq!(e.message(), "Transaction Context: commit failed");
        let src = e.source().expect("source attached");
        assert_eq!(src.to_string(), "wal segment");
    }

    #[test]
    fn debug_shows_kind_and_message() {
        let e = ZError::with_kind(ErrorKind::Stat, "histogram missing");
        let dbg = format!("{:?}", e);
        assert!(dbg.contains("Stat"));
        assert!(dbg.contains("histogram missing"));
    }

    #[test]
    fn stack_trace_helpers_write_header() {
        let mut buf = Vec::new();
        ZError::print_stack_trace_to(&mut buf, 4);
        assert!(String::from_utf8_lossy(&buf).starts_with("Stack Trace:\n"));
    }

    #[cfg(not(feature = "backtrace"))]
    #[test]
    fn no_trace_without_feature() {
        assert!(ZError::new("x").captured_trace().is_none());
    }

    #[cfg(feature = "backtrace")]
    #[test]
    fn trace_captured_with_feature() {
        let e = ZError::new("x");
        assert!(e.captured_trace().unwrap().starts_with("Stack Trace:\n"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ZError>();
    }
}
