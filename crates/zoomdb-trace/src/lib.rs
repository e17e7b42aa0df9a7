//! # zoomdb-trace
//!
//! Capture the calling thread's stack and print it, one symbolized frame per
//! line, for diagnostics. Used by `zoomdb-error` when reporting errors, but
//! has no dependency on it.
//!
//! ```ignore
//! zoomdb_trace::print_stack_trace();
//!
//! let text = zoomdb_trace::stack_trace_string(16);
//! ```
//!
//! Platforms without a stack-walking facility always print an empty trace.
//! Printing never fails; sink errors are dropped.

pub mod backend;
pub mod config;
pub mod frame;
pub mod printer;

use std::io::{self, Write};

pub use backend::{platform_backend, PlatformBackend, SymbolBackend, UnsupportedBackend};
pub use config::{TraceConfig, DEFAULT_MAX_FRAMES};
pub use frame::{StackFrame, SymbolLine};
pub use printer::{capture_frames, write_trace};

/// Print up to [`TraceConfig::from_env`] frames to stderr.
pub fn print_stack_trace() {
    print_stack_trace_with(&platform_backend(), &mut io::stderr(), &TraceConfig::from_env());
}

/// Print up to `max_frames` frames to `out`.
pub fn print_stack_trace_to(out: &mut dyn Write, max_frames: usize) {
    let config = TraceConfig::from_env().max_frames(max_frames);
    print_stack_trace_with(&platform_backend(), out, &config);
}

/// Print with an explicit backend and configuration.
pub fn print_stack_trace_with<B: SymbolBackend + ?Sized>(
    backend: &B,
    out: &mut dyn Write,
    config: &TraceConfig,
) {
    let _ = write_trace(backend, out, config);
    let _ = out.flush();
}

/// Render up to `max_frames` frames into a string.
pub fn stack_trace_string(max_frames: usize) -> String {
    let mut buf = Vec::new();
    print_stack_trace_to(&mut buf, max_frames);
    String::from_utf8_lossy(&buf).into_owned()
}

/// True if this platform can capture stacks at all.
pub fn is_supported() -> bool {
    platform_backend().is_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn live_trace_starts_with_header() {
        let text = stack_trace_string(8);
        assert!(text.starts_with("Stack Trace:\n"));
        assert!(text.lines().count() <= 9);
        assert!(text.lines().skip(1).all(|l| l.starts_with("  ")));
    }

    #[test]
    fn unsupported_platform_prints_empty_trace() {
        let mut buf = Vec::new();
        print_stack_trace_with(&UnsupportedBackend, &mut buf, &TraceConfig::new());
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Stack Trace:\n  <empty, possibly corrupt>\n"
        );
    }

    #[test]
    fn sink_errors_are_swallowed() {
        print_stack_trace_to(&mut FailingSink, 4);
        print_stack_trace_with(&platform_backend(), &mut FailingSink, &TraceConfig::new());
    }

    #[test]
    fn support_matches_backend() {
        assert_eq!(is_supported(), platform_backend().is_supported());
    }
}
