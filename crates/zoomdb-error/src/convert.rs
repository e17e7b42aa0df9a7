use std::io;

use crate::{ErrorKind, ZError, ZResult};

/// Category for an `io::ErrorKind`, or `None` when no category applies.
fn io_error_kind(kind: io::ErrorKind) -> Option<ErrorKind> {
    match kind {
        io::ErrorKind::ConnectionRefused
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::NotConnected => Some(ErrorKind::Connection),
        io::ErrorKind::AddrInUse
        | io::ErrorKind::AddrNotAvailable
        | io::ErrorKind::BrokenPipe
        | io::ErrorKind::TimedOut => Some(ErrorKind::Network),
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
            Some(ErrorKind::Serialization)
        }
        io::ErrorKind::Unsupported => Some(ErrorKind::NotImplemented),
        io::ErrorKind::OutOfMemory => Some(ErrorKind::ObjectSize),
        _ => None,
    }
}

// ── From<io::Error> ───────────────────────────────────────────────

impl From<io::Error> for ZError {
    /// Categorise by `io::ErrorKind`; unmapped kinds become plain errors.
    /// The original error is kept as the source.
    fn from(err: io::Error) -> Self {
        let text = err.to_string();
        let zerr = match io_error_kind(err.kind()) {
            Some(kind) => ZError::with_kind(kind, &text),
            None => ZError::new(text),
        };
        zerr.with_source(err)
    }
}

// ── Into<io::Error> ───────────────────────────────────────────────

impl From<ZError> for io::Error {
    fn from(err: ZError) -> Self {
        let kind = match err.kind() {
            ErrorKind::Connection => io::ErrorKind::ConnectionAborted,
            ErrorKind::Network => io::ErrorKind::BrokenPipe,
            ErrorKind::Serialization => io::ErrorKind::InvalidData,
            ErrorKind::NotImplemented => io::ErrorKind::Unsupported,
            _ => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}

// ── ResultExt ─────────────────────────────────────────────────────

/// Annotate any error with a ZoomDB category while propagating it.
///
/// ```ignore
/// use zoomdb_error::{ErrorKind, ResultExt};
///
/// std::fs::read(path).zerr_context(ErrorKind::Catalog, "loading schema")?;
/// ```
pub trait ResultExt<T> {
    /// Replace the error with `"<label>: <msg>"`, keeping it as the source.
    fn zerr_context(self, kind: ErrorKind, msg: &str) -> ZResult<T>;

    /// Like [`zerr_context`](ResultExt::zerr_context), building the message
    /// only on failure.
    fn zerr_with<F>(self, kind: ErrorKind, f: F) -> ZResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn zerr_context(self, kind: ErrorKind, msg: &str) -> ZResult<T> {
        self.map_err(|e| ZError::with_kind(kind, msg).with_source(e))
    }

    fn zerr_with<F>(self, kind: ErrorKind, f: F) -> ZResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ZError::with_kind(kind, f()).with_source(e))
    }
}
