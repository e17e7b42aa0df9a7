//! # zoomdb-error
//!
//! Typed errors for ZoomDB.
//!
//! A [`ZError`] is one [`ErrorKind`] plus a message rendered once at
//! construction. Categorised errors read `"<Category>: <message>"`; the plain
//! constructor keeps its text verbatim.
//!
//! ## Quick Start
//!
//! ```
//! use zoomdb_common::TypeId;
//! use zoomdb_error::{zerr, ErrorKind, ZError, ZResult};
//!
//! fn lookup(table: &str) -> ZResult<u32> {
//!     Err(zerr!(Catalog, "table %s does not exist", table))
//! }
//!
//! assert_eq!(lookup("t").unwrap_err().message(), "Catalog: table t does not exist");
//!
//! let e = ZError::value_too_long(TypeId::VarChar, 16);
//! assert_eq!(e.kind(), ErrorKind::OutOfRange);
//! assert_eq!(e.to_string(), "Out of Range: The value is too long to fit into type VARCHAR(16)");
//! ```
//!
//! ## Construction surface
//!
//! | Form | Message |
//! |------|---------|
//! | `ZError::new(msg)` | `msg` |
//! | `ZError::with_kind(kind, msg)` | `label: msg` |
//! | `ZError::template(kind, pat).format_with(args)` | `label: pat` rendered |
//! | `zerr!(Kind, pat, args...)` | same, from a macro |
//! | `templates::*` helpers | domain templates |
//!
//! ## Feature Flags
//!
//! | Flag        | Effect |
//! |-------------|--------|
//! | `backtrace` | Captures a symbolized stack trace on construction |
//! | `metrics`   | Per-kind AtomicU64 counters, text and Prometheus dump |

mod error;
mod kind;
#[macro_use]
mod macros;
mod convert;
pub mod templates;

#[cfg(feature = "metrics")]
pub mod metrics;

// ── Public API ────────────────────────────────────────────────────

pub use convert::ResultExt;
pub use error::{ErrorTemplate, ZError};
pub use kind::{label_for_code, ErrorKind, UNKNOWN_LABEL};
pub use templates::{NumericFault, Template};
pub use zoomdb_common::printf::Arg;

/// Convenience Result alias.
pub type ZResult<T> = Result<T, ZError>;
