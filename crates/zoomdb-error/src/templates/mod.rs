//! Domain error templates.
//!
//! Each domain error is a `(kind, pattern)` pair. User-supplied text always
//! travels as a `%s` argument and is never spliced into a pattern.
//!
//! ```
//! use zoomdb_common::TypeId;
//! use zoomdb_error::ZError;
//!
//! let e = ZError::cast(TypeId::VarChar, TypeId::Date);
//! assert_eq!(e.message(), "Conversion: Type VARCHAR can't be cast as DATE");
//! ```

mod types;

pub use types::NumericFault;

use zoomdb_common::printf::Arg;

use crate::error::{ErrorTemplate, ZError};
use crate::kind::ErrorKind;

/// A static `(kind, pattern)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub kind: ErrorKind,
    pub pattern: &'static str,
}

impl Template {
    pub const fn new(kind: ErrorKind, pattern: &'static str) -> Self {
        Self { kind, pattern }
    }

    /// The category-prefixed form, ready for substitution.
    pub fn prefixed(&self) -> ErrorTemplate {
        ZError::template(self.kind, self.pattern)
    }

    pub fn format_with(&self, args: &[Arg<'_>]) -> ZError {
        self.prefixed().format_with(args)
    }
}

pub const VALUE_OUT_OF_RANGE_INT: Template = Template::new(
    ErrorKind::Conversion,
    "Type %s with value %lld can't be cast as %s because the value is out of range for the destination type",
);

pub const VALUE_OUT_OF_RANGE_FLOAT: Template = Template::new(
    ErrorKind::Conversion,
    "Type %s with value %f can't be cast as %s because the value is out of range for the destination type",
);

pub const VALUE_TOO_LONG: Template = Template::new(
    ErrorKind::OutOfRange,
    "The value is too long to fit into type %s(%zu)",
);

pub const CAST: Template = Template::new(ErrorKind::Conversion, "Type %s can't be cast as %s");

pub const UNKNOWN_TYPE: Template = Template::new(ErrorKind::UnknownType, "Unknown type %d%s");

pub const TYPE_MISMATCH: Template =
    Template::new(ErrorKind::MismatchType, "Type %s does not match with %s %s");

pub const NUMERIC_OUT_OF_RANGE: Template = Template::new(ErrorKind::OutOfRange, "%s %d");

pub const INCOMPATIBLE_TYPE: Template =
    Template::new(ErrorKind::IncompatibleType, "Incompatible type %s %s");

/// Every domain template.
pub const ALL: [Template; 8] = [
    VALUE_OUT_OF_RANGE_INT,
    VALUE_OUT_OF_RANGE_FLOAT,
    VALUE_TOO_LONG,
    CAST,
    UNKNOWN_TYPE,
    TYPE_MISMATCH,
    NUMERIC_OUT_OF_RANGE,
    INCOMPATIBLE_TYPE,
];

// ── Message-only domain errors ────────────────────────────────────

impl ZError {
    pub fn object_size(msg: &str) -> Self {
        ZError::with_kind(ErrorKind::ObjectSize, msg)
    }

    pub fn serialization(msg: &str) -> Self {
        ZError::with_kind(ErrorKind::Serialization, msg)
    }

    pub fn transaction(msg: &str) -> Self {
        ZError::with_kind(ErrorKind::Transaction, msg)
    }
}
