//! Error categories and their user-facing labels.

use core::fmt;

/// Label used for numeric codes outside the category table.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Closed set of error categories.
///
/// Discriminants are stable and double as the numeric code.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    Invalid = 0,
    OutOfRange = 1,
    Conversion = 2,
    UnknownType = 3,
    Decimal = 4,
    MismatchType = 5,
    DivideByZero = 6,
    ObjectSize = 7,
    IncompatibleType = 8,
    Serialization = 9,
    Transaction = 10,
    NotImplemented = 11,
    Expression = 12,
    Catalog = 13,
    Parser = 14,
    Planner = 15,
    Scheduler = 16,
    Executor = 17,
    Constraint = 18,
    Index = 19,
    Stat = 20,
    Connection = 21,
    Syntax = 22,
    Settings = 23,
    Binder = 24,
    Network = 25,
    Optimizer = 26,
    NullPointer = 27,
}

impl ErrorKind {
    pub const COUNT: usize = 28;

    /// Every kind, in code order.
    pub const ALL: [ErrorKind; ErrorKind::COUNT] = [
        ErrorKind::Invalid,
        ErrorKind::OutOfRange,
        ErrorKind::Conversion,
        ErrorKind::UnknownType,
        ErrorKind::Decimal,
        ErrorKind::MismatchType,
        ErrorKind::DivideByZero,
        ErrorKind::ObjectSize,
        ErrorKind::IncompatibleType,
        ErrorKind::Serialization,
        ErrorKind::Transaction,
        ErrorKind::NotImplemented,
        ErrorKind::Expression,
        ErrorKind::Catalog,
        ErrorKind::Parser,
        ErrorKind::Planner,
        ErrorKind::Scheduler,
        ErrorKind::Executor,
        ErrorKind::Constraint,
        ErrorKind::Index,
        ErrorKind::Stat,
        ErrorKind::Connection,
        ErrorKind::Syntax,
        ErrorKind::Settings,
        ErrorKind::Binder,
        ErrorKind::Network,
        ErrorKind::Optimizer,
        ErrorKind::NullPointer,
    ];

    /// Human-readable category label, used as the message prefix.
    pub const fn label(self) -> &'static str {
        match self {
            ErrorKind::Invalid => "Invalid",
            ErrorKind::OutOfRange => "Out of Range",
            ErrorKind::Conversion => "Conversion",
            ErrorKind::UnknownType => "Unknown Type",
            ErrorKind::Decimal => "Decimal",
            ErrorKind::MismatchType => "Mismatch Type",
            ErrorKind::DivideByZero => "Divide by Zero",
            ErrorKind::ObjectSize => "Object Size",
            ErrorKind::IncompatibleType => "Incompatible Type",
            ErrorKind::Serialization => "Serialization",
            ErrorKind::Transaction => "Transaction Context",
            ErrorKind::NotImplemented => "Not Implemented",
            ErrorKind::Expression => "Expression",
            ErrorKind::Catalog => "Catalog",
            ErrorKind::Parser => "Parser",
            ErrorKind::Planner => "Planner",
            ErrorKind::Scheduler => "Scheduler",
            ErrorKind::Executor => "Executor",
            ErrorKind::Constraint => "Constraint",
            ErrorKind::Index => "Index",
            ErrorKind::Stat => "Stat",
            ErrorKind::Connection => "Connection",
            ErrorKind::Syntax => "Syntax",
            ErrorKind::Settings => "Settings",
            // Older releases printed "Optimizer" for this kind.
            ErrorKind::Binder => "Binder",
            ErrorKind::Network => "Network",
            ErrorKind::Optimizer => "Optimizer",
            ErrorKind::NullPointer => "Null Pointer",
        }
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: i64) -> Option<ErrorKind> {
        usize::try_from(code)
            .ok()
            .and_then(|i| ErrorKind::ALL.get(i).copied())
    }
}

/// Label for a raw numeric code; `"Unknown"` outside the table.
pub fn label_for_code(code: i64) -> &'static str {
    ErrorKind::from_code(code).map_or(UNKNOWN_LABEL, ErrorKind::label)
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i64> for ErrorKind {
    type Error = i64;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        ErrorKind::from_code(code).ok_or(code)
    }
}
