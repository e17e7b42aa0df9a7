/// Build a categorised [`ZError`](crate::ZError) from a printf-style template.
///
/// The kind is a bare [`ErrorKind`](crate::ErrorKind) variant name. The
/// template gets the category prefix first and is then rendered once with
/// the arguments.
///
/// ```
/// use zoomdb_error::zerr;
///
/// let e = zerr!(Catalog, "table %s has %d columns", "users", 3);
/// assert_eq!(e.message(), "Catalog: table users has 3 columns");
///
/// let e = zerr!(NotImplemented, "window functions");
/// assert_eq!(e.message(), "Not Implemented: window functions");
/// ```
#[macro_export]
macro_rules! zerr {
    ($kind:ident, $template:expr $(,)?) => {
        $crate::ZError::template($crate::ErrorKind::$kind, $template).format_with(&[])
    };
    ($kind:ident, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::ZError::template($crate::ErrorKind::$kind, $template)
            .format_with(&[$($crate::Arg::from($arg)),+])
    };
}

/// Return early with a [`zerr!`] error.
///
/// ```
/// use zoomdb_error::{zbail, ZResult};
///
/// fn divide(a: i64, b: i64) -> ZResult<i64> {
///     if b == 0 {
///         zbail!(DivideByZero, "%lld / 0", a);
///     }
///     Ok(a / b)
/// }
///
/// assert_eq!(divide(7, 0).unwrap_err().message(), "Divide by Zero: 7 / 0");
/// ```
#[macro_export]
macro_rules! zbail {
    ($($tt:tt)+) => {
        return ::core::result::Result::Err($crate::zerr!($($tt)+))
    };
}

/// Return early with a [`zerr!`] error unless `cond` holds.
///
/// ```
/// use zoomdb_error::{zensure, ZResult};
///
/// fn check_width(w: usize) -> ZResult<()> {
///     zensure!(w <= 64, ObjectSize, "width %zu exceeds %d", w, 64);
///     Ok(())
/// }
///
/// assert!(check_width(8).is_ok());
/// assert_eq!(
///     check_width(100).unwrap_err().message(),
///     "Object Size: width 100 exceeds 64"
/// );
/// ```
#[macro_export]
macro_rules! zensure {
    ($cond:expr, $($tt:tt)+) => {
        if !($cond) {
            $crate::zbail!($($tt)+);
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, ZResult};

    #[test]
    fn zerr_without_args_still_renders() {
        let e = zerr!(Optimizer, "100%% done");
        assert_eq!(e.message(), "Optimizer: 100% done");
        assert_eq!(e.kind(), ErrorKind::Optimizer);
    }

    #[test]
    fn zerr_with_args() {
        let table = String::from("orders");
        let e = zerr!(Binder, "column %s not found in %s", "qty", &table);
        assert_eq!(e.message(), "Binder: column qty not found in orders");
    }

    #[test]
    fn zerr_mixed_numeric_args() {
        let e = zerr!(Index, "key %d/%u at %.2f", -4i32, 9u8, 1.23456);
        assert_eq!(e.message(), "Index: key -4/9 at 1.23");
    }

    #[test]
    fn zerr_trailing_comma() {
        let e = zerr!(Settings, "unknown option %s", "threads",);
        assert_eq!(e.message(), "Settings: unknown option threads");
    }

    #[test]
    fn zerr_covers_every_kind_prefix() {
        assert_eq!(zerr!(Invalid, "x").message(), "Invalid: x");
        assert_eq!(zerr!(NullPointer, "x").message(), "Null Pointer: x");
        assert_eq!(zerr!(Transaction, "x").message(), "Transaction Context: x");
    }

    fn guarded(n: i32) -> ZResult<i32> {
        zensure!(n >= 0, OutOfRange, "negative input %d", n);
        if n > 100 {
            zbail!(Executor, "limit exceeded");
        }
        Ok(n * 2)
    }

    #[test]
    fn early_returns() {
        assert_eq!(guarded(4).unwrap(), 8);
        assert_eq!(guarded(-1).unwrap_err().message(), "Out of Range: negative input -1");
        assert_eq!(guarded(101).unwrap_err().message(), "Executor: limit exceeded");
    }
}
