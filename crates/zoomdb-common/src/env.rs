//! Environment variable utilities
//!
//! Every runtime knob in ZoomDB diagnostics is an optional `ZOOMDB_*`
//! environment variable layered over a compiled-in default.
//!
//! # Usage
//!
//! ```ignore
//! use zoomdb_common::env::{env_get, env_get_bool};
//!
//! let frames: usize = env_get("ZOOMDB_TRACE_MAX_FRAMES", 63);
//! let demangle = env_get_bool("ZOOMDB_TRACE_DEMANGLE", true);
//! ```

use std::str::FromStr;

/// Get environment variable parsed as type T, or return default.
///
/// Unset variables and values that fail to parse both yield `default`.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Get environment variable as boolean.
///
/// `1`, `true`, `yes`, `on` are true and `0`, `false`, `no`, `off` are
/// false (case-insensitive). Anything else, including unset, returns the
/// default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => parse_bool(&val).unwrap_or(default),
        Err(_) => default,
    }
}

/// Get environment variable as optional value.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Parse the boolean spellings accepted by [`env_get_bool`].
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_get_default() {
        let val: usize = env_get("__ZOOMDB_TEST_UNSET_VAR__", 63);
        assert_eq!(val, 63);
    }

    #[test]
    fn test_env_get_opt_none() {
        let val: Option<usize> = env_get_opt("__ZOOMDB_TEST_UNSET_VAR__");
        assert!(val.is_none());
    }

    #[test]
    fn test_env_get_with_set_var() {
        std::env::set_var("__ZOOMDB_TEST_NUM__", " 128 ");
        let val: usize = env_get("__ZOOMDB_TEST_NUM__", 0);
        assert_eq!(val, 128);
        std::env::remove_var("__ZOOMDB_TEST_NUM__");
    }

    #[test]
    fn test_env_get_invalid_parse() {
        std::env::set_var("__ZOOMDB_TEST_INVALID__", "lots");
        let val: usize = env_get("__ZOOMDB_TEST_INVALID__", 99);
        assert_eq!(val, 99);
        std::env::remove_var("__ZOOMDB_TEST_INVALID__");
    }

    #[test]
    fn test_env_get_bool_variants() {
        std::env::set_var("__ZOOMDB_TEST_BOOL__", "YES");
        assert!(env_get_bool("__ZOOMDB_TEST_BOOL__", false));

        std::env::set_var("__ZOOMDB_TEST_BOOL__", "off");
        assert!(!env_get_bool("__ZOOMDB_TEST_BOOL__", true));

        // Unrecognised spelling keeps the default either way.
        std::env::set_var("__ZOOMDB_TEST_BOOL__", "maybe");
        assert!(env_get_bool("__ZOOMDB_TEST_BOOL__", true));
        assert!(!env_get_bool("__ZOOMDB_TEST_BOOL__", false));

        std::env::remove_var("__ZOOMDB_TEST_BOOL__");
        assert!(env_get_bool("__ZOOMDB_TEST_BOOL__", true));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("On"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool(""), None);
    }
}
