//! Leveled stderr logging for ZoomDB.
//!
//! One line per call, written under the stderr lock so that lines from
//! different threads never interleave mid-line.
//!
//! # Environment Variables
//!
//! - `ZOOMDB_LOG_LEVEL=<level>` - off, error, warn, info, debug, trace (or 0-5).
//!   Default: warn.
//! - `ZOOMDB_FLUSH_EPRINT=1` - Flush stderr after each line.
//!
//! # Usage
//!
//! ```ignore
//! use zoomdb_common::{zlog_debug, zlog_warn};
//!
//! zlog_debug!("captured {} frames", n);
//! zlog_warn!("symbol table unavailable");
//! ```

use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::env::{env_get_bool, env_get_opt};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Parse a level name or its digit. Unknown spellings give `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "0" => Some(LogLevel::Off),
            "error" | "1" => Some(LogLevel::Error),
            "warn" | "warning" | "2" => Some(LogLevel::Warn),
            "info" | "3" => Some(LogLevel::Info),
            "debug" | "4" => Some(LogLevel::Debug),
            "trace" | "5" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Off => "",
            LogLevel::Error => "[zoomdb ERROR]",
            LogLevel::Warn => "[zoomdb WARN] ",
            LogLevel::Info => "[zoomdb INFO] ",
            LogLevel::Debug => "[zoomdb DEBUG]",
            LogLevel::Trace => "[zoomdb TRACE]",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::parse(s).ok_or(())
    }
}

static FLUSH_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize logging from the environment.
///
/// Runs at most once; the first log call triggers it implicitly.
/// Programmatic `set_*` calls made afterwards win over the environment.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    FLUSH_ENABLED.store(env_get_bool("ZOOMDB_FLUSH_EPRINT", false), Ordering::Relaxed);

    if let Some(level) = env_get_opt::<LogLevel>("ZOOMDB_LOG_LEVEL") {
        LOG_LEVEL.store(level as u8, Ordering::Relaxed);
    }
}

#[inline]
pub fn flush_enabled() -> bool {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init();
    }
    FLUSH_ENABLED.load(Ordering::Relaxed)
}

#[inline]
pub fn log_level() -> LogLevel {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init();
    }
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

pub fn set_log_level(level: LogLevel) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn set_flush_enabled(enabled: bool) {
    init();
    FLUSH_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn level_enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && level <= log_level()
}

#[doc(hidden)]
pub fn _zprintln_impl(args: std::fmt::Arguments<'_>) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = handle.write_fmt(args);
    let _ = handle.write_all(b"\n");
    if flush_enabled() {
        let _ = handle.flush();
    }
}

#[doc(hidden)]
pub fn _zlog_impl(level: LogLevel, args: std::fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = write!(handle, "{} ", level.prefix());
    let _ = handle.write_fmt(args);
    let _ = handle.write_all(b"\n");
    if flush_enabled() {
        let _ = handle.flush();
    }
}

// ============================================================================
// Public Macros
// ============================================================================

/// Print to stderr with newline, ignoring the log level.
#[macro_export]
macro_rules! zprintln {
    () => {{
        $crate::zlog::_zprintln_impl(format_args!(""));
    }};
    ($($arg:tt)*) => {{
        $crate::zlog::_zprintln_impl(format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! zlog_error {
    ($($arg:tt)*) => {{
        $crate::zlog::_zlog_impl($crate::zlog::LogLevel::Error, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! zlog_warn {
    ($($arg:tt)*) => {{
        $crate::zlog::_zlog_impl($crate::zlog::LogLevel::Warn, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! zlog_info {
    ($($arg:tt)*) => {{
        $crate::zlog::_zlog_impl($crate::zlog::LogLevel::Info, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! zlog_debug {
    ($($arg:tt)*) => {{
        $crate::zlog::_zlog_impl($crate::zlog::LogLevel::Debug, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! zlog_trace {
    ($($arg:tt)*) => {{
        $crate::zlog::_zlog_impl($crate::zlog::LogLevel::Trace, format_args!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels_ordered() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_level_from_u8() {
        assert_eq!(LogLevel::from_u8(0), LogLevel::Off);
        assert_eq!(LogLevel::from_u8(2), LogLevel::Warn);
        assert_eq!(LogLevel::from_u8(99), LogLevel::Trace);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("3"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("loud"), None);
        assert_eq!("trace".parse::<LogLevel>(), Ok(LogLevel::Trace));
    }

    #[test]
    fn test_off_is_never_enabled() {
        assert!(!level_enabled(LogLevel::Off));
    }

    #[test]
    fn test_macros_compile() {
        set_log_level(LogLevel::Off);

        zprintln!();
        zlog_error!("error {}", "msg");
        zlog_warn!("warn");
        zlog_info!("info");
        zlog_debug!("debug {}", 1);
        zlog_trace!("trace");
    }
}
