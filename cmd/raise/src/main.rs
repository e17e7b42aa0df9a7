//! Raise a few ZoomDB errors and print a stack trace.
//!
//! # Environment Variables
//!
//! - `ZOOMDB_LOG_LEVEL=debug` - Set log level (off, error, warn, info, debug, trace)
//! - `ZOOMDB_FLUSH_EPRINT=1` - Flush log lines immediately
//! - `ZOOMDB_TRACE_MAX_FRAMES=16` - Frames printed per trace
//! - `ZOOMDB_TRACE_DEMANGLE=0` - Print raw mangled names

use zoomdb_common::{zlog_debug, zlog_info, TypeId};
use zoomdb_error::{
    templates, zensure, zerr, ErrorKind, NumericFault, ResultExt, ZError, ZResult,
};
use zoomdb_trace::TraceConfig;

// ZOOMDB_LOG_LEVEL=debug cargo run -p zoomdb-raise --features metrics
fn main() {
    println!("=== ZoomDB raise ===\n");

    let errors = vec![
        ZError::new("plain message, no category"),
        ZError::with_kind(ErrorKind::Catalog, "schema \"main\" is read-only"),
        zerr!(Parser, "syntax error at or near \"%s\" (offset %d)", "FORM", 14),
        ZError::value_out_of_range(TypeId::BigInt, 70_000, TypeId::SmallInt),
        ZError::value_out_of_range_float(TypeId::Decimal, 1e40, TypeId::BigInt),
        ZError::value_too_long(TypeId::VarChar, 32),
        ZError::cast(TypeId::from_name("array"), TypeId::Integer),
        ZError::unknown_type(42, " while binding parameter $1"),
        ZError::type_mismatch(TypeId::Date, TypeId::Timestamp, "in BETWEEN"),
        ZError::numeric_out_of_range("SUM(amount)", NumericFault::Overflow),
        ZError::incompatible_type(TypeId::Boolean as i64, "for operator +"),
        ZError::object_size("row of 70000 bytes exceeds page size"),
        ZError::serialization("truncated catalog entry"),
        ZError::transaction("cannot commit: no active transaction"),
    ];

    for (i, e) in errors.iter().enumerate() {
        zlog_debug!("error {} kind={:?} code={}", i, e.kind(), e.kind().code());
        println!("[{:>2}] {}", i, e);
    }

    let longest = errors
        .into_iter()
        .map(ZError::into_message)
        .max_by_key(String::len)
        .unwrap_or_default();
    zlog_info!("longest message: {} bytes", longest.len());

    println!("\nTemplates:");
    for t in templates::ALL {
        println!("  {:<20} {}", t.kind.label(), t.pattern);
    }

    println!();
    match checked_ratio(10, 0) {
        Ok(v) => println!("ratio = {}", v),
        Err(e) => println!("checked_ratio: {}", e),
    }

    match load_settings("/nonexistent/zoomdb.conf") {
        Ok(n) => println!("settings: {} bytes", n),
        Err(e) => {
            println!("load_settings: {}", e);
            if let Some(src) = std::error::Error::source(&e) {
                println!("  caused by: {}", src);
            }
        }
    }

    println!();
    let config = TraceConfig::from_env();
    zlog_info!(
        "printing trace (max_frames={}, demangle={})",
        config.max_frames,
        config.demangle
    );
    zoomdb_trace::print_stack_trace_with(
        &zoomdb_trace::platform_backend(),
        &mut std::io::stdout(),
        &config,
    );

    #[cfg(feature = "metrics")]
    {
        println!();
        print!("{}", zoomdb_error::metrics::dump_prometheus());
    }

    println!("\n=== Done ===");
}

fn checked_ratio(a: i64, b: i64) -> ZResult<i64> {
    zensure!(b != 0, DivideByZero, "%lld / %lld", a, b);
    Ok(a / b)
}

fn load_settings(path: &str) -> ZResult<usize> {
    let bytes = std::fs::read(path)
        .zerr_context(ErrorKind::Settings, "reading configuration file")?;
    Ok(bytes.len())
}
