//! Render a captured stack as text.
//!
//! ```text
//! Stack Trace:
//!   ./zoomdb : zoomdb::run+0x1c
//!   ./zoomdb: main()+0x10
//!   ./zoomdb [0x55d0c100]
//! ```
//!
//! Parsed frames show only the module path in front of the name; lines that
//! do not parse are printed whole.

use std::io::{self, Write};

use zoomdb_common::zlog_trace;

use crate::backend::SymbolBackend;
use crate::config::{TraceConfig, DEMANGLE_BUFFER_SIZE};
use crate::frame::StackFrame;

pub(crate) const HEADER: &str = "Stack Trace:";
pub(crate) const EMPTY_MARKER: &str = "  <empty, possibly corrupt>";

/// Capture up to `max` frames and resolve their symbol lines.
pub fn capture_frames<B: SymbolBackend + ?Sized>(backend: &B, max: usize) -> Vec<StackFrame> {
    let addrs = backend.capture(max);
    let lines = backend.symbolize(&addrs);
    addrs
        .into_iter()
        .zip(lines)
        .map(|(address, symbol)| StackFrame::new(address, symbol))
        .collect()
}

/// Write the trace of the calling thread to `out`.
///
/// Captures `max_frames + 1` addresses and drops the first, which belongs to
/// the capture routine. Stops at the first write error.
pub fn write_trace<B: SymbolBackend + ?Sized>(
    backend: &B,
    out: &mut dyn Write,
    config: &TraceConfig,
) -> io::Result<()> {
    writeln!(out, "{}", HEADER)?;

    let frames = capture_frames(backend, config.max_frames.saturating_add(1));
    if frames.is_empty() {
        writeln!(out, "{}", EMPTY_MARKER)?;
        return Ok(());
    }
    zlog_trace!("printing {} of {} captured frames", frames.len() - 1, frames.len());

    let mut scratch = String::with_capacity(DEMANGLE_BUFFER_SIZE);
    for frame in frames.iter().skip(1) {
        write_frame(backend, out, frame, config.demangle, &mut scratch)?;
    }
    Ok(())
}

fn write_frame<B: SymbolBackend + ?Sized>(
    backend: &B,
    out: &mut dyn Write,
    frame: &StackFrame,
    demangle: bool,
    scratch: &mut String,
) -> io::Result<()> {
    match frame.parse() {
        Some(sym) if demangle && backend.demangle(sym.mangled, scratch) => {
            writeln!(out, "  {} : {}+{}", sym.module, scratch, sym.offset)
        }
        Some(sym) => writeln!(out, "  {}: {}()+{}", sym.module, sym.mangled, sym.offset),
        None => writeln!(out, "  {}", frame.symbol),
    }
}
