//! `execinfo` backend: `backtrace(3)` and `backtrace_symbols(3)`.
//!
//! On glibc each symbol line looks like
//! `./module(mangled_name+0x1c) [0x55d0c0de1234]`.

use std::ffi::CStr;
use std::ptr;

use libc::{c_char, c_int, c_void};
use zoomdb_common::zlog_debug;

use super::{raw_address_line, SymbolBackend};

extern "C" {
    fn backtrace(buffer: *mut *mut c_void, size: c_int) -> c_int;
    fn backtrace_symbols(buffer: *const *mut c_void, size: c_int) -> *mut *mut c_char;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ExecinfoBackend;

impl SymbolBackend for ExecinfoBackend {
    #[inline(never)]
    fn capture(&self, max: usize) -> Vec<usize> {
        let size = c_int::try_from(max).unwrap_or(c_int::MAX);
        if size <= 0 {
            return Vec::new();
        }
        let mut frames: Vec<*mut c_void> = vec![ptr::null_mut(); size as usize];
        // SAFETY: `frames` holds exactly `size` writable slots.
        let n = unsafe { backtrace(frames.as_mut_ptr(), size) };
        frames.truncate(n.max(0) as usize);
        frames.into_iter().map(|p| p as usize).collect()
    }

    fn symbolize(&self, addrs: &[usize]) -> Vec<String> {
        if addrs.is_empty() {
            return Vec::new();
        }
        let ptrs: Vec<*mut c_void> = addrs.iter().map(|&a| a as *mut c_void).collect();
        let size = match c_int::try_from(ptrs.len()) {
            Ok(n) => n,
            Err(_) => return addrs.iter().map(|&a| raw_address_line(a)).collect(),
        };

        // SAFETY: `ptrs` holds `size` entries; the result is one malloc'd block.
        let symbols = unsafe { backtrace_symbols(ptrs.as_ptr(), size) };
        if symbols.is_null() {
            zlog_debug!("backtrace_symbols failed for {} frames", addrs.len());
            return addrs.iter().map(|&a| raw_address_line(a)).collect();
        }

        let lines = addrs
            .iter()
            .enumerate()
            .map(|(i, &addr)| {
                // SAFETY: `symbols` has `size` entries, each NULL or a C string
                // inside the same allocation.
                let line = unsafe { *symbols.add(i) };
                if line.is_null() {
                    raw_address_line(addr)
                } else {
                    unsafe { CStr::from_ptr(line) }.to_string_lossy().into_owned()
                }
            })
            .collect();

        // SAFETY: allocated by backtrace_symbols; the strings live in the same block.
        unsafe { libc::free(symbols as *mut c_void) };
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_respects_limit() {
        let b = ExecinfoBackend;
        let addrs = b.capture(3);
        assert!(addrs.len() <= 3);
        assert!(b.capture(0).is_empty());
    }

    #[test]
    fn symbolize_returns_one_line_per_frame() {
        let b = ExecinfoBackend;
        let addrs = b.capture(8);
        let lines = b.symbolize(&addrs);
        assert_eq!(lines.len(), addrs.len());
        assert!(lines.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn symbolize_empty_is_empty() {
        assert!(ExecinfoBackend.symbolize(&[]).is_empty());
    }
}
