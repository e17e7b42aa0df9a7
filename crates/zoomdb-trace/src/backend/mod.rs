//! Platform debugging primitives behind one capability trait.
//!
//! Stack walking, symbol-table lookup and demangling have no portable
//! equivalent, so the printer only talks to [`SymbolBackend`]. Platforms
//! with `execinfo` get a real implementation; everything else gets
//! [`UnsupportedBackend`], which captures nothing and makes the printer
//! report an empty trace.

use std::fmt::Write as _;

/// Stack-walking, symbolization and demangling capability.
pub trait SymbolBackend {
    /// Capture up to `max` return addresses of the calling thread,
    /// innermost first. The first entry is the capture routine itself.
    fn capture(&self, max: usize) -> Vec<usize>;

    /// Resolve each address into a textual symbol line.
    ///
    /// Always returns one line per address. Addresses that cannot be
    /// resolved come back as `[0xADDR]`.
    fn symbolize(&self, addrs: &[usize]) -> Vec<String>;

    /// Demangle `mangled` into `out`, replacing its contents.
    ///
    /// Rust names are tried first, then Itanium C++ names. Returns `false`
    /// when neither scheme recognises `mangled`; `out` is then unspecified.
    /// `out` is reused across calls and grows as needed.
    fn demangle(&self, mangled: &str, out: &mut String) -> bool {
        demangle_symbol(mangled, out)
    }

    /// True if `capture` can return anything on this platform.
    fn is_supported(&self) -> bool {
        true
    }
}

/// Rust (legacy and v0) then Itanium C++ demangling into `out`.
pub fn demangle_symbol(mangled: &str, out: &mut String) -> bool {
    if let Ok(name) = rustc_demangle::try_demangle(mangled) {
        out.clear();
        return write!(out, "{:#}", name).is_ok();
    }
    match cpp_demangle::Symbol::new(mangled.as_bytes()) {
        Ok(sym) => {
            out.clear();
            write!(out, "{}", sym).is_ok()
        }
        Err(_) => false,
    }
}

/// Symbol line used for an address the symbol table could not resolve.
pub fn raw_address_line(addr: usize) -> String {
    format!("[{:#x}]", addr)
}

mod unsupported;
pub use unsupported::UnsupportedBackend;

cfg_if::cfg_if! {
    if #[cfg(any(all(target_os = "linux", target_env = "gnu"), target_os = "macos"))] {
        mod execinfo;
        pub use execinfo::ExecinfoBackend as PlatformBackend;
    } else {
        pub use unsupported::UnsupportedBackend as PlatformBackend;
    }
}

/// The best backend available on this platform.
pub fn platform_backend() -> PlatformBackend {
    PlatformBackend::default()
}
