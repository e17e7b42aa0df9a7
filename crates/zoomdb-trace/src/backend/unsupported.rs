//! Fallback backend for platforms without a stack-walking facility.

use super::{raw_address_line, SymbolBackend};

/// Captures nothing. The printer reports such traces as empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedBackend;

impl SymbolBackend for UnsupportedBackend {
    fn capture(&self, _max: usize) -> Vec<usize> {
        Vec::new()
    }

    fn symbolize(&self, addrs: &[usize]) -> Vec<String> {
        addrs.iter().map(|&a| raw_address_line(a)).collect()
    }

    fn is_supported(&self) -> bool {
        false
    }
}
