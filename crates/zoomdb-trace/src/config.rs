//! Trace printing configuration.
//!
//! # Environment Variables
//!
//! - `ZOOMDB_TRACE_MAX_FRAMES` - Frames printed per trace (default: 63)
//! - `ZOOMDB_TRACE_DEMANGLE` - Demangle symbol names (default: on)

use zoomdb_common::env::{env_get, env_get_bool};

/// Frames printed by [`print_stack_trace`](crate::print_stack_trace).
pub const DEFAULT_MAX_FRAMES: usize = 63;

/// Initial capacity of the demangling scratch buffer.
pub const DEMANGLE_BUFFER_SIZE: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    /// Frames to print, not counting the capture routine itself.
    pub max_frames: usize,

    /// Demangle names. When off every parsed frame uses the
    /// `name()+offset` form.
    pub demangle: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl TraceConfig {
    /// Built-in defaults, ignoring the environment.
    pub fn new() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
            demangle: true,
        }
    }

    pub fn from_env() -> Self {
        Self {
            max_frames: env_get("ZOOMDB_TRACE_MAX_FRAMES", DEFAULT_MAX_FRAMES),
            demangle: env_get_bool("ZOOMDB_TRACE_DEMANGLE", true),
        }
    }

    pub fn max_frames(mut self, n: usize) -> Self {
        self.max_frames = n;
        self
    }

    pub fn demangle(mut self, enabled: bool) -> Self {
        self.demangle = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_builtin_defaults() {
        let c = TraceConfig::new();
        assert_eq!(c.max_frames, 63);
        assert!(c.demangle);
    }

    #[test]
    fn builder_overrides() {
        let c = TraceConfig::new().max_frames(5).demangle(false);
        assert_eq!(c.max_frames, 5);
        assert!(!c.demangle);
    }
}
