//! # zoomdb-common
//!
//! Leaf helpers shared by the ZoomDB diagnostics crates.
//!
//! ## Modules
//!
//! - `printf` - printf-style template rendering with a growing buffer
//! - `types` - SQL value type identifiers and their canonical names
//! - `zlog` - Leveled stderr logging macros
//! - `env` - Environment variable utilities

pub mod env;
pub mod printf;
pub mod types;
pub mod zlog;

pub use env::{env_get, env_get_bool, env_get_opt};
pub use printf::{format, snprintf, vformat, Arg};
pub use types::TypeId;
pub use zlog::{set_flush_enabled, set_log_level, LogLevel};
