//! Application configuration.
//!
//! This module provides:
//! - Configuration constants (defaults, flag names)
//! - CLI option types and parsing
//! - The `RequestSpec` assembled from the options, and its validation

mod args;
mod constants;
mod types;
mod unquote;

// Re-export public API
pub use args::normalize_args;
pub use constants::*;
pub use types::{LogFormat, LogLevel, Opt, RequestSpec};
pub use unquote::unquote;
