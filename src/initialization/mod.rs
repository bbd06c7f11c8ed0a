//! Application initialization.
//!
//! This module provides functions to set up the resources a run needs:
//! - The logger (plain or JSON output)
//! - The HTTP client (with or without TLS verification)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
