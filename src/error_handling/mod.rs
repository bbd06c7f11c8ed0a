//! Error handling.
//!
//! This module provides:
//! - The `RequestError` taxonomy returned by the request pipeline
//! - Error kinds used for reporting (`ErrorKind`)
//! - Categorization of transport failures reported by `reqwest`
//! - Initialization errors (logger setup)
//!
//! Every error is terminal: the pipeline stops at the first one and nothing is
//! retried.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, TransportErrorType};
pub use types::{ErrorKind, InitializationError, RequestError};
