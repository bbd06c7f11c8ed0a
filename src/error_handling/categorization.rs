//! Transport error categorization.
//!
//! `reqwest` folds DNS, connect, TLS and protocol failures into one error
//! type. This module sorts them into categories for the log line printed when
//! a request fails.

use strum_macros::EnumIter as EnumIterMacro;

/// Category of a `reqwest::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportErrorType {
    Builder,
    Redirect,
    Timeout,
    Connect,
    Request,
    Body,
    Decode,
    Other,
}

impl std::fmt::Display for TransportErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransportErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorType::Builder => "HTTP request builder error",
            TransportErrorType::Redirect => "HTTP request redirect error",
            TransportErrorType::Timeout => "HTTP request timeout error",
            TransportErrorType::Connect => "HTTP request connect error",
            TransportErrorType::Request => "HTTP request error",
            TransportErrorType::Body => "HTTP request body error",
            TransportErrorType::Decode => "HTTP request decode error",
            TransportErrorType::Other => "HTTP request other error",
        }
    }
}

/// Categorizes a `reqwest::Error` into a `TransportErrorType`.
///
/// Connection failures are also request failures in `reqwest`, so the more
/// specific checks (timeout, connect) come before the generic request check.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorType {
    if error.is_builder() {
        TransportErrorType::Builder
    } else if error.is_redirect() {
        TransportErrorType::Redirect
    } else if error.is_timeout() {
        TransportErrorType::Timeout
    } else if error.is_connect() {
        TransportErrorType::Connect
    } else if error.is_request() {
        TransportErrorType::Request
    } else if error.is_body() {
        TransportErrorType::Body
    } else if error.is_decode() {
        TransportErrorType::Decode
    } else {
        TransportErrorType::Other
    }
}
