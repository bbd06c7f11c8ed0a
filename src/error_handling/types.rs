//! Error type definitions.
//!
//! This module defines the errors produced while assembling and executing a
//! request, and the coarse kinds they are reported under.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors returned while validating or executing a `RequestSpec`.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The host is empty.
    #[error("missing host")]
    MissingHost,

    /// The method is empty.
    #[error("missing method")]
    MissingMethod,

    /// The method is not one of GET, POST or DELETE. Holds the uppercased name.
    #[error("method {0} not supported")]
    UnsupportedMethod(String),

    /// The body source file could not be read.
    #[error("failed to read body from {}: {source}", path.display())]
    FileRead {
        /// Body source path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The URL, a header, or the client configuration was rejected.
    #[error("failed to build request: {0}")]
    Build(String),

    /// DNS, connection, TLS, or other network failure.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read in full.
    #[error("failed to parse http response to string, reason: {0}")]
    ResponseRead(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    ///
    /// `body` holds at most the first
    /// [`ERROR_BODY_EXCERPT_LIMIT`](crate::config::ERROR_BODY_EXCERPT_LIMIT)
    /// bytes of the response.
    #[error("failed to parse http response to string, reason: http-error: '{status}', reason: '{body}'")]
    HttpStatus {
        /// Response status
        status: StatusCode,
        /// Leading part of the response body
        body: String,
    },

    /// The response could not be written to the output file.
    #[error("error writing response to file {}: {source}", path.display())]
    FileWrite {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl RequestError {
    /// Returns the reporting kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RequestError::MissingHost | RequestError::MissingMethod => ErrorKind::Validation,
            RequestError::UnsupportedMethod(_) => ErrorKind::UnsupportedMethod,
            RequestError::FileRead { .. } => ErrorKind::FileRead,
            RequestError::Build(_) => ErrorKind::RequestBuild,
            RequestError::Transport(_) => ErrorKind::Transport,
            RequestError::ResponseRead(_) | RequestError::HttpStatus { .. } => {
                ErrorKind::ResponseRead
            }
            RequestError::FileWrite { .. } => ErrorKind::FileWrite,
        }
    }

    /// Whether the error was raised before any network activity.
    pub fn is_pre_network(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Validation
                | ErrorKind::UnsupportedMethod
                | ErrorKind::FileRead
                | ErrorKind::RequestBuild
        )
    }
}

/// Coarse categories of request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    // Detected before any I/O
    Validation,
    UnsupportedMethod,
    // Local file I/O
    FileRead,
    FileWrite,
    // HTTP
    RequestBuild,
    Transport,
    ResponseRead,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation error",
            ErrorKind::UnsupportedMethod => "Unsupported method",
            ErrorKind::FileRead => "Body file read error",
            ErrorKind::FileWrite => "Output file write error",
            ErrorKind::RequestBuild => "Request build error",
            ErrorKind::Transport => "Transport error",
            ErrorKind::ResponseRead => "Response read error",
        }
    }
}
