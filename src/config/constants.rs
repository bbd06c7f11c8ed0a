//! Configuration constants.
//!
//! Flag names and default values shared by the CLI parser and the library
//! `RequestSpec`.

/// Default URL scheme when `-scheme` is not given.
pub const DEFAULT_SCHEME: &str = "http";

/// Separator between `Name: Value` pairs in the `-headers` string.
pub const HEADER_PAIR_SEPARATOR: char = ';';

/// Separator between a header name and its value.
pub const HEADER_NAME_SEPARATOR: char = ':';

/// Maximum number of response body bytes quoted in a non-2xx error message.
pub const ERROR_BODY_EXCERPT_LIMIT: usize = 1024;

/// Long flag names understood by the CLI.
///
/// Arguments spelled `-name` or `-name=value` with one of these names are
/// rewritten to the `--name` form before clap sees them.
pub const FLAG_NAMES: &[&str] = &[
    "method",
    "scheme",
    "host",
    "path",
    "path-body",
    "headers",
    "path-output",
    "skip-ssl-verify",
    "log-level",
    "log-format",
    "help",
    "version",
];
