//! Configuration types and CLI options.
//!
//! This module defines the clap-derived `Opt` struct, the logging enums it
//! carries, and the library-level `RequestSpec` the options are assembled into.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::constants::DEFAULT_SCHEME;
use crate::config::unquote::unquote;
use crate::error_handling::RequestError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// Every flag may be written with one dash (`-host localhost:8080`) or two
/// (`--host localhost:8080`); run the raw arguments through
/// [`normalize_args`](crate::config::normalize_args) before parsing. String
/// values may start with a dash (`-path -x`).
///
/// # Examples
///
/// ```bash
/// flagreq -method GET -host example.com -path /index.html
///
/// flagreq -method post -scheme https -host api.local:8443 -path /items \
///     -headers "Content-Type: application/json;Authorization: Bearer t0k3n" \
///     -path-body item.json -path-output reply.txt -skip-ssl-verify
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "flagreq",
    version,
    about = "Builds one HTTP request from flags, sends it, and emits the response body."
)]
pub struct Opt {
    /// HTTP method (GET/POST/DELETE)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub method: String,

    /// Request scheme
    #[arg(long, default_value = DEFAULT_SCHEME, allow_hyphen_values = true)]
    pub scheme: String,

    /// Host, optionally with a port
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub host: String,

    /// Request path
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub path: String,

    /// Path to a file whose contents become the request body
    #[arg(long = "path-body", allow_hyphen_values = true)]
    pub body_path: Option<String>,

    /// HTTP headers as `Name: Value` pairs separated by `;`
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub headers: String,

    /// Path to the file the response body is written to
    #[arg(long = "path-output", allow_hyphen_values = true)]
    pub output_path: Option<String>,

    /// Skip TLS certificate verification
    #[arg(
        long = "skip-ssl-verify",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub skip_ssl_verify: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Description of the single HTTP request to issue.
///
/// Built once from [`Opt`] (or programmatically), validated once, then handed
/// by value to [`execute_request`](crate::execute_request).
///
/// # Examples
///
/// ```
/// use flagreq::RequestSpec;
///
/// let spec = RequestSpec {
///     path: "/status".to_string(),
///     headers: "Accept: text/plain".to_string(),
///     ..RequestSpec::new("get", "localhost:8080")
/// };
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP method as given (case-insensitive)
    pub method: String,
    /// URL scheme
    pub scheme: String,
    /// URL host, optionally with a port
    pub host: String,
    /// URL path
    pub path: String,
    /// Raw header source: `Name: Value` pairs separated by `;`
    pub headers: String,
    /// File whose contents become the request body
    pub body_path: Option<PathBuf>,
    /// File the response text is written to
    pub output_path: Option<PathBuf>,
    /// Disable TLS certificate verification
    pub skip_tls_verify: bool,
}

impl Default for RequestSpec {
    fn default() -> Self {
        Self {
            method: String::new(),
            scheme: DEFAULT_SCHEME.to_string(),
            host: String::new(),
            path: String::new(),
            headers: String::new(),
            body_path: None,
            output_path: None,
            skip_tls_verify: false,
        }
    }
}

impl RequestSpec {
    /// Creates a spec with the two required fields set and defaults elsewhere.
    pub fn new(method: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            host: host.into(),
            ..Default::default()
        }
    }

    /// Checks that the required fields are present.
    ///
    /// Only emptiness is checked here; whether the method is supported is
    /// decided by the executor.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::MissingHost` when the host is empty, otherwise
    /// `RequestError::MissingMethod` when the method is empty.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.host.is_empty() {
            return Err(RequestError::MissingHost);
        }
        if self.method.is_empty() {
            return Err(RequestError::MissingMethod);
        }
        Ok(())
    }
}

impl From<Opt> for RequestSpec {
    /// Assembles a spec from parsed options.
    ///
    /// A header string given as a quoted literal is unquoted; one that is not
    /// a valid literal is kept as typed. Empty file paths count as unset.
    fn from(opt: Opt) -> Self {
        let headers = unquote(&opt.headers).unwrap_or(opt.headers);
        Self {
            method: opt.method,
            scheme: opt.scheme,
            host: opt.host,
            path: opt.path,
            headers,
            body_path: non_empty_path(opt.body_path),
            output_path: non_empty_path(opt.output_path),
            skip_tls_verify: opt.skip_ssl_verify,
        }
    }
}

fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Opt {
        Opt::try_parse_from(args.iter()).expect("arguments should parse")
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_validate_accepts_host_and_method() {
        let spec = RequestSpec::new("POST", "localhost:8080");
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_host() {
        let spec = RequestSpec::new("POST", "");
        assert!(matches!(spec.validate(), Err(RequestError::MissingHost)));
    }

    #[test]
    fn test_validate_rejects_missing_method() {
        let spec = RequestSpec::new("", "localhost:8080");
        assert!(matches!(spec.validate(), Err(RequestError::MissingMethod)));
    }

    #[test]
    fn test_validate_reports_host_before_method() {
        let spec = RequestSpec::default();
        assert!(matches!(spec.validate(), Err(RequestError::MissingHost)));
    }

    #[test]
    fn test_validate_does_not_check_method_support() {
        // PATCH is rejected later, by the executor
        let spec = RequestSpec::new("PATCH", "localhost:8080");
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_spec_default() {
        let spec = RequestSpec::default();
        assert_eq!(spec.scheme, "http");
        assert!(spec.method.is_empty());
        assert!(spec.host.is_empty());
        assert!(spec.body_path.is_none());
        assert!(spec.output_path.is_none());
        assert!(!spec.skip_tls_verify);
    }

    #[test]
    fn test_opt_defaults() {
        let opt = parse(&["flagreq"]);
        assert_eq!(opt.method, "");
        assert_eq!(opt.scheme, "http");
        assert_eq!(opt.host, "");
        assert_eq!(opt.path, "");
        assert_eq!(opt.headers, "");
        assert!(opt.body_path.is_none());
        assert!(opt.output_path.is_none());
        assert!(!opt.skip_ssl_verify);
        assert!(matches!(opt.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_skip_ssl_verify_forms() {
        assert!(parse(&["flagreq", "--skip-ssl-verify"]).skip_ssl_verify);
        assert!(parse(&["flagreq", "--skip-ssl-verify=true"]).skip_ssl_verify);
        assert!(!parse(&["flagreq", "--skip-ssl-verify=false"]).skip_ssl_verify);
    }

    #[test]
    fn test_bare_skip_ssl_verify_does_not_swallow_next_flag() {
        let opt = parse(&["flagreq", "--skip-ssl-verify", "--host", "example.com"]);
        assert!(opt.skip_ssl_verify);
        assert_eq!(opt.host, "example.com");
    }

    #[test]
    fn test_spec_from_opt_copies_fields() {
        let opt = parse(&[
            "flagreq",
            "--method",
            "delete",
            "--scheme",
            "https",
            "--host",
            "example.com:8443",
            "--path",
            "/items/7",
            "--path-body",
            "body.json",
            "--path-output",
            "out.txt",
            "--skip-ssl-verify",
        ]);
        let spec = RequestSpec::from(opt);
        assert_eq!(spec.method, "delete");
        assert_eq!(spec.scheme, "https");
        assert_eq!(spec.host, "example.com:8443");
        assert_eq!(spec.path, "/items/7");
        assert_eq!(spec.body_path, Some(PathBuf::from("body.json")));
        assert_eq!(spec.output_path, Some(PathBuf::from("out.txt")));
        assert!(spec.skip_tls_verify);
    }

    #[test]
    fn test_spec_from_opt_unquotes_headers() {
        let opt = parse(&["flagreq", "--headers", r#""Auth: bar;X-Id:\t7""#]);
        let spec = RequestSpec::from(opt);
        assert_eq!(spec.headers, "Auth: bar;X-Id:\t7");
    }

    #[test]
    fn test_spec_from_opt_keeps_unquotable_headers() {
        let opt = parse(&["flagreq", "--headers", r#""Auth: bar"#]);
        let spec = RequestSpec::from(opt);
        assert_eq!(spec.headers, r#""Auth: bar"#);
    }

    #[test]
    fn test_string_values_may_start_with_dash() {
        let opt = parse(&[
            "flagreq",
            "--path",
            "-x",
            "--headers",
            "-X-Id: 1",
            "--path-output",
            "-out.txt",
        ]);
        assert_eq!(opt.path, "-x");
        assert_eq!(opt.headers, "-X-Id: 1");
        assert_eq!(opt.output_path.as_deref(), Some("-out.txt"));
    }

    #[test]
    fn test_spec_from_opt_treats_empty_paths_as_unset() {
        let opt = parse(&["flagreq", "--path-body=", "--path-output="]);
        let spec = RequestSpec::from(opt);
        assert!(spec.body_path.is_none());
        assert!(spec.output_path.is_none());
    }
}
