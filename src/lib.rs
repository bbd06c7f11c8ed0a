//! flagreq library: one HTTP request assembled from command-line flags.
//!
//! The pipeline has two stages:
//! - **Configuration**: flags are parsed into a [`RequestSpec`] and validated
//!   (host and method must be present).
//! - **Execution**: [`execute_request`] loads headers and body, checks the
//!   method, sends the request, reads the response text and optionally writes
//!   it to a file.
//!
//! # Example
//!
//! ```no_run
//! use flagreq::{execute_request, RequestSpec};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = RequestSpec {
//!     path: "/items".to_string(),
//!     headers: "Content-Type: application/json".to_string(),
//!     body_path: Some("item.json".into()),
//!     ..RequestSpec::new("POST", "localhost:8080")
//! };
//! spec.validate()?;
//!
//! let text = execute_request(spec).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! [`execute_request`] is async and needs a Tokio runtime.

pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod request;

// Re-export public API
pub use config::{LogFormat, LogLevel, Opt, RequestSpec};
pub use error_handling::{ErrorKind, RequestError};
pub use request::{execute_request, HttpMethod};
