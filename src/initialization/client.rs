//! HTTP client initialization.

use log::warn;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for the request.
///
/// The client keeps `reqwest`'s defaults: no overall timeout, the default
/// redirect policy, and the default TLS backend. With `skip_tls_verify` set,
/// certificate validation is turned off, which is meant for
/// testing against self-signed endpoints.
///
/// # Errors
///
/// Returns a `reqwest::Error` if the TLS backend cannot be initialized.
pub fn init_client(skip_tls_verify: bool) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = ClientBuilder::new();
    if skip_tls_verify {
        warn!("skipping SSL verification");
        builder = builder.danger_accept_invalid_certs(true);
    }
    builder.build()
}
