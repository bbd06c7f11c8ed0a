//! Target URL assembly from the scheme, host and path flags.

use url::Url;

use crate::error_handling::RequestError;

/// Builds `scheme://host/path`.
///
/// A path without a leading `/` gets one; characters not allowed in a path
/// (spaces, `?`, `#`, ...) are percent-encoded. An empty path yields the
/// root `/`.
///
/// # Errors
///
/// Returns `RequestError::Build` if the scheme or host does not form a valid
/// URL.
pub fn build_url(scheme: &str, host: &str, path: &str) -> Result<Url, RequestError> {
    let base = format!("{scheme}://{host}");
    let mut url =
        Url::parse(&base).map_err(|e| RequestError::Build(format!("invalid URL {base}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(RequestError::Build(format!("invalid URL {base}: no host")));
    }

    if path.is_empty() || path.starts_with('/') {
        url.set_path(path);
    } else {
        url.set_path(&format!("/{path}"));
    }
    Ok(url)
}
