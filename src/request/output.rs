//! Response persistence.

use std::path::Path;

use log::info;

use crate::error_handling::RequestError;

/// Writes the response body to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `RequestError::FileWrite` if the file cannot be written.
pub async fn write_output(path: &Path, body: &[u8]) -> Result<(), RequestError> {
    tokio::fs::write(path, body)
        .await
        .map_err(|source| RequestError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    info!("response was written to file: {}", path.display());
    Ok(())
}
