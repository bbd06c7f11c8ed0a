//! Request body loading.

use std::path::Path;

use log::info;

use crate::error_handling::RequestError;

/// Loads the request body.
///
/// With no path the body is empty. Otherwise the whole file is read into
/// memory.
///
/// # Errors
///
/// Returns `RequestError::FileRead` if the file cannot be read.
pub async fn load_body(path: Option<&Path>) -> Result<Vec<u8>, RequestError> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    info!("loading body from: {}", path.display());
    tokio::fs::read(path)
        .await
        .map_err(|source| RequestError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}
