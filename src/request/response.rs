//! Response handling.

use log::debug;

use crate::config::ERROR_BODY_EXCERPT_LIMIT;
use crate::error_handling::RequestError;

/// Reads the full response body as raw bytes.
///
/// The bytes are kept exactly as the server sent them; no charset decoding is
/// applied.
///
/// # Errors
///
/// Returns `RequestError::ResponseRead` if the body cannot be read in full,
/// and `RequestError::HttpStatus` if the status is outside 2xx.
pub async fn read_response_body(response: reqwest::Response) -> Result<Vec<u8>, RequestError> {
    let status = response.status();
    debug!("response status: {status}");

    let body = response.bytes().await.map_err(RequestError::ResponseRead)?;
    debug!("response body: {} bytes", body.len());

    if !status.is_success() {
        return Err(RequestError::HttpStatus {
            status,
            body: excerpt(&String::from_utf8_lossy(&body), ERROR_BODY_EXCERPT_LIMIT).to_string(),
        });
    }
    Ok(body.to_vec())
}

/// Returns at most `limit` bytes of `text`, cut on a character boundary.
fn excerpt(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
