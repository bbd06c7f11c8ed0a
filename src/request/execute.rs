//! The request pipeline.

use log::{info, warn};
use reqwest::Request;

use crate::config::RequestSpec;
use crate::error_handling::{categorize_reqwest_error, RequestError};
use crate::initialization::init_client;
use crate::request::body::load_body;
use crate::request::headers::{parse_headers, to_header_map};
use crate::request::method::HttpMethod;
use crate::request::output::write_output;
use crate::request::response::read_response_body;
use crate::request::target_url::build_url;

/// Executes the request described by `spec` and returns the response text.
///
/// The steps run in order and the first failure ends the run:
/// 1. parse the header source (never fails)
/// 2. load the body file, if any
/// 3. check the method is GET, POST or DELETE
/// 4. build the request
/// 5. pick a client, with TLS verification off if requested
/// 6. send the request
/// 7. read the response body; a non-2xx status is an error
/// 8. write the body bytes, unaltered, to the output file, if any
///
/// Steps 1 to 4 make no network call, so a missing body file or an
/// unsupported method never reaches the server.
///
/// `spec` is expected to have passed [`RequestSpec::validate`].
///
/// The returned text is the body decoded as UTF-8, with invalid sequences
/// replaced by U+FFFD.
///
/// # Errors
///
/// Returns the `RequestError` of the first step that fails.
///
/// # Example
///
/// ```no_run
/// use flagreq::{execute_request, RequestSpec};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let spec = RequestSpec {
///     path: "/health".to_string(),
///     ..RequestSpec::new("GET", "localhost:8080")
/// };
/// spec.validate()?;
/// let text = execute_request(spec).await?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
pub async fn execute_request(spec: RequestSpec) -> Result<String, RequestError> {
    let headers = parse_headers(&spec.headers);
    let body = load_body(spec.body_path.as_deref()).await?;
    let method: HttpMethod = spec.method.parse()?;

    let url = build_url(&spec.scheme, &spec.host, &spec.path)?;
    info!(
        "method: {}, url: {}, headers: {:?}, body: {}",
        method,
        url,
        headers,
        String::from_utf8_lossy(&body)
    );

    let mut request = Request::new(method.into(), url);
    *request.headers_mut() = to_header_map(&headers)?;
    if !body.is_empty() {
        *request.body_mut() = Some(body.into());
    }

    let client = init_client(spec.skip_tls_verify)
        .map_err(|e| RequestError::Build(format!("failed to initialize HTTP client: {e}")))?;

    let response = client.execute(request).await.map_err(|e| {
        warn!("{}: {}", categorize_reqwest_error(&e), e);
        RequestError::Transport(e)
    })?;

    let body = read_response_body(response).await?;

    if let Some(path) = &spec.output_path {
        write_output(path, &body).await?;
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}
