//! Request execution.
//!
//! This module turns a validated `RequestSpec` into one HTTP exchange:
//! - Header source parsing and conversion
//! - Body loading
//! - Method dispatch over the supported set
//! - URL assembly
//! - Response reading and persistence

mod body;
mod execute;
mod headers;
mod method;
mod output;
mod response;
mod target_url;

// Re-export public API
pub use body::load_body;
pub use execute::execute_request;
pub use headers::{parse_headers, to_header_map, ParsedHeaders};
pub use method::HttpMethod;
pub use output::write_output;
pub use response::read_response_body;
pub use target_url::build_url;
