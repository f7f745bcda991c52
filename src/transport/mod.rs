//! Transport layer: HTTP and wire-format details (URL, headers, body codecs).

mod body;
mod headers;
mod query;

pub use body::{decode_json_body, encode_json_body};
pub use headers::request_headers;
pub use query::compose_url;
