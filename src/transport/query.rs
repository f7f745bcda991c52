use url::form_urlencoded::byte_serialize;

use crate::domain::{Host, RequestOptions};

/// Form-url-encode `pairs` as `k=v&k=v`.
///
/// Spaces become `%20` rather than `+`: the gateway servlet decodes query strings
/// with plain percent-decoding.
pub fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", escape(key), escape(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn escape(value: &str) -> String {
    // `byte_serialize` emits a literal `+` only for spaces; a real `+` is `%2B`.
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Build `host/path[?query]` for a request.
pub fn compose_url(host: &Host, options: &RequestOptions) -> String {
    let query = encode_query(options.query_pairs());
    let mut url = format!("{}/{}", host.as_str(), options.path());
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}
