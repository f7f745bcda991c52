#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize an optional JSON request body.
pub fn encode_json_body(
    body: Option<&serde_json::Value>,
) -> Result<Option<Vec<u8>>, TransportError> {
    body.map(serde_json::to_vec)
        .transpose()
        .map_err(TransportError::from)
}

/// Parse a response body as JSON; a blank body yields `None`.
pub fn decode_json_body(bytes: &[u8]) -> Result<Option<serde_json::Value>, TransportError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(bytes)?))
}
