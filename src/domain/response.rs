use reqwest::header::HeaderMap;

/// Outcome of a completed HTTP exchange with the gateway.
///
/// Any status code is returned as-is; use [`GatewayResponse::is_success`] to classify it.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: u16,
    pub headers: HeaderMap,
    /// Parsed JSON body, `None` when the gateway sent an empty body.
    pub body: Option<serde_json::Value>,
}

impl GatewayResponse {
    /// Returns `true` for `2xx` status codes.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}
