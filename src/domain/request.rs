use serde::Serialize;

use crate::domain::value::{ApiVersion, Destination, MessageText};

/// Endpoint path of the message-sending call.
pub const SEND_MESSAGE_PATH: &str = "sendmsg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Parameters of a single low-level gateway call.
///
/// Query keys are unique: setting a key twice replaces the earlier value in place,
/// so the encoded order follows first insertion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestOptions {
    path: String,
    method: Method,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    api_version: Option<ApiVersion>,
}

impl RequestOptions {
    /// Create options for `path` (appended after `host + "/"`), using `GET` and no query.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add a query parameter; the value is converted with `to_string`.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        let value = value.to_string();
        match self.query.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.query.push((key, value)),
        }
        self
    }

    /// Attach a JSON request body.
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` and attach it as the JSON request body.
    pub fn json_body<T: Serialize>(self, body: &T) -> Result<Self, serde_json::Error> {
        Ok(self.json(serde_json::to_value(body)?))
    }

    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn http_method(&self) -> Method {
        self.method
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }
}

/// A message for the `sendmsg` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    destination: Destination,
    text: MessageText,
}

impl SendMessage {
    pub fn new(destination: Destination, text: MessageText) -> Self {
        Self { destination, text }
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }
}

impl From<SendMessage> for RequestOptions {
    fn from(value: SendMessage) -> Self {
        RequestOptions::new(SEND_MESSAGE_PATH)
            .method(Method::Post)
            .query(Destination::FIELD, value.destination.raw())
            .query(MessageText::FIELD, value.text.as_str())
    }
}
