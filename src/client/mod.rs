//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod config;
mod http;

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use reqwest::header::HeaderMap;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::domain::{
    ApiVersion, GatewayResponse, Host, Password, RequestOptions, SendMessage, Username,
    ValidationError,
};

pub use config::{
    ClientConfig, DEFAULT_TIMEOUT_MILLIS, ENV_HOST, ENV_PASSWORD, ENV_TIMEOUT_MILLIS,
    ENV_USERNAME,
};
pub use http::{BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport};

use http::ReqwestTransport;

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MILLIS);

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GatewayClient`].
///
/// Non-2xx HTTP statuses are not errors; they come back as a [`GatewayResponse`].
pub enum GatewayError {
    /// HTTP client / transport failure (DNS, TLS, connection refused, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// No complete response arrived within the configured timeout.
    #[error("request timed out after {after:?}")]
    Timeout { after: Duration },

    /// Response body was not valid JSON. The raw body and headers are kept for inspection.
    #[error("parse error (HTTP {status}): {source}")]
    Parse {
        status: u16,
        headers: HeaderMap,
        body: String,
        #[source]
        source: BoxError,
    },

    /// A callback-style call was made outside a Tokio runtime.
    #[error("no Tokio runtime available to run the request")]
    NoRuntime,

    /// The request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] BoxError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`GatewayClient`].
///
/// Use this when you need to customize the host, timeout, user-agent or transport.
pub struct GatewayClientBuilder {
    username: Username,
    password: Password,
    host: Host,
    timeout: Duration,
    user_agent: Option<String>,
    transport: Option<TransportSlot>,
}

#[derive(Clone)]
struct TransportSlot(Arc<dyn HttpTransport>);

impl std::fmt::Debug for TransportSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HttpTransport")
    }
}

impl GatewayClientBuilder {
    /// Create a builder with the production host and a 60 second timeout.
    pub fn new(username: Username, password: Password) -> Self {
        Self {
            username,
            password,
            host: Host::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the gateway base URL.
    pub fn host(mut self, host: Host) -> Self {
        self.host = host;
        self
    }

    /// Bound on a whole exchange, from dispatch until the body has been read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header. Ignored when a custom transport is set.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the default reqwest-based transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(TransportSlot(transport));
        self
    }

    /// Build a [`GatewayClient`].
    pub fn build(self) -> Result<GatewayClient, GatewayError> {
        if self.timeout.is_zero() {
            return Err(ValidationError::InvalidTimeout.into());
        }

        let http = match self.transport {
            Some(TransportSlot(transport)) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| GatewayError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(GatewayClient {
            username: self.username,
            password: self.password,
            host: self.host,
            timeout: self.timeout,
            http,
        })
    }
}

#[derive(Clone)]
/// Smart Messaging Suite gateway client.
///
/// Every call builds its URL and headers from the immutable configuration and issues
/// exactly one HTTP request: no retries, no pooling guarantees beyond what the
/// transport provides. Clones share the transport and can be used concurrently.
pub struct GatewayClient {
    username: Username,
    password: Password,
    host: Host,
    timeout: Duration,
    http: Arc<dyn HttpTransport>,
}

impl GatewayClient {
    /// Create a client for the production host with the default timeout.
    ///
    /// For more customization, use [`GatewayClient::builder`].
    pub fn new(username: Username, password: Password) -> Result<Self, GatewayError> {
        GatewayClientBuilder::new(username, password).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(username: Username, password: Password) -> GatewayClientBuilder {
        GatewayClientBuilder::new(username, password)
    }

    /// Validate `config` and build a client from it.
    pub fn from_config(config: ClientConfig) -> Result<Self, GatewayError> {
        let mut builder = GatewayClientBuilder::new(
            Username::new(config.username)?,
            Password::new(config.password)?,
        );
        if let Some(host) = config.host {
            builder = builder.host(Host::new(host)?);
        }
        let millis = config
            .timeout_millis
            .filter(|millis| *millis > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MILLIS);
        builder.timeout(Duration::from_millis(millis)).build()
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send a text message: `POST {host}/sendmsg?destination=..&text=..`.
    pub async fn send_message(
        &self,
        message: SendMessage,
    ) -> Result<GatewayResponse, GatewayError> {
        self.request(message.into()).await
    }

    /// Perform one call against `{host}/{path}[?query]`.
    ///
    /// Errors:
    /// - [`GatewayError::Transport`] / [`GatewayError::Timeout`] when no response arrived,
    /// - [`GatewayError::Parse`] when the response body is not JSON.
    pub async fn request(
        &self,
        options: RequestOptions,
    ) -> Result<GatewayResponse, GatewayError> {
        let body = crate::transport::encode_json_body(options.body())
            .map_err(|err| GatewayError::Encode(Box::new(err)))?;
        let request = HttpRequest {
            method: options.http_method(),
            url: crate::transport::compose_url(&self.host, &options),
            headers: crate::transport::request_headers(
                &self.username,
                &self.password,
                SystemTime::now(),
            ),
            body,
        };

        tracing::debug!(
            method = options.http_method().as_str(),
            path = options.path(),
            api_version = options.version().map(ApiVersion::as_str),
            "dispatching gateway request"
        );

        let response = match tokio::time::timeout(self.timeout, self.http.send(request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                tracing::warn!(path = options.path(), error = %err, "gateway request failed");
                return Err(GatewayError::Transport(err));
            }
            Err(_) => {
                tracing::warn!(
                    path = options.path(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "gateway request timed out"
                );
                return Err(GatewayError::Timeout {
                    after: self.timeout,
                });
            }
        };

        tracing::debug!(
            path = options.path(),
            status = response.status,
            "gateway responded"
        );

        let HttpResponse {
            status,
            headers,
            body,
        } = response;
        match crate::transport::decode_json_body(&body) {
            Ok(body) => Ok(GatewayResponse {
                status,
                headers,
                body,
            }),
            Err(err) => Err(GatewayError::Parse {
                status,
                headers,
                body: String::from_utf8_lossy(&body).into_owned(),
                source: Box::new(err),
            }),
        }
    }

    /// Spawn [`GatewayClient::send_message`] on the current Tokio runtime and hand the
    /// result to `callback`.
    ///
    /// Returns immediately; `callback` runs exactly once when the call completes.
    /// Outside a Tokio runtime nothing is sent: `callback` is invoked in place with
    /// [`GatewayError::NoRuntime`] and `None` is returned.
    pub fn send_message_with<F>(
        &self,
        message: SendMessage,
        callback: F,
    ) -> Option<JoinHandle<()>>
    where
        F: FnOnce(Result<GatewayResponse, GatewayError>) + Send + 'static,
    {
        self.request_with(message.into(), callback)
    }

    /// Callback flavour of [`GatewayClient::request`]; see [`GatewayClient::send_message_with`].
    pub fn request_with<F>(&self, options: RequestOptions, callback: F) -> Option<JoinHandle<()>>
    where
        F: FnOnce(Result<GatewayResponse, GatewayError>) + Send + 'static,
    {
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!(path = options.path(), "no Tokio runtime for gateway request");
            callback(Err(GatewayError::NoRuntime));
            return None;
        };

        let client = self.clone();
        Some(runtime.spawn(async move {
            let result = client.request(options).await;
            callback(result);
        }))
    }
}
