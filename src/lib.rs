//! Typed Rust client for the Smart Messaging Suite SMS gateway HTTP API.
//!
//! The crate has three layers: a domain layer of validated values, a transport layer
//! for wire-format details (query encoding, headers, body codecs), and a small client
//! layer that dispatches one HTTP call per operation.
//!
//! ```rust,no_run
//! use smartsms::{Destination, GatewayClient, MessageText, Password, SendMessage, Username};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smartsms::GatewayError> {
//!     let client = GatewayClient::new(Username::new("...")?, Password::new("...")?)?;
//!     let message = SendMessage::new(
//!         Destination::new("639171234567")?,
//!         MessageText::new("hello")?,
//!     );
//!     let response = client.send_message(message).await?;
//!     println!("{} {:?}", response.status, response.body);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ClientConfig, GatewayClient, GatewayClientBuilder, GatewayError, HttpRequest, HttpResponse,
    HttpTransport,
};
pub use domain::{
    ApiVersion, DEFAULT_HOST, Destination, GatewayResponse, Host, MessageText, Method, Password,
    RequestOptions, SendMessage, Username, ValidationError,
};
