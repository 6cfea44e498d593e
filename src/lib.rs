//! Typed Rust client for sending RCS messages through the Sinch Conversation API.
//!
//! The design follows three layers: a domain layer of strong types (credentials,
//! normalized recipients, request and outcome), a transport layer for the JSON wire
//! format, and a small client layer dispatching one `messages:send` call per recipient.
//!
//! ```rust,no_run
//! use sinch_rcs::{Credentials, SendOutcome, SendRcs, SinchClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sinch_rcs::SinchError> {
//!     let client = SinchClient::new(Credentials::new("key-id", "key-secret", "project", "app")?)?;
//!     let request = SendRcs::new(vec!["+46 700 000 001", "+46700000002"], "hello");
//!     if let SendOutcome::Batch(results) = client.send_rcs(request).await? {
//!         assert_eq!(results.len(), 2);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
mod config;
pub mod domain;
#[cfg(test)]
mod test_support;
mod transport;

pub use client::{GatewayRequestError, SinchClient, SinchClientBuilder, SinchError};
pub use domain::{
    AppId, AuthorizationToken, ConfigurationError, Credentials, DeliveryReport, KeyId, KeySecret,
    MessageText, ProjectId, RecipientAddress, Recipients, SendOutcome, SendRcs, SendResult,
};
