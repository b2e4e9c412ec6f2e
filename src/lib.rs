//! Async SDK for the Scoreexl voice-agent platform.
//!
//! The [`Client`] owns the HTTP transport and the bearer/refresh token pair
//! and exposes one service accessor per API resource group
//! (`client.agents()`, `client.voices()`, …). A 401 response triggers one
//! token refresh followed by a single resubmit of the original request;
//! every failure surfaces as a typed [`Error`].

pub mod api;
pub mod transport;
pub mod types;

mod client;
mod credentials;
mod error;
mod util;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use credentials::SecretString;
pub use error::{ApiError, BodySnippetConfig, Error, ErrorKind, Result, TransportErrorKind};
pub use transport::middleware::RetryConfig;
