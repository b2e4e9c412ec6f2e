//! Wire-level request/response types and the pluggable async transport.

pub mod async_transport;
pub mod middleware;
pub mod request;

#[cfg(feature = "metrics")]
pub(crate) mod metrics;

use http::{HeaderMap, HeaderValue, Method, StatusCode};
use std::time::Duration;
use url::Url;

/// One part of a `multipart/form-data` upload.
#[derive(Clone, Debug)]
pub struct MultipartPart {
    pub name: String,
    pub value: MultipartValue,
}

#[derive(Clone, Debug)]
pub enum MultipartValue {
    Text(String),
    File {
        data: Vec<u8>,
        filename: String,
        content_type: Option<String>,
    },
}

/// Payload attached to an outgoing request.
#[derive(Clone, Debug)]
pub enum TransportBody {
    Bytes {
        bytes: Vec<u8>,
        content_type: Option<HeaderValue>,
    },
    Multipart {
        parts: Vec<MultipartPart>,
    },
}

/// Fully resolved request handed to the transport: absolute URL, merged
/// headers, nothing left for lower layers to decide except the send itself.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
    pub body: Option<TransportBody>,
    pub timeout: Duration,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ResponseMeta {
    /// Transient-retry replays performed beneath the client (not refresh
    /// resubmits, which the client counts itself).
    pub retries: usize,
}

#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    pub meta: ResponseMeta,
}
