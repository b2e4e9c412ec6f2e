//! High-level asynchronous platform client.

use crate::{
    ApiError, BodySnippetConfig, Error, api,
    credentials::TokenStore,
    transport::{
        TransportRequest, TransportResponse,
        async_transport::{AsyncTransport, DynAsyncTransport, ReqwestAsync},
        middleware::{Retry, RetryConfig},
        request::{Request, Response},
    },
    util::{
        diagnostics,
        redact::redact_text,
        url::{endpoint_url, normalize_base_url, sanitize_url_for_error},
    },
};
use http::{HeaderMap, HeaderValue, Method, StatusCode, header::AUTHORIZATION};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use url::Url;

#[cfg(feature = "tracing")]
use tracing::field;

/// Default platform origin.
pub const DEFAULT_BASE_URL: &str = "https://voiceagentv2.scoreexl.com";

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Token refresh endpoint, relative to the base URL.
const REFRESH_SEGMENTS: [&str; 2] = ["auth", "refresh"];

#[derive(Deserialize)]
struct RotatedTokens {
    access_token: String,
    refresh_token: String,
}

/// Configures and constructs [`Client`].
pub struct ClientBuilder {
    base_url: Url,
    access_token: Option<String>,
    refresh_token: Option<String>,
    insecure: bool,
    user_agent: String,
    timeout: Duration,
    connect_timeout: Duration,
    no_proxy: bool,
    retry: Option<RetryConfig>,
    default_headers: HeaderMap,
    body_snippet: BodySnippetConfig,
}

impl ClientBuilder {
    fn try_new(base: impl AsRef<str>) -> Result<Self, Error> {
        let base_url = normalize_base_url(base.as_ref())?;
        Ok(Self {
            base_url,
            access_token: None,
            refresh_token: None,
            insecure: false,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            no_proxy: false,
            retry: None,
            default_headers: HeaderMap::new(),
            body_snippet: BodySnippetConfig::default(),
        })
    }

    /// Start from an existing bearer token (e.g. a stored session).
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Start from an existing refresh token.
    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Ignore system proxy environment variables.
    pub fn no_system_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    /// Accept invalid TLS certificates (**dangerous**).
    pub fn danger_accept_invalid_certs(mut self, yes: bool) -> Self {
        self.insecure = yes;
        self
    }

    /// Override the default `User-Agent` header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Adjust the per-request timeout.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    /// Adjust the connection establishment timeout.
    pub fn connect_timeout(mut self, value: Duration) -> Self {
        self.connect_timeout = value;
        self
    }

    /// Add a default header applied to every request.
    pub fn default_header(mut self, name: http::header::HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Add a set of default headers applied to every request.
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers.extend(headers);
        self
    }

    /// Enable/disable capturing `body_snippet` on errors and decode failures.
    pub fn capture_body_snippet(mut self, enabled: bool) -> Self {
        self.body_snippet.enabled = enabled;
        self
    }

    /// Set max bytes to keep for `body_snippet`.
    pub fn max_body_snippet_bytes(mut self, max_bytes: usize) -> Self {
        self.body_snippet.max_bytes = max_bytes;
        self
    }

    /// Wrap the transport with a conservative retry policy for transient
    /// failures. Independent of the token refresh protocol.
    pub fn with_retry(mut self, max_retries: usize, base_delay: Duration) -> Self {
        self.retry = Some(RetryConfig::new(max_retries, base_delay));
        self
    }

    /// Use a custom retry configuration.
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry = Some(config);
        self
    }

    /// Finalise configuration and build the client.
    pub fn build(self) -> Result<Client, Error> {
        let mut transport: DynAsyncTransport = Arc::new(ReqwestAsync::try_new(
            self.insecure,
            &self.user_agent,
            self.timeout,
            self.connect_timeout,
            self.no_proxy,
        )?);

        if let Some(retry) = self.retry {
            transport = Arc::new(Retry::new(transport, retry));
        }

        Ok(Client {
            inner: Arc::new(Inner {
                base: RwLock::new(self.base_url),
                tokens: TokenStore::new(self.access_token, self.refresh_token),
                timeout: self.timeout,
                default_headers: self.default_headers,
                body_snippet: self.body_snippet,
                transport,
            }),
        })
    }
}

/// Single point of outbound HTTP traffic: attaches the stored bearer token,
/// runs the refresh-on-401 protocol, and normalizes failures into [`Error`].
///
/// Cheap to clone; clones share the credential pair.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    base: RwLock<Url>,
    tokens: TokenStore,
    timeout: Duration,
    default_headers: HeaderMap,
    body_snippet: BodySnippetConfig,
    transport: DynAsyncTransport,
}

impl Client {
    pub fn builder(base: impl AsRef<str>) -> Result<ClientBuilder, Error> {
        ClientBuilder::try_new(base)
    }

    /// Client against the default platform origin, all default settings.
    pub fn new() -> Result<Self, Error> {
        Self::builder(DEFAULT_BASE_URL)?.build()
    }

    /* ───────────── resource services ───────────── */

    #[must_use]
    pub fn auth(&self) -> api::AuthService {
        api::AuthService::new(self.clone())
    }

    #[must_use]
    pub fn users(&self) -> api::UsersService {
        api::UsersService::new(self.clone())
    }

    #[must_use]
    pub fn agents(&self) -> api::AgentsService {
        api::AgentsService::new(self.clone())
    }

    #[must_use]
    pub fn voices(&self) -> api::VoicesService {
        api::VoicesService::new(self.clone())
    }

    #[must_use]
    pub fn notifications(&self) -> api::NotificationsService {
        api::NotificationsService::new(self.clone())
    }

    #[must_use]
    pub fn credits(&self) -> api::CreditsService {
        api::CreditsService::new(self.clone())
    }

    #[must_use]
    pub fn rag(&self) -> api::RagService {
        api::RagService::new(self.clone())
    }

    #[must_use]
    pub fn sessions(&self) -> api::SessionsService {
        api::SessionsService::new(self.clone())
    }

    #[must_use]
    pub fn stt(&self) -> api::SttService {
        api::SttService::new(self.clone())
    }

    #[must_use]
    pub fn tts(&self) -> api::TtsService {
        api::TtsService::new(self.clone())
    }

    #[must_use]
    pub fn api_keys(&self) -> api::ApiKeysService {
        api::ApiKeysService::new(self.clone())
    }

    #[must_use]
    pub fn usage(&self) -> api::UsageService {
        api::UsageService::new(self.clone())
    }

    #[must_use]
    pub fn analytics(&self) -> api::AnalyticsService {
        api::AnalyticsService::new(self.clone())
    }

    #[must_use]
    pub fn admin(&self) -> api::AdminService {
        api::AdminService::new(self.clone())
    }

    #[must_use]
    pub fn health(&self) -> api::HealthService {
        api::HealthService::new(self.clone())
    }

    /* ───────────── credential management ───────────── */

    /// Replace the bearer token; subsequent requests use it immediately.
    /// No validation of the token format is performed.
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.inner.tokens.set_access(token);
    }

    /// Replace the refresh token.
    pub fn set_refresh_token(&self, token: impl Into<String>) {
        self.inner.tokens.set_refresh(token);
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.inner.tokens.access_token()
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.inner.tokens.refresh_token()
    }

    /// Drop both credentials. Requests sent afterwards carry no
    /// `Authorization` header until a token is set again.
    pub fn clear_tokens(&self) {
        self.inner.tokens.clear();
    }

    /// Change the target origin for all subsequent requests; in-flight
    /// requests are unaffected.
    pub fn set_base_url(&self, url: impl AsRef<str>) -> Result<(), Error> {
        let base = normalize_base_url(url.as_ref())?;
        *self.inner.base.write().unwrap_or_else(|e| e.into_inner()) = base;
        Ok(())
    }

    #[must_use]
    pub fn base_url(&self) -> Url {
        self.base()
    }

    fn base(&self) -> Url {
        self.inner
            .base
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /* ───────────── generic request surface ───────────── */

    /// Execute an arbitrary [`Request`] and decode the JSON response body.
    pub async fn request<T: DeserializeOwned + Send + 'static>(
        &self,
        req: Request,
    ) -> Result<T, Error> {
        self.send_json(req).await
    }

    pub async fn get<T, I, S>(&self, segments: I) -> Result<T, Error>
    where
        T: DeserializeOwned + Send + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.send_json(Request::get(segments)).await
    }

    pub async fn post<T, B, I, S>(&self, segments: I, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned + Send + 'static,
        B: Serialize + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.send_json(Request::post(segments).json(body)?).await
    }

    pub async fn put<T, B, I, S>(&self, segments: I, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned + Send + 'static,
        B: Serialize + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.send_json(Request::put(segments).json(body)?).await
    }

    pub async fn delete<I, S>(&self, segments: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.send_unit(Request::delete(segments)).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned + Send + 'static>(
        &self,
        req: Request,
    ) -> Result<T, Error> {
        let url = endpoint_url(&self.base(), req.segments.iter().map(|s| s.as_str()))?;
        let resp = self.execute_request(&req).await?;
        resp.json().map_err(|source| Error::Decode {
            status: resp.status,
            method: req.method,
            path: url.path().to_string().into_boxed_str(),
            request_id: diagnostics::request_id(&resp.headers),
            body_snippet: diagnostics::body_snippet(
                &resp.body,
                self.inner.body_snippet,
                &self.inner.tokens.secrets(),
            ),
            source: Box::new(source),
        })
    }

    pub(crate) async fn send_bytes(&self, req: Request) -> Result<Vec<u8>, Error> {
        let resp = self.execute_request(&req).await?;
        Ok(resp.body)
    }

    pub(crate) async fn send_unit(&self, req: Request) -> Result<(), Error> {
        let _ = self.execute_request(&req).await?;
        Ok(())
    }

    /* ───────────── execution protocol ───────────── */

    /// One HTTP call: attach the current bearer token, send, and on a 401
    /// run the refresh protocol before resubmitting exactly once. Any
    /// non-2xx outcome maps to a typed [`Error`].
    pub(crate) async fn execute_request(&self, req: &Request) -> Result<Response, Error> {
        #[cfg(feature = "metrics")]
        let _inflight = crate::transport::metrics::InFlightGuard::new();

        if req.body.is_some() && !req.form.is_empty() {
            return Err(Error::InvalidConfig {
                message: "request.body and request.form are mutually exclusive".into(),
                source: None,
            });
        }

        let url = endpoint_url(&self.base(), req.segments.iter().map(|s| s.as_str()))?;

        #[cfg(any(feature = "tracing", feature = "metrics"))]
        let start = std::time::Instant::now();
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "voiceagent.request",
            http.method = %req.method,
            http.host = %url.host_str().unwrap_or_default(),
            http.path = %url.path(),
            http.status = field::Empty,
            request_id = field::Empty,
            refreshed = field::Empty,
            latency_ms = field::Empty,
            error_kind = field::Empty,
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        // At most one refresh attempt per original call.
        let mut refreshed = false;
        let outcome = loop {
            let resp = match self.send_once(req, &url).await {
                Ok(resp) => resp,
                Err(err) => break Err(err),
            };

            if resp.status == StatusCode::UNAUTHORIZED
                && !refreshed
                && self.inner.tokens.refresh_token().is_some()
            {
                refreshed = true;
                match self.refresh_access_token().await {
                    // Resubmit once with the rotated token; headers are
                    // rebuilt so the new value is picked up.
                    Ok(()) => continue,
                    Err(err) => {
                        self.inner.tokens.clear();
                        break Err(Error::auth(format!("token refresh failed: {err}")));
                    }
                }
            }

            // Anything outside 2xx is a failure, 1xx/3xx included.
            if !resp.status.is_success() {
                break Err(self.classify_response(&req.method, &url, &resp));
            }

            break Ok(resp);
        };

        #[cfg(feature = "tracing")]
        {
            span.record("refreshed", refreshed);
            span.record("latency_ms", start.elapsed().as_millis() as i64);
            match &outcome {
                Ok(resp) => {
                    span.record("http.status", resp.status.as_u16() as i64);
                    if let Some(rid) = diagnostics::request_id(&resp.headers) {
                        span.record("request_id", field::display(&rid));
                    }
                }
                Err(err) => {
                    if let Some(status) = err.status() {
                        span.record("http.status", status.as_u16() as i64);
                    }
                    span.record("error_kind", field::debug(err.kind()));
                }
            }
        }

        #[cfg(feature = "metrics")]
        {
            let (status, error_kind) = match &outcome {
                Ok(resp) => (Some(resp.status), None),
                Err(err) => (err.status(), Some(err.kind())),
            };
            crate::transport::metrics::record_outcome(
                &req.method,
                status,
                start.elapsed(),
                refreshed,
                error_kind,
            );
        }

        let resp = outcome?;
        Ok(Response {
            status: resp.status,
            headers: resp.headers,
            body: resp.body,
        })
    }

    /// Build headers and hand one attempt to the transport. Reads the
    /// credential pair at this moment, so a refresh completed in between
    /// attempts (or by a concurrent request) is reflected here.
    async fn send_once(&self, req: &Request, url: &Url) -> Result<TransportResponse, Error> {
        let mut headers = self.inner.default_headers.clone();
        if !req.headers.contains_key(AUTHORIZATION) {
            if let Some((name, value)) = self.inner.tokens.bearer_header()? {
                headers.insert(name, value);
            }
        }
        // Caller overrides win, including an explicit Authorization header.
        headers.extend(req.headers.clone());

        let timeout = req.timeout_override.unwrap_or(self.inner.timeout);
        self.inner
            .transport
            .send(TransportRequest {
                method: req.method.clone(),
                url: url.clone(),
                headers,
                query: req.query.clone(),
                form: req.form.clone(),
                body: req.body.clone().map(|body| body.0),
                timeout,
            })
            .await
    }

    /// `POST auth/refresh` with the current refresh token. On success both
    /// tokens are replaced (rotation discards the old refresh token even if
    /// the returned value is unchanged).
    ///
    /// Concurrent 401s are not serialized: each may trigger its own refresh
    /// call, and the last rotation wins. The platform tolerates this by
    /// invalidating only the presented token.
    async fn refresh_access_token(&self) -> Result<(), Error> {
        let refresh = self
            .inner
            .tokens
            .refresh_token()
            .ok_or_else(|| Error::auth("no refresh token available"))?;

        let url = endpoint_url(&self.base(), REFRESH_SEGMENTS)?;
        let bytes = serde_json::to_vec(&serde_json::json!({ "refresh_token": refresh })).map_err(
            |err| Error::InvalidConfig {
                message: "refresh request failed to serialize".into(),
                source: Some(Box::new(err)),
            },
        )?;

        let resp = self
            .inner
            .transport
            .send(TransportRequest {
                method: Method::POST,
                url: url.clone(),
                headers: self.inner.default_headers.clone(),
                query: Vec::new(),
                form: Vec::new(),
                body: Some(crate::transport::TransportBody::Bytes {
                    bytes,
                    content_type: Some(HeaderValue::from_static("application/json")),
                }),
                timeout: self.inner.timeout,
            })
            .await?;

        if !resp.status.is_success() {
            return Err(self.classify_response(&Method::POST, &url, &resp));
        }

        let rotated: RotatedTokens =
            serde_json::from_slice(&resp.body).map_err(|source| Error::Decode {
                status: resp.status,
                method: Method::POST,
                path: url.path().to_string().into_boxed_str(),
                request_id: diagnostics::request_id(&resp.headers),
                body_snippet: diagnostics::body_snippet(
                    &resp.body,
                    self.inner.body_snippet,
                    &self.inner.tokens.secrets(),
                ),
                source: Box::new(source),
            })?;

        self.inner.tokens.store(rotated.access_token, rotated.refresh_token);
        Ok(())
    }

    /// Status code → error kind mapping. 401 → authentication, 422 →
    /// validation with the server detail verbatim, anything else → service
    /// error with best-effort code/message extraction.
    fn classify_response(&self, method: &Method, url: &Url, resp: &TransportResponse) -> Error {
        let secrets = self.inner.tokens.secrets();

        match resp.status {
            StatusCode::UNAUTHORIZED => {
                let message = diagnostics::extract_message(&resp.body)
                    .map(|msg| redact_text(msg.into(), &secrets).into_boxed_str())
                    .unwrap_or_else(|| "no further detail from server".into());
                Error::Auth { message }
            }
            StatusCode::UNPROCESSABLE_ENTITY => Error::Validation {
                detail: diagnostics::extract_detail(&resp.body),
            },
            status => {
                let message = diagnostics::extract_message(&resp.body)
                    .map(|msg| redact_text(msg.into(), &secrets).into_boxed_str())
                    .unwrap_or_else(|| {
                        format!("Request failed with status {}", status.as_u16()).into_boxed_str()
                    });
                Error::Api(ApiError {
                    status,
                    method: method.clone(),
                    url: Box::new(sanitize_url_for_error(url)),
                    code: diagnostics::extract_code(&resp.body).unwrap_or_else(|| "UNKNOWN".into()),
                    message,
                    request_id: diagnostics::request_id(&resp.headers),
                    body_snippet: diagnostics::body_snippet(
                        &resp.body,
                        self.inner.body_snippet,
                        &secrets,
                    ),
                })
            }
        }
    }

    /// Used by the auth service after a successful login/refresh response.
    pub(crate) fn store_tokens(&self, access: impl Into<String>, refresh: Option<String>) {
        match refresh {
            Some(refresh) => self.inner.tokens.store(access, refresh),
            None => self.inner.tokens.set_access(access),
        }
    }
}
