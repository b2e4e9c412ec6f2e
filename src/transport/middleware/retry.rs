//! Conservative retry wrapper for transient failures.

use crate::{
    Error, TransportErrorKind,
    transport::{
        ResponseMeta, TransportRequest, TransportResponse,
        async_transport::{AsyncTransport, DynAsyncTransport},
    },
};
use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time::sleep;

/// Retry policy for transient 429/5xx responses and connect/timeout errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of replays after the initial attempt.
    pub max_retries: usize,
    /// Base delay used for exponential backoff (`base * 2^n`).
    pub base_delay: Duration,
    /// Maximum delay cap for exponential backoff.
    pub max_delay: Duration,
    /// Add jitter to backoff delays to avoid retry storms.
    pub jitter: bool,
    /// Replay non-idempotent methods (e.g. `POST`). Defaults to `false`.
    pub retry_non_idempotent: bool,
    /// Prefer the server-provided `Retry-After` header when present.
    pub respect_retry_after: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            jitter: true,
            retry_non_idempotent: false,
            respect_retry_after: true,
        }
    }
}

impl RetryConfig {
    #[must_use]
    pub fn new(max_retries: usize, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            ..Self::default()
        }
    }
}

fn is_idempotent(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::PUT | Method::DELETE | Method::OPTIONS
    )
}

fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

fn backoff_delay(config: &RetryConfig, attempt: usize) -> Duration {
    if attempt == 0 {
        return Duration::ZERO;
    }

    let exp = 2u32.saturating_pow((attempt - 1).min(31) as u32);
    config.base_delay.saturating_mul(exp).min(config.max_delay)
}

fn parse_retry_after(headers: &HeaderMap, now: SystemTime) -> Option<Duration> {
    let text = headers
        .get(http::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(secs) = text.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }

    let at = httpdate::parse_http_date(text).ok()?;
    Some(at.duration_since(now).unwrap_or(Duration::ZERO))
}

// Full jitter: pseudo-random delay in [0, cap], seeded off the clock.
fn jitter_delay(cap: Duration) -> Duration {
    let max_ms = cap.as_millis().min(u128::from(u64::MAX)) as u64;
    if max_ms == 0 {
        return cap;
    }

    let mut x = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos() as u64;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    Duration::from_millis(x % (max_ms + 1))
}

/// Transport wrapper replaying transient failures per [`RetryConfig`].
#[derive(Clone)]
pub struct Retry {
    inner: DynAsyncTransport,
    config: RetryConfig,
}

impl Retry {
    #[must_use]
    pub fn new(inner: DynAsyncTransport, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    fn should_retry_method(&self, method: &Method) -> bool {
        self.config.retry_non_idempotent || is_idempotent(method)
    }

    fn should_retry_error(&self, err: &Error) -> bool {
        matches!(
            err,
            Error::Network { kind, .. }
                if matches!(kind, TransportErrorKind::Timeout | TransportErrorKind::Connect)
        )
    }

    fn delay_for(&self, attempt: usize) -> Duration {
        let cap = backoff_delay(&self.config, attempt);
        if self.config.jitter { jitter_delay(cap) } else { cap }
    }
}

#[async_trait]
impl AsyncTransport for Retry {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        let can_retry = self.should_retry_method(&req.method);

        let mut retries = 0usize;
        loop {
            match self.inner.send(req.clone()).await {
                Ok(mut resp) => {
                    if can_retry
                        && retries < self.config.max_retries
                        && is_retryable_status(resp.status)
                    {
                        let retry_after = self
                            .config
                            .respect_retry_after
                            .then(|| parse_retry_after(&resp.headers, SystemTime::now()))
                            .flatten();

                        let delay = retry_after.unwrap_or_else(|| self.delay_for(retries + 1));
                        if !delay.is_zero() {
                            sleep(delay).await;
                        }
                        retries += 1;
                        continue;
                    }

                    resp.meta = ResponseMeta {
                        retries: resp.meta.retries.saturating_add(retries),
                    };
                    return Ok(resp);
                }
                Err(err) => {
                    if can_retry
                        && retries < self.config.max_retries
                        && self.should_retry_error(&err)
                    {
                        let delay = self.delay_for(retries + 1);
                        if !delay.is_zero() {
                            sleep(delay).await;
                        }
                        retries += 1;
                        continue;
                    }
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn retry_after_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::RETRY_AFTER, HeaderValue::from_static("7"));
        let delay = parse_retry_after(&headers, UNIX_EPOCH).unwrap();
        assert_eq!(delay, Duration::from_secs(7));
    }

    #[test]
    fn retry_after_http_date() {
        let mut headers = HeaderMap::new();
        let now = UNIX_EPOCH + Duration::from_secs(100);
        let at = UNIX_EPOCH + Duration::from_secs(130);
        let value = httpdate::fmt_http_date(at);
        headers.insert(
            http::header::RETRY_AFTER,
            HeaderValue::from_str(&value).unwrap(),
        );
        let delay = parse_retry_after(&headers, now).unwrap();
        assert_eq!(delay, Duration::from_secs(30));
    }

    #[test]
    fn backoff_caps_at_max_delay() {
        let config = RetryConfig {
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(250),
            ..RetryConfig::default()
        };
        assert_eq!(backoff_delay(&config, 1), Duration::from_millis(100));
        assert_eq!(backoff_delay(&config, 2), Duration::from_millis(200));
        assert_eq!(backoff_delay(&config, 3), Duration::from_millis(250));
    }

    #[test]
    fn post_is_not_idempotent() {
        assert!(is_idempotent(&Method::DELETE));
        assert!(!is_idempotent(&Method::POST));
    }
}
