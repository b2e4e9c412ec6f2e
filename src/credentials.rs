use crate::Error;
use http::{HeaderValue, header::AUTHORIZATION};
use std::{
    fmt,
    sync::{Arc, RwLock},
};

/// Wrapper that keeps token material out of `Debug`/`Display` output.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

#[derive(Debug, Default)]
struct TokenPair {
    access: Option<SecretString>,
    refresh: Option<SecretString>,
}

/// The client's credential pair. Either token may be absent; requests issued
/// without an access token simply carry no `Authorization` header.
///
/// Shared between the client and concurrently in-flight requests; each
/// request reads the pair at the moment it attaches its header, so a refresh
/// completed by one call is picked up by the next. The lock is never held
/// across an await.
#[derive(Clone, Default)]
pub(crate) struct TokenStore {
    inner: Arc<RwLock<TokenPair>>,
}

impl TokenStore {
    pub(crate) fn new(access: Option<String>, refresh: Option<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(TokenPair {
                access: access.map(SecretString::new),
                refresh: refresh.map(SecretString::new),
            })),
        }
    }

    pub(crate) fn access_token(&self) -> Option<String> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.access.as_ref().map(|t| t.expose().to_owned())
    }

    pub(crate) fn refresh_token(&self) -> Option<String> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.refresh.as_ref().map(|t| t.expose().to_owned())
    }

    pub(crate) fn set_access(&self, token: impl Into<String>) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard.access = Some(SecretString::new(token));
    }

    pub(crate) fn set_refresh(&self, token: impl Into<String>) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard.refresh = Some(SecretString::new(token));
    }

    /// Store a rotated pair atomically. The old refresh token is discarded
    /// even when rotation returned an unchanged value.
    pub(crate) fn store(&self, access: impl Into<String>, refresh: impl Into<String>) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard.access = Some(SecretString::new(access));
        guard.refresh = Some(SecretString::new(refresh));
    }

    pub(crate) fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard.access = None;
        guard.refresh = None;
    }

    /// `Authorization: Bearer <access>` for the currently stored token, or
    /// `None` in the unauthenticated state.
    pub(crate) fn bearer_header(&self) -> Result<Option<(http::HeaderName, HeaderValue)>, Error> {
        let Some(token) = self.access_token() else {
            return Ok(None);
        };
        let value =
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(|err| Error::InvalidConfig {
                message: "access token is not a valid header value".into(),
                source: Some(Box::new(err)),
            })?;
        Ok(Some((AUTHORIZATION, value)))
    }

    /// Current token values, for redacting surfaced error text.
    pub(crate) fn secrets(&self) -> Vec<String> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        [&guard.access, &guard.refresh]
            .into_iter()
            .flatten()
            .map(|t| t.expose().to_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_rotates_both_tokens() {
        let store = TokenStore::new(Some("A1".into()), Some("R1".into()));
        store.store("A2", "R2");
        assert_eq!(store.access_token().as_deref(), Some("A2"));
        assert_eq!(store.refresh_token().as_deref(), Some("R2"));
    }

    #[test]
    fn clear_leaves_no_bearer_header() {
        let store = TokenStore::new(Some("A1".into()), Some("R1".into()));
        store.clear();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
        assert!(store.bearer_header().unwrap().is_none());
    }

    #[test]
    fn setting_same_token_twice_is_idempotent() {
        let store = TokenStore::default();
        store.set_access("T");
        store.set_access("T");
        assert_eq!(store.access_token().as_deref(), Some("T"));
        let (_, value) = store.bearer_header().unwrap().unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer T");
    }

    #[test]
    fn secret_string_redacts_debug_output() {
        let secret = SecretString::new("token-value");
        assert_eq!(format!("{secret:?}"), "<redacted>");
        assert_eq!(secret.expose(), "token-value");
    }
}
