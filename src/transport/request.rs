use crate::Error;
use crate::transport::{MultipartPart, MultipartValue, TransportBody};
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct RequestBody(pub(crate) TransportBody);

impl RequestBody {
    /// JSON-encode `value` as the request payload.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
        let bytes = serde_json::to_vec(value).map_err(|err| Error::InvalidConfig {
            message: "request body failed to serialize".into(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self(TransportBody::Bytes {
            bytes,
            content_type: Some(HeaderValue::from_static("application/json")),
        }))
    }

    #[must_use]
    pub fn bytes_with_content_type(bytes: Vec<u8>, content_type: HeaderValue) -> Self {
        Self(TransportBody::Bytes {
            bytes,
            content_type: Some(content_type),
        })
    }

    /// `multipart/form-data` payload; the transport picks the boundary.
    #[must_use]
    pub fn multipart(parts: Vec<MultipartPart>) -> Self {
        Self(TransportBody::Multipart { parts })
    }
}

/// Builder used by uploads to assemble multipart payloads.
#[derive(Clone, Debug, Default)]
pub struct MultipartBuilder {
    parts: Vec<MultipartPart>,
}

impl MultipartBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(MultipartPart {
            name: name.into(),
            value: MultipartValue::Text(value.into()),
        });
        self
    }

    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: Option<&str>,
        data: Vec<u8>,
    ) -> Self {
        self.parts.push(MultipartPart {
            name: name.into(),
            value: MultipartValue::File {
                data,
                filename: filename.into(),
                content_type: content_type.map(str::to_owned),
            },
        });
        self
    }

    #[must_use]
    pub fn build(self) -> RequestBody {
        RequestBody::multipart(self.parts)
    }
}

/// In-memory representation of one pending HTTP call.
#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
    pub timeout_override: Option<Duration>,
}

impl Request {
    #[must_use]
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            form: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            timeout_override: None,
        }
    }

    #[must_use]
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    #[must_use]
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    #[must_use]
    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PUT, segments)
    }

    #[must_use]
    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, segments)
    }

    #[must_use]
    pub fn query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a query pair only when the value is present. Most list
    /// endpoints take optional `skip`/`limit`/filter parameters.
    #[must_use]
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query_pair(key, value.to_string()),
            None => self,
        }
    }

    /// Replace the payload with `application/x-www-form-urlencoded` pairs.
    #[must_use]
    pub fn form_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.body = None;
        self.form
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.form.clear();
        self.body = Some(body);
        self
    }

    /// JSON-encode `value` as the payload; shorthand for `body(RequestBody::json(..)?)`.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, Error> {
        Ok(self.body(RequestBody::json(value)?))
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_override = Some(timeout);
        self
    }
}

#[derive(Clone, Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Response {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_opt_skips_absent_values() {
        let req = Request::get(["voices"])
            .query_opt("language", Some("en-US"))
            .query_opt("premium_only", None::<bool>);
        assert_eq!(req.query, vec![("language".into(), "en-US".into())]);
    }

    #[test]
    fn body_and_form_are_mutually_exclusive() {
        let req = Request::post(["auth", "login"])
            .json(&serde_json::json!({"a": 1}))
            .unwrap()
            .form_pairs([("username", "u")]);
        assert!(req.body.is_none());
        assert_eq!(req.form.len(), 1);
    }
}
