//! Outgoing requests and the metadata kept from their responses.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use reqwest::{Method, StatusCode, Version, header::HeaderMap};
use url::Url;

use crate::EncodingError;

/// A fully-formed request, ready to be handed to a [Transport](crate::Transport).
///
/// Built by [Client::new_request](crate::Client::new_request). The header map
/// is always present so that callers can add to it before the request is sent.
#[derive(Debug, Clone)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) path: String,
    pub(crate) version: Version,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<String>,
}

impl Request {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The URL as sent on the wire, with the path in its escaped form.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The unescaped form of the path.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// The form-encoded body, for methods that carry one.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn content_length(&self) -> Option<u64> {
        self.body.as_ref().map(|b| b.len() as u64)
    }

    /// Splits the request into the parts a transport needs.
    pub fn into_parts(self) -> (Method, Url, Version, HeaderMap, Option<String>) {
        (self.method, self.url, self.version, self.headers, self.body)
    }

    pub(crate) fn meta(&self, status: StatusCode, headers: HeaderMap) -> ResponseMeta {
        ResponseMeta {
            method: self.method.clone(),
            url: self.url.clone(),
            path: self.path.clone(),
            status,
            headers,
        }
    }
}

/// What is kept of a response once its body has been consumed.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub method: Method,
    pub url: Url,
    /// Unescaped path of the request that produced the response.
    pub path: String,
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl ResponseMeta {
    /// The request URL with its unescaped path and without a query.
    pub fn display_url(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        match self.url.port() {
            Some(port) => format!("{}://{host}:{port}{}", self.url.scheme(), self.path),
            None => format!("{}://{host}{}", self.url.scheme(), self.path),
        }
    }
}

/// Decodes the percent-encoding in `path`.
///
/// # Errors
/// - `InvalidEscape` if a `%` isn't followed by two hex digits
/// - `InvalidUtf8` if the decoded bytes aren't UTF-8
pub(crate) fn unescape_path(path: &str) -> Result<String, EncodingError> {
    let bytes = path.as_bytes();
    let mut start = 0;
    while let Some(offset) = bytes[start..].iter().position(|&b| b == b'%') {
        let at = start + offset;
        let valid = bytes
            .get(at + 1..at + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            let end = (at + 3).min(bytes.len());
            return Err(EncodingError::InvalidEscape(
                String::from_utf8_lossy(&bytes[at..end]).into_owned(),
            ));
        }
        start = at + 3;
    }

    percent_decode_str(path)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| EncodingError::InvalidUtf8(path.to_string()))
}
