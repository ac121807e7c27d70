use reqwest::header::InvalidHeaderValue;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::ResponseMeta;


/// Errors raised while turning a path and an options value into a request.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("invalid escape {0:?} in path")]
    InvalidEscape(String),
    #[error("path {0:?} does not unescape to valid UTF-8")]
    InvalidUtf8(String),
    #[error("options must serialize to a map of fields")]
    NotAMap,
    #[error("field {0:?} can't be form encoded")]
    UnsupportedValue(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A response from the DNSPod API with a status code outside of the success set.
#[derive(Error, Debug)]
#[error(
    "{} {}: {} {}",
    .response.method,
    .response.display_url(),
    .response.status.as_u16(),
    .message
)]
pub struct ApiError {
    body: Vec<u8>,
    response: ResponseMeta,
    message: String,
}

impl ApiError {
    pub(crate) fn new(body: Vec<u8>, response: ResponseMeta, message: String) -> Self {
        Self {
            body,
            response,
            message,
        }
    }

    /// Creates the error from a rejected response body, deriving the message from it.
    pub(crate) fn from_body(body: Vec<u8>, response: ResponseMeta) -> Self {
        let message = serde_json::from_slice::<JsonValue>(&body).map_or_else(
            |_| "failed to parse unknown error format".to_string(),
            |raw| render_error(&raw),
        );

        Self::new(body, response, message)
    }

    /// The raw body of the rejected response.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Metadata of the rejected response.
    pub fn response(&self) -> &ResponseMeta {
        &self.response
    }

    /// The message extracted from the response body.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Renders an error body of unknown shape into a single line.
///
/// Strings render as themselves, arrays as `[a, b]` and objects as
/// `{key: value}` entries, sorted and joined with `, `.
pub fn render_error(raw: &JsonValue) -> String {
    match raw {
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => {
            let errs: Vec<String> = items.iter().map(render_error).collect();
            format!("[{}]", errs.join(", "))
        }
        JsonValue::Object(map) => {
            let mut errs: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{{{k}: {}}}", render_error(v)))
                .collect();
            errs.sort();
            errs.join(", ")
        }
        JsonValue::Null => unexpected_type("null"),
        JsonValue::Bool(_) => unexpected_type("bool"),
        JsonValue::Number(_) => unexpected_type("number"),
    }
}

fn unexpected_type(name: &str) -> String {
    format!("failed to parse unexpected error type: {name}")
}

/// Failure of the transport to deliver a request or its response.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("unable to write response body: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Returns the API error, if the request was rejected by DNSPod.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}
