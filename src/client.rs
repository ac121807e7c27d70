use std::{
    io::{Read, Write},
    time::Duration,
};

use reqwest::{
    Method, StatusCode, Version,
    header::{CONTENT_LENGTH, CONTENT_TYPE, HOST, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};
use url::Url;

use crate::domain::Domains;
use crate::record::Records;
use crate::request::unescape_path;
use crate::{
    ApiError, ClientBuilderError, ClientError, Payload, Request, ResponseMeta, Transport,
    TransportError,
};


const DEFAULT_ENDPOINT: &str = "https://dnsapi.cn/";

/// Status codes treated as success. Anything else is an [ApiError].
const SUCCESS_CODES: [u16; 5] = [200, 201, 202, 204, 304];

/// Where the body of a successful response goes.
pub enum Destination<'a, T> {
    /// The body is copied through without being parsed.
    Raw(&'a mut dyn Write),
    /// The body is decoded as JSON into the target.
    ///
    /// The target is left untouched if the body doesn't decode.
    Json(&'a mut T),
}

impl<'a> Destination<'a, JsonValue> {
    /// A raw destination, for calls that never decode.
    pub fn raw(sink: &'a mut dyn Write) -> Self {
        Destination::Raw(sink)
    }
}

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    token: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Box<dyn Transport>>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            token: None,
            timeout: None,
            transport: None,
        }
    }

    /// Sets the API endpoint to the one given.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Sets the login token, in the `ID,Token` form DNSPod hands out.
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Sets a timeout for each request made by the default transport.
    ///
    /// Has no effect if a transport is given with [ClientBuilder::transport].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses the given transport instead of a [reqwest::blocking::Client].
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, `https://dnsapi.cn/` is used.
    ///
    /// # Errors
    /// - `MissingField` if the token isn't added to the builder.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    /// - `Reqwest` if the default transport can't be created.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        let token = self
            .token
            .ok_or_else(|| ClientBuilderError::MissingField("token".to_string()))?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::blocking::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                Box::new(builder.build()?)
            }
        };

        Ok(Client {
            endpoint,
            token,
            transport,
        })
    }
}

/// API client.
///
/// Resource operations are reached through [Client::records] and [Client::domains].
pub struct Client {
    endpoint: Url,
    token: String,
    transport: Box<dyn Transport>,
}

impl Client {
    /// Creates a new Client using a default [reqwest::blocking::Client].
    pub fn new(endpoint: &Url, token: &str) -> Self {
        Self {
            endpoint: endpoint.clone(),
            token: token.to_string(),
            transport: Box::new(reqwest::blocking::Client::new()),
        }
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Replaces the transport requests are executed with.
    pub fn set_transport(&mut self, transport: impl Transport + 'static) {
        self.transport = Box::new(transport);
    }

    /// DNS record operations.
    pub fn records(&self) -> Records<'_> {
        Records::new(self)
    }

    /// Domain operations.
    pub fn domains(&self) -> Domains<'_> {
        Domains::new(self)
    }

    /// Creates a request for `path`, relative to the endpoint.
    ///
    /// For POST and PUT the options are form encoded into the body together
    /// with the login token and `format=json`, which always override fields of
    /// the same name. Other methods get no body and keep the query as is.
    ///
    /// # Errors
    /// - `Encoding` if `path` has a malformed escape, or the options can't be flattened
    pub fn new_request<O: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        opt: &O,
    ) -> Result<Request, ClientError> {
        let unescaped = unescape_path(path)?;
        let base = self.endpoint.path();

        let mut url = self.endpoint.clone();
        url.set_path(&format!("{base}{path}"));
        let path = format!("{}{unescaped}", unescape_path(base)?);

        let mut headers = HeaderMap::new();
        if let Some(host) = url.host_str() {
            let host = match url.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            };
            headers.insert(HOST, HeaderValue::from_str(&host)?);
        }

        let body = if method == Method::POST || method == Method::PUT {
            let body = Payload::from_options(opt)?
                .add("login_token", self.token.as_str())
                .add("format", "json")
                .encode();

            url.set_query(None);
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            );
            headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len() as u64));
            Some(body)
        } else {
            None
        };

        Ok(Request {
            method,
            url,
            path,
            version: Version::HTTP_11,
            headers,
            body,
        })
    }

    /// Sends the request and delivers the body of a successful response to `destination`.
    ///
    /// The request is sent once. The response body is always read to its end
    /// and released before this returns. A body that fails to decode into a
    /// [Destination::Json] target is not an error.
    ///
    /// # Errors
    /// - `Transport` if the request couldn't be sent or the body couldn't be read
    /// - `Api` if the status code isn't one of 200, 201, 202, 204 or 304
    /// - `Io` if a [Destination::Raw] sink fails to take the body
    pub fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
        destination: Destination<'_, T>,
    ) -> Result<ResponseMeta, ClientError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let template = request.meta(StatusCode::OK, HeaderMap::new());

        let resp = self.transport.execute(request)?;
        let meta = ResponseMeta {
            status: resp.status,
            headers: resp.headers,
            ..template
        };
        debug!(status = %meta.status, "received response");

        let mut body = Vec::new();
        let read = {
            let mut reader = resp.body;
            reader.read_to_end(&mut body)
        };

        if !SUCCESS_CODES.contains(&meta.status.as_u16()) {
            let err = match read {
                Ok(_) => ApiError::from_body(body, meta),
                Err(e) => ApiError::new(body, meta, format!("unable to read response body: {e}")),
            };
            debug!(status = %err.response().status, message = err.message(), "API error");
            return Err(err.into());
        }
        read.map_err(TransportError::from)?;

        match destination {
            Destination::Raw(sink) => sink.write_all(&body)?,
            Destination::Json(_) if body.is_empty() => {}
            Destination::Json(target) => match serde_json::from_slice(&body) {
                Ok(value) => *target = value,
                Err(e) => warn!(error = %e, url = %meta.url, "unable to decode response body"),
            },
        }

        Ok(meta)
    }

    /// POSTs the options to `path` and decodes the response into a `T`.
    pub(crate) fn post<O, T>(&self, path: &str, opt: &O) -> Result<(T, ResponseMeta), ClientError>
    where
        O: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let request = self.new_request(Method::POST, path, opt)?;

        let mut envelope = T::default();
        let meta = self.execute(request, Destination::Json(&mut envelope))?;

        Ok((envelope, meta))
    }
}
