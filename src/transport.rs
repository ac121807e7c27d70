use std::io::Read;

use reqwest::{StatusCode, header::HeaderMap};

use crate::{Request, TransportError};

/// A response as delivered by a [Transport].
///
/// The body is read to its end and dropped by the client before a call returns.
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Box<dyn Read + Send>,
}

/// Something that can execute a [Request] exactly once.
///
/// Implemented for [reqwest::blocking::Client], which is what a [Client](crate::Client)
/// uses unless another transport is given.
pub trait Transport: Send + Sync {
    fn execute(&self, request: Request) -> Result<Response, TransportError>;
}

impl Transport for reqwest::blocking::Client {
    fn execute(&self, request: Request) -> Result<Response, TransportError> {
        let (method, url, version, headers, body) = request.into_parts();

        let mut builder = self.request(method, url).version(version).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let resp = builder.send()?;
        Ok(Response {
            status: resp.status(),
            headers: resp.headers().clone(),
            body: Box::new(resp),
        })
    }
}
