//! HTTP transport seam used by every client.
//!
//! The executor never builds its own HTTP stack: it is handed an [`HttpTransport`], which in
//! production is [`ReqwestTransport`] and in tests is any in-memory implementation.

use std::fmt::Debug;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Method, StatusCode, header::HeaderMap};

use crate::types::BoxError;

/// Fully built request handed to a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// Raw response returned by a transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Trait implemented by structures capable of performing raw HTTP requests.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

/// [`HttpTransport`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let res = builder.send().await?;
        let status = res.status();
        let headers = res.headers().clone();
        let body = res.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
