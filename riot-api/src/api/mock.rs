//! Scripted in-memory transport for tests.

use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use reqwest::{
    StatusCode,
    header::{HeaderName, HeaderValue},
};

use super::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::types::BoxError;

#[derive(Debug)]
enum Scripted {
    Response(HttpResponse),
    Failure(String),
}

/// Transport replaying queued responses in order and recording every request it receives.
#[derive(Debug, Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, status: u16, body: impl Into<Bytes>) -> &Self {
        self.push_response(HttpResponse::new(status_code(status), body))
    }

    pub fn push_json(&self, value: serde_json::Value) -> &Self {
        self.push(200, value.to_string())
    }

    pub fn push_with_header(
        &self,
        status: u16,
        name: &'static str,
        value: &'static str,
        body: impl Into<Bytes>,
    ) -> &Self {
        let mut res = HttpResponse::new(status_code(status), body);
        res.headers
            .insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        self.push_response(res)
    }

    pub fn push_failure(&self, message: &str) -> &Self {
        self.script
            .lock()
            .push_back(Scripted::Failure(message.to_string()));
        self
    }

    pub fn push_response(&self, response: HttpResponse) -> &Self {
        self.script.lock().push_back(Scripted::Response(response));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.lock().iter().map(|r| r.url.clone()).collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let url = request.url.clone();
        self.requests.lock().push(request);

        match self.script.lock().pop_front() {
            Some(Scripted::Response(res)) => Ok(res),
            Some(Scripted::Failure(message)) => Err(message.into()),
            None => Err(format!("no scripted response left for {url}").into()),
        }
    }
}
