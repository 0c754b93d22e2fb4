use std::{num::NonZeroU32, sync::Arc, time::Duration};

use bytes::Bytes;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use reqwest::{
    Method, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER},
};
use riftlink_shared::ApiError;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{error, warn};

use crate::types::{RiotApiError, RiotApiResponse};

use super::{
    metrics::RequestMetrics,
    transport::{HttpRequest, HttpResponse, HttpTransport},
};

/// Delay before the single retry of a 503 response.
pub const SERVICE_UNAVAILABLE_DELAY: Duration = Duration::from_secs(1);

const RIOT_TOKEN_HEADER: &str = "x-riot-token";

/// Request executor shared by every endpoint client.
///
/// It attaches the headers, waits on the optional client-side rate limiter, sends through the
/// injected transport and applies the retry policy:
///
/// - `503`: wait [`SERVICE_UNAVAILABLE_DELAY`] and retry once; the second response is final.
/// - `429`: wait for the `Retry-After` seconds and start over, with no attempt cap.
///
/// Any other non-2xx status is mapped through [`ApiError::from_status`].
#[derive(Debug)]
pub struct ApiClientBase {
    transport: Arc<dyn HttpTransport>,
    limiter: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    /// Riot API Key, only set for the primary API.
    key: Option<HeaderValue>,
    pub metrics: Arc<RequestMetrics>,
}

impl ApiClientBase {
    /// Executor for the primary API, sending the key on every request.
    pub fn with_api_key(
        transport: Arc<dyn HttpTransport>,
        api_key: &str,
        name: &'static str,
    ) -> RiotApiResponse<Self> {
        let mut key = HeaderValue::from_str(api_key).map_err(|e| {
            error!("[{}] API key is not a valid header value", name);
            RiotApiError::Transport(e.into())
        })?;
        key.set_sensitive(true);

        Ok(Self {
            key: Some(key),
            ..Self::unauthenticated(transport, name)
        })
    }

    /// Executor for hosts which do not take the API key (CDN, static documents).
    pub fn unauthenticated(transport: Arc<dyn HttpTransport>, name: &'static str) -> Self {
        Self {
            transport,
            limiter: None,
            key: None,
            metrics: RequestMetrics::new(name),
        }
    }

    /// Throttle outgoing requests on the client side before the server has to.
    pub fn with_rate_limit(mut self, per_second: NonZeroU32) -> Self {
        let q = Quota::per_second(per_second);
        self.limiter = Some(RateLimiter::direct(q));
        self
    }

    pub async fn get<T: DeserializeOwned>(&self, url: String) -> RiotApiResponse<T> {
        self.request(Method::GET, url, None).await
    }

    pub async fn post<B, T>(&self, url: String, body: &B) -> RiotApiResponse<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(body).map_err(|e| {
            error!("[{}] failed to encode body for {}: {}", self.metrics.name(), url, e);
            RiotApiError::Serde(e)
        })?;
        self.request(Method::POST, url, Some(body.into())).await
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: Option<Bytes>,
    ) -> RiotApiResponse<T> {
        let raw = self.request_raw(method, url.clone(), body).await?;
        serde_json::from_slice(&raw).map_err(|e| {
            error!("[{}] failed to decode {}: {}", self.metrics.name(), url, e);
            RiotApiError::Serde(e)
        })
    }

    /// Execute a request with the retry policy, returning the raw body of a 2xx response.
    pub async fn request_raw(
        &self,
        method: Method,
        url: String,
        body: Option<Bytes>,
    ) -> RiotApiResponse<Bytes> {
        tracing::trace!("[{}] {} {}", self.metrics.name(), method, url);
        let request = self.build_request(method, url, body);

        loop {
            let res = self.send(&request).await?;

            let res = match res.status {
                StatusCode::SERVICE_UNAVAILABLE => {
                    warn!(
                        "[{}] {} is unavailable, retrying once in {:?}",
                        self.metrics.name(),
                        request.url,
                        SERVICE_UNAVAILABLE_DELAY
                    );
                    self.metrics.inc_retry();
                    tokio::time::sleep(SERVICE_UNAVAILABLE_DELAY).await;
                    self.send(&request).await?
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    let delay = retry_after(&res).inspect_err(|e| {
                        error!("[{}] {}: {}", self.metrics.name(), request.url, e);
                    })?;
                    warn!(
                        "[{}] rate limited on {}, retrying in {:?}",
                        self.metrics.name(),
                        request.url,
                        delay
                    );
                    self.metrics.inc_retry();
                    tokio::time::sleep(delay).await;
                    continue;
                }
                _ => res,
            };

            return self.classify(&request, res);
        }
    }

    fn build_request(&self, method: Method, url: String, body: Option<Bytes>) -> HttpRequest {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(key) = &self.key {
            headers.insert(RIOT_TOKEN_HEADER, key.clone());
        }

        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }

    async fn send(&self, request: &HttpRequest) -> RiotApiResponse<HttpResponse> {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
        self.metrics.inc();

        self.transport.execute(request.clone()).await.map_err(|e| {
            error!("[{}] {} failed: {}", self.metrics.name(), request.url, e);
            RiotApiError::Transport(e)
        })
    }

    fn classify(&self, request: &HttpRequest, res: HttpResponse) -> RiotApiResponse<Bytes> {
        if res.status.is_success() {
            return Ok(res.body);
        }

        let err = ApiError::from_status(res.status.as_u16());
        error!("[{}] {} responded {}", self.metrics.name(), request.url, err);
        Err(RiotApiError::Status(err))
    }
}

/// Backoff requested by a 429 response, in whole seconds.
fn retry_after(res: &HttpResponse) -> RiotApiResponse<Duration> {
    let raw = res.header(RETRY_AFTER.as_str());
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .ok_or_else(|| RiotApiError::InvalidRetryAfter(raw.map(str::to_string)))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use nonzero_ext::nonzero;
    use serde::Deserialize;
    use serde_json::json;
    use tokio::time::Instant;

    use super::*;
    use crate::api::mock::MockTransport;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Shard {
        name: String,
    }

    fn client(transport: Arc<MockTransport>) -> ApiClientBase {
        ApiClientBase::with_api_key(transport, "RGAPI-TEST", "test").unwrap()
    }

    #[tokio::test]
    async fn unencodable_body_fails_before_sending() {
        let transport = MockTransport::new();
        let api = client(transport.clone());
        let body: std::collections::HashMap<(i32, i32), i32> = [((1, 2), 3)].into();

        let res: RiotApiResponse<i64> = api
            .post("https://americas.api.riotgames.com/x".into(), &body)
            .await;

        assert!(matches!(res, Err(RiotApiError::Serde(_))));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn success_is_decoded_and_headers_are_attached() {
        let transport = MockTransport::new();
        transport.push_json(json!({ "name": "North America" }));
        let api = client(transport.clone());

        let shard: Shard = api.get("https://na1.api.riotgames.com/x".into()).await.unwrap();

        assert_eq!(shard.name, "North America");
        let req = &transport.requests()[0];
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.headers[RIOT_TOKEN_HEADER], "RGAPI-TEST");
        assert_eq!(req.headers[ACCEPT], "application/json");
        assert!(req.headers.get(CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn unauthenticated_client_omits_the_key() {
        let transport = MockTransport::new();
        transport.push_json(json!({ "name": "cdn" }));
        let api = ApiClientBase::unauthenticated(transport.clone(), "cdn");

        let _: Shard = api.get("https://ddragon.example/x".into()).await.unwrap();

        assert!(transport.requests()[0].headers.get(RIOT_TOKEN_HEADER).is_none());
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let transport = MockTransport::new();
        transport.push(200, "7");
        let api = client(transport.clone());

        let id: i64 = api
            .post("https://x/providers".into(), &json!({ "region": "NA" }))
            .await
            .unwrap();

        assert_eq!(id, 7);
        let req = &transport.requests()[0];
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.headers[CONTENT_TYPE], "application/json");
        assert_eq!(req.body.as_deref(), Some(&b"{\"region\":\"NA\"}"[..]));
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limited_request_waits_then_succeeds() {
        let transport = MockTransport::new();
        transport
            .push_with_header(429, "retry-after", "1", "")
            .push_json(json!({ "name": "ok" }));
        let api = client(transport.clone());

        let start = Instant::now();
        let shard: Shard = api.get("https://x/status".into()).await.unwrap();

        assert_eq!(shard.name, "ok");
        assert!(start.elapsed() >= Duration::from_secs(1));
        assert_eq!(transport.request_count(), 2);
        assert_eq!(api.metrics.retries(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limit_retries_are_not_capped() {
        let transport = MockTransport::new();
        for _ in 0..5 {
            transport.push_with_header(429, "retry-after", "2", "");
        }
        transport.push_json(json!({ "name": "finally" }));
        let api = client(transport.clone());

        let start = Instant::now();
        let shard: Shard = api.get("https://x/status".into()).await.unwrap();

        assert_eq!(shard.name, "finally");
        assert!(start.elapsed() >= Duration::from_secs(10));
        assert_eq!(transport.request_count(), 6);
    }

    #[tokio::test]
    async fn missing_retry_after_is_fatal() {
        let transport = MockTransport::new();
        transport.push(429, "");
        let api = client(transport.clone());

        let res: RiotApiResponse<Shard> = api.get("https://x/status".into()).await;

        assert!(matches!(res, Err(RiotApiError::InvalidRetryAfter(None))));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn unparseable_retry_after_is_fatal() {
        let transport = MockTransport::new();
        transport.push_with_header(429, "retry-after", "soon", "");
        let api = client(transport.clone());

        let res: RiotApiResponse<Shard> = api.get("https://x/status".into()).await;

        assert!(
            matches!(res, Err(RiotApiError::InvalidRetryAfter(Some(ref v))) if v == "soon")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn service_unavailable_is_retried_exactly_once() {
        let transport = MockTransport::new();
        transport.push(503, "").push(503, "");
        let api = client(transport.clone());

        let start = Instant::now();
        let res: RiotApiResponse<Shard> = api.get("https://x/status".into()).await;

        assert_eq!(
            res.unwrap_err().api_error(),
            Some(&ApiError::SERVICE_UNAVAILABLE)
        );
        assert_eq!(transport.request_count(), 2);
        assert!(start.elapsed() >= SERVICE_UNAVAILABLE_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn service_unavailable_then_success() {
        let transport = MockTransport::new();
        transport.push(503, "").push_json(json!({ "name": "back" }));
        let api = client(transport.clone());

        let shard: Shard = api.get("https://x/status".into()).await.unwrap();

        assert_eq!(shard.name, "back");
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limit_after_unavailable_retry_is_final() {
        let transport = MockTransport::new();
        transport
            .push(503, "")
            .push_with_header(429, "retry-after", "1", "");
        let api = client(transport.clone());

        let res: RiotApiResponse<Shard> = api.get("https://x/status".into()).await;

        assert_eq!(
            res.unwrap_err().api_error(),
            Some(&ApiError::RATE_LIMIT_EXCEEDED)
        );
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn other_statuses_are_classified() {
        let transport = MockTransport::new();
        transport.push(404, "").push(418, "");
        let api = client(transport.clone());

        let res: RiotApiResponse<Shard> = api.get("https://x/a".into()).await;
        assert!(res.unwrap_err().is_not_found());

        let res: RiotApiResponse<Shard> = api.get("https://x/b".into()).await;
        assert_eq!(
            res.unwrap_err().api_error(),
            Some(&ApiError::new("unknown error reason", 418))
        );
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let transport = MockTransport::new();
        transport.push(200, "{ not json");
        let api = client(transport);

        let res: RiotApiResponse<Shard> = api.get("https://x/a".into()).await;

        assert!(matches!(res, Err(RiotApiError::Serde(_))));
    }

    #[tokio::test]
    async fn transport_failure_is_propagated() {
        let transport = MockTransport::new();
        transport.push_failure("connection refused");
        let api = client(transport);

        let res: RiotApiResponse<Shard> = api.get("https://x/a".into()).await;

        assert!(matches!(res, Err(RiotApiError::Transport(e)) if e.to_string() == "connection refused"));
    }

    #[test]
    fn invalid_api_key_is_rejected() {
        let res = ApiClientBase::with_api_key(MockTransport::new(), "bad\nkey", "test");
        assert!(matches!(res, Err(RiotApiError::Transport(_))));
    }

    #[tokio::test]
    async fn rate_limiter_lets_requests_through() {
        let transport = MockTransport::new();
        transport.push_json(json!({ "name": "a" }));
        let api = client(transport.clone()).with_rate_limit(nonzero!(20_u32));

        let _: Shard = api.get("https://x/a".into()).await.unwrap();

        assert_eq!(api.metrics.attempts(), 1);
    }
}
