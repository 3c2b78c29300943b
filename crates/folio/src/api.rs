use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::log::{debug, error};

/// Sub-path every backend route lives under.
pub const API_PREFIX: &str = "/api";

/// Requests still pending after this long fail with [`ApiError::Timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Longest non-JSON error body that is shown as-is.
pub const MAX_TEXT_MESSAGE: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every way a backend call can fail.
///
/// The `Display` output of each variant is the human-readable message shown
/// to visitors, so it is never empty for errors produced by [`HttpApiClient`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response (DNS, CORS, connection refused...).
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("Serialize error: {0}")]
    Serialize(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// The HTTP status code, for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Maps a non-2xx response onto [`ApiError::Http`].
///
/// The message is taken from the first usable source:
/// 1. a JSON `detail` string (FastAPI's `HTTPException`)
/// 2. a JSON `detail` list of validation errors, their `msg` fields joined
/// 3. a JSON `message` string
/// 4. a plain-text body, if it is not markup and at most [`MAX_TEXT_MESSAGE`] chars
/// 5. the response status text
/// 6. a generic "Request failed with status code N"
pub fn error_from_response(status: u16, status_text: &str, body: &str) -> ApiError {
    let message = message_from_body(body)
        .or_else(|| non_empty(status_text))
        .unwrap_or_else(|| format!("Request failed with status code {status}"));

    ApiError::Http { status, message }
}

fn message_from_body(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => message_from_json(&value),
        Err(_) => plain_text(body),
    }
}

fn plain_text(body: &str) -> Option<String> {
    non_empty(body)
        .filter(|text| !text.starts_with('<') && text.chars().count() <= MAX_TEXT_MESSAGE)
}

fn message_from_json(value: &Value) -> Option<String> {
    let detail = match value.get("detail") {
        Some(Value::String(detail)) => non_empty(detail),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            non_empty(&messages.join("; "))
        }
        _ => None,
    };

    detail
        .or_else(|| value.get("message").and_then(Value::as_str).and_then(non_empty))
        .or_else(|| value.as_str().and_then(non_empty))
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Ordered query parameters for a GET request. An empty query adds nothing to
/// the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Unencoded, for diagnostics only. The request itself is encoded by the
/// browser.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// `Content-Type` and `Accept` set to JSON.
    pub fn json() -> Self {
        let mut headers = Self::new();
        headers.insert("Content-Type", "application/json");
        headers.insert("Accept", "application/json");
        headers
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl From<&ApiHeaders> for gloo_net::http::Headers {
    fn from(val: &ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in &val.0 {
            headers.set(key, value);
        }
        headers
    }
}

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub prefix: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            prefix: API_PREFIX.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads the backend origin baked in at compile time through
    /// `FOLIO_BACKEND_URL`. When unset, requests go to the page's own origin.
    /// The value is not validated; a bad URL shows up as failed requests.
    pub fn from_env() -> Self {
        Self::new(option_env!("FOLIO_BACKEND_URL").unwrap_or_default())
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url.trim_end_matches('/'),
            self.prefix,
            endpoint
        )
    }
}

/// Hooks into the request lifecycle of [`HttpApiClient`].
///
/// Observers only see borrowed data, so they cannot change what the caller
/// receives.
pub trait RequestObserver {
    fn on_request(&self, method: HttpMethod, url: &str);
    fn on_response(&self, method: HttpMethod, url: &str, status: u16);
    fn on_error(&self, method: HttpMethod, url: &str, error: &ApiError);
}

/// Logs every request through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, method: HttpMethod, url: &str) {
        debug!("API Request: {method} {url}");
    }

    fn on_response(&self, method: HttpMethod, url: &str, status: u16) {
        debug!("API Response: {status} {method} {url}");
    }

    fn on_error(&self, method: HttpMethod, url: &str, error: &ApiError) {
        error!(status = ?error.status(), "API Error: {method} {url}: {error}");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn on_request(&self, _method: HttpMethod, _url: &str) {}
    fn on_response(&self, _method: HttpMethod, _url: &str, _status: u16) {}
    fn on_error(&self, _method: HttpMethod, _url: &str, _error: &ApiError) {}
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    /// GET `endpoint` (relative to the API prefix) and decode the JSON body.
    async fn get<T>(&self, endpoint: &str, query: &Query) -> ApiResult<T>
    where
        T: DeserializeOwned;

    /// POST `body` as JSON to `endpoint` and decode the JSON reply.
    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized;
}

/// [`ApiClient`] over the browser's `fetch`.
pub struct HttpApiClient {
    config: ApiConfig,
    headers: ApiHeaders,
    observer: Rc<dyn RequestObserver>,
}

impl HttpApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            headers: ApiHeaders::json(),
            observer: Rc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: impl RequestObserver + 'static) -> Self {
        self.observer = Rc::new(observer);
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn execute<T>(&self, method: HttpMethod, url: &str, request: Request) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.observer.on_request(method, url);

        let timeout = self.config.timeout;
        let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            Ok::<_, ApiError>((status, decode_response(response).await))
        };

        let result = match within(timeout, exchange, TimeoutFuture::new(millis)).await {
            Ok((status, decoded)) => {
                self.observer.on_response(method, url, status);
                decoded
            }
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            self.observer.on_error(method, url, err);
        }
        result
    }
}

/// Runs `exchange` (sending and reading the body) until `deadline` fires,
/// whichever comes first.
async fn within<T, E, D>(timeout: Duration, exchange: E, deadline: D) -> ApiResult<T>
where
    E: Future<Output = ApiResult<T>>,
    D: Future<Output = ()>,
{
    match future::select(Box::pin(exchange), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout(timeout)),
    }
}

async fn decode_response<T>(response: Response) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()));
    }

    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(error_from_response(status, &status_text, &body))
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn get<T>(&self, endpoint: &str, query: &Query) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.config.url(endpoint);
        let request = Request::get(&url)
            .headers((&self.headers).into())
            .query(query.iter())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.execute(HttpMethod::Get, &format!("{url}{query}"), request)
            .await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.url(endpoint);
        let request = Request::post(&url)
            .headers((&self.headers).into())
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;

        self.execute(HttpMethod::Post, &url, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string_becomes_message() {
        let err = error_from_response(
            500,
            "Internal Server Error",
            r#"{"detail":"Internal server error"}"#,
        );
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "Internal server error".into()
            }
        );
        assert_eq!(err.to_string(), "Internal server error");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_validation_details_are_joined() {
        let body = r#"{"detail":[
            {"loc":["body","email"],"msg":"field required","type":"value_error.missing"},
            {"loc":["body","name"],"msg":"field required","type":"value_error.missing"}
        ]}"#;
        let err = error_from_response(422, "Unprocessable Entity", body);
        assert_eq!(err.message(), "field required; field required");
    }

    #[test]
    fn test_message_fallbacks() {
        let err = error_from_response(503, "", r#"{"message":"down for maintenance"}"#);
        assert_eq!(err.message(), "down for maintenance");

        let err = error_from_response(502, "Bad Gateway", "upstream unavailable\n");
        assert_eq!(err.message(), "upstream unavailable");

        let err = error_from_response(404, "Not Found", r#"{"unexpected":true}"#);
        assert_eq!(err.message(), "Not Found");

        let err = error_from_response(500, "", "");
        assert_eq!(err.message(), "Request failed with status code 500");
    }

    #[test]
    fn test_markup_and_oversized_bodies_are_not_shown() {
        let nginx = "<html>\r\n<head><title>502 Bad Gateway</title></head>\r\n<body>\r\n\
                     <center><h1>502 Bad Gateway</h1></center>\r\n<hr><center>nginx</center>\r\n\
                     </body>\r\n</html>\r\n";
        let err = error_from_response(502, "Bad Gateway", nginx);
        assert_eq!(err.message(), "Bad Gateway");

        let dump = "x".repeat(200_000);
        let err = error_from_response(500, "Internal Server Error", &dump);
        assert_eq!(err.message(), "Internal Server Error");

        let short = "y".repeat(MAX_TEXT_MESSAGE);
        let err = error_from_response(500, "Internal Server Error", &short);
        assert_eq!(err.message(), short);
    }

    #[tokio::test]
    async fn test_deadline_covers_stalled_body() {
        // Headers arrive, then the body never does.
        let stalled = async {
            future::pending::<()>().await;
            Ok::<_, ApiError>(())
        };
        let result = within(DEFAULT_TIMEOUT, stalled, future::ready(())).await;
        assert_eq!(result, Err(ApiError::Timeout(DEFAULT_TIMEOUT)));
    }

    #[tokio::test]
    async fn test_finished_exchange_beats_deadline() {
        let result = within(DEFAULT_TIMEOUT, future::ready(Ok(7)), future::pending()).await;
        assert_eq!(result, Ok(7));

        let failed = within::<(), _, _>(
            DEFAULT_TIMEOUT,
            future::ready(Err(ApiError::Network("refused".into()))),
            future::pending(),
        )
        .await;
        assert_eq!(failed, Err(ApiError::Network("refused".into())));
    }

    #[test]
    fn test_non_http_errors_have_messages() {
        assert_eq!(
            ApiError::Timeout(DEFAULT_TIMEOUT).to_string(),
            "Request timed out after 10000ms"
        );
        assert!(ApiError::Network("connection refused".into())
            .message()
            .contains("connection refused"));
        assert_eq!(ApiError::Parse("eof".into()).status(), None);
    }

    #[test]
    fn test_config_builds_urls() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(
            config.url("/portfolio/projects"),
            "https://api.example.com/api/portfolio/projects"
        );

        let relative = ApiConfig::new("");
        assert_eq!(relative.url("/health"), "/api/health");

        let custom = ApiConfig::new("http://localhost:8001")
            .with_prefix("/v2")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(custom.url("/health"), "http://localhost:8001/v2/health");
        assert_eq!(custom.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_query_display_and_lookup() {
        assert_eq!(Query::new().to_string(), "");

        let query = Query::new()
            .with("category", "Machine Learning")
            .with("limit", 50);
        assert_eq!(query.get("limit"), Some("50"));
        assert_eq!(query.get("missing"), None);
        assert_eq!(query.to_string(), "?category=Machine Learning&limit=50");
    }

    #[test]
    fn test_client_keeps_config() {
        let config = ApiConfig::new("http://localhost:8001").with_timeout(Duration::from_secs(3));
        let client = HttpApiClient::new(config.clone()).with_observer(NoopObserver);
        assert_eq!(client.config(), &config);
        assert_eq!(client.headers.get("Accept"), Some("application/json"));
    }

    #[test]
    fn test_json_headers() {
        let headers = ApiHeaders::json();
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
        assert_eq!(headers.get("Accept"), Some("application/json"));
        assert_eq!(headers.get("Authorization"), None);
    }
}
