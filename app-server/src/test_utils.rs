use crate::config::AppConfig;
use crate::create_app;
use crate::state::AppState;
use axum::body::Body;
use axum::Router;
use http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use log::LevelFilter;
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

/// Path the data API mock answers queries on
pub const DATA_QUERY_PATH: &str = "/v1/query";

/// Test fixture with the application router and a mocked data API.
///
/// # Examples
///
/// ```rust
/// #[tokio::test]
/// async fn test_endpoint() {
///     let fixture = TestFixture::new().await;
///
///     fixture
///         .add_data_mock(Method::POST, json!([]), StatusCode::OK, 1)
///         .await;
///
///     let response = fixture
///         .get_with_headers("/examples/filestore", &[("X-Hasura-Allowed-Roles", "user")])
///         .await;
///     response.assert_ok();
/// }
/// ```
pub struct TestFixture {
    /// The application router
    pub app: Router,
    /// Configuration settings
    pub config: AppConfig,
    /// State shared by the router
    pub state: AppState,
    /// Mock server for the data API
    pub data_mock: MockServer,
}

impl TestFixture {
    pub async fn new() -> Self {
        // Initialize test logger
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();

        let data_mock = MockServer::start().await;
        let config = AppConfig::for_test_with_mock(&data_mock);
        let state = AppState::for_testing(&config);
        let app = create_app(state.clone());

        Self {
            app,
            config,
            state,
            data_mock,
        }
    }

    pub fn request_builder(&self, method: Method, uri: impl AsRef<str>) -> http::request::Builder {
        Request::builder().method(method).uri(uri.as_ref())
    }

    pub async fn get(&self, uri: impl AsRef<str>) -> TestResponse {
        self.get_with_headers(uri, &[]).await
    }

    /// Sends a GET request with the given headers, typically the gateway's
    /// `X-Hasura-*` headers.
    pub async fn get_with_headers(
        &self,
        uri: impl AsRef<str>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = self.request_builder(Method::GET, uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let request = builder.body(Body::empty()).expect("Failed to build request");
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(body.to_vec()).expect("Response body is not UTF-8"),
        }
    }

    /// Mocks the data API query endpoint with a JSON response.
    pub async fn add_data_mock(
        &self,
        method: Method,
        response_body: impl Serialize,
        status_code: StatusCode,
        expected_calls: u64,
    ) {
        Mock::given(matchers::method(method.as_str()))
            .and(matchers::path(DATA_QUERY_PATH))
            .respond_with(ResponseTemplate::new(status_code.as_u16()).set_body_json(response_body))
            .expect(expected_calls)
            .mount(&self.data_mock)
            .await;
    }

    /// Mocks the data API query endpoint with a raw text response.
    pub async fn add_raw_data_mock(
        &self,
        response_body: &str,
        status_code: StatusCode,
        expected_calls: u64,
    ) {
        Mock::given(matchers::method("POST"))
            .and(matchers::path(DATA_QUERY_PATH))
            .respond_with(
                ResponseTemplate::new(status_code.as_u16()).set_body_string(response_body),
            )
            .expect(expected_calls)
            .mount(&self.data_mock)
            .await;
    }

    /// Number of requests the data API mock received
    pub async fn data_calls(&self) -> usize {
        self.data_mock
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

/// Response from a test request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// # Panics
    ///
    /// Panics if the status code doesn't match the expected value.
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status, expected,
            "Expected status {} but got {} with body: {}",
            expected, self.status, self.body
        );
        self
    }

    pub fn assert_ok(&self) -> &Self {
        self.assert_status(StatusCode::OK)
    }

    pub fn is_html(&self) -> bool {
        self.headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/html"))
    }

    /// Body parsed as JSON
    ///
    /// # Panics
    ///
    /// Panics if the body is not JSON.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("Response body is not JSON")
    }

    /// Body with the HTML escapes applied by the templates undone
    pub fn text(&self) -> String {
        self.body
            .replace("&quot;", "\"")
            .replace("&#x27;", "'")
            .replace("&#x2F;", "/")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }

    /// Unescaped content of the element with the given id
    pub fn element_text(&self, id: &str) -> Option<String> {
        let text = self.text();
        let marker = format!("id=\"{id}\">");
        let start = text.find(&marker)? + marker.len();
        let end = start + text[start..].find("</")?;
        Some(text[start..end].to_string())
    }
}
