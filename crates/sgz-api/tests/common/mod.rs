#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use axum::{
    Json, Router,
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use http_body_util::BodyExt;
use serde::Deserialize;
use serde_json::json;
use sgz_api::{ApiConfig, router, state::ApiState};
use tower::ServiceExt;

pub const DEFAULT_TITLE: &str = "Default Nebula";
pub const DEFAULT_EXPLANATION: &str =
    "Glowing hydrogen clouds surround young stars in this emission nebula.";

/// What the fake APOD service answers to the next request.
#[derive(Clone, Debug)]
pub enum FakeReply {
    Image {
        title: &'static str,
        explanation: &'static str,
    },
    Video,
    Status(StatusCode),
    /// Answer with the default image after a pause.
    Slow(Duration),
}

#[derive(Clone, Default)]
struct FakeApodState {
    replies: Arc<Mutex<VecDeque<FakeReply>>>,
    requests: Arc<AtomicUsize>,
}

/// In-process stand-in for the APOD service. Once the scripted replies run
/// out it keeps answering with the default image.
pub struct FakeApod {
    pub base_url: String,
    state: FakeApodState,
}

impl FakeApod {
    pub async fn start(replies: Vec<FakeReply>) -> Self {
        let state = FakeApodState {
            replies: Arc::new(Mutex::new(replies.into())),
            requests: Arc::default(),
        };
        let app = Router::new()
            .route("/planetary/apod", get(apod_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake APOD server");
        let addr = listener.local_addr().expect("Fake APOD server has no address");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Fake APOD server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    pub fn push(&self, reply: FakeReply) {
        self.state.replies.lock().unwrap().push_back(reply);
    }
}

async fn apod_handler(
    State(state): State<FakeApodState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let date = query.get("date").cloned().unwrap_or_default();
    let reply = state.replies.lock().unwrap().pop_front();

    let (title, explanation, media_type) = match reply {
        Some(FakeReply::Image { title, explanation }) => (title, explanation, "image"),
        Some(FakeReply::Video) => ("Timelapse", "A video of the turning sky.", "video"),
        Some(FakeReply::Status(status)) => {
            return (status, Json(json!({ "msg": "unavailable" }))).into_response();
        }
        Some(FakeReply::Slow(delay)) => {
            tokio::time::sleep(delay).await;
            (DEFAULT_TITLE, DEFAULT_EXPLANATION, "image")
        }
        None => (DEFAULT_TITLE, DEFAULT_EXPLANATION, "image"),
    };

    Json(json!({
        "date": date,
        "explanation": explanation,
        "hdurl": "https://apod.example/image/hd.jpg",
        "media_type": media_type,
        "title": title,
        "url": "https://apod.example/image/sd.jpg"
    }))
    .into_response()
}

/// Test state builder pointing the API at a fake APOD server
pub struct TestStateBuilder {
    config: ApiConfig,
}

impl TestStateBuilder {
    pub fn new(apod_base_url: &str) -> Self {
        Self {
            config: ApiConfig {
                apod_base_url: apod_base_url.to_string(),
                apod_api_key: "test-key".to_string(),
                apod_timeout_secs: 5,
                rng_seed: Some(7),
                ..ApiConfig::default()
            },
        }
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.apod_max_attempts = attempts;
        self
    }

    pub fn build(self) -> ApiState {
        ApiState::new(&self.config).expect("Failed to create test state")
    }
}

/// Start a fake APOD server and a client for an API wired to it
pub async fn setup(replies: Vec<FakeReply>) -> (FakeApod, TestClient) {
    let fake = FakeApod::start(replies).await;
    let state = TestStateBuilder::new(&fake.base_url).build();
    let client = TestClient::new(router::router().with_state(state));
    (fake, client)
}

/// Helper to make requests to the test app
#[derive(Clone)]
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with no body
    pub async fn post(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}
