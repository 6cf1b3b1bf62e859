//! Verifies the exchange log line and its redaction through the full stack.

use std::io::Write;
use std::sync::{Arc, Mutex};

use article_server::{AppState, ServerConfig, build_app};
use article_store::ArticleStore;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl Capture {
    /// Parsed "Request handled" events, in emission order.
    fn exchanges(&self) -> Vec<Value> {
        let raw = String::from_utf8(self.0.lock().unwrap().clone()).unwrap();
        raw.lines()
            .filter_map(|line| serde_json::from_str::<Value>(line).ok())
            .filter(|event| event["fields"]["message"] == "Request handled")
            .map(|event| event["fields"].clone())
            .collect()
    }
}

/// Install a JSON subscriber writing into a fresh capture buffer for this thread.
fn capture_subscriber() -> (Capture, tracing::subscriber::DefaultGuard) {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .with_writer(capture.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}

fn create_request(payload: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/articles/create")
        .header("content-type", "application/json")
        .body(Body::from(payload))
        .unwrap()
}

// Both exchanges run in one test so a single thread-local subscriber sees them.
#[tokio::test]
async fn test_exchange_log_lines() {
    let (capture, _guard) = capture_subscriber();

    // Accepted request: sensitive fields are masked, bodies stay nested JSON.
    let app = build_app(AppState::new(ArticleStore::new(), ServerConfig::default())).unwrap();
    let payload = json!({
        "title": "Hello",
        "content": "World",
        "password": "12345",
        "token": "abc",
    });
    let response = app.oneshot(create_request(payload.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Oversized request: refused before the handler but still logged.
    let config = ServerConfig {
        max_body_bytes: 16,
        ..ServerConfig::default()
    };
    let app = build_app(AppState::new(ArticleStore::new(), config)).unwrap();
    let oversized = json!({"title": "x".repeat(100), "content": "c"}).to_string();
    let response = app.oneshot(create_request(oversized)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let exchanges = capture.exchanges();
    assert_eq!(exchanges.len(), 2);

    let fields = &exchanges[0];
    assert_eq!(fields["method"], "POST");
    assert_eq!(fields["path"], "/articles/create");
    assert_eq!(fields["status"], 201);
    assert!(fields["duration_ms"].as_u64().is_some());

    let record: Value = serde_json::from_str(fields["exchange"].as_str().unwrap()).unwrap();
    assert!(record["time"].as_str().is_some());
    assert_eq!(record["status"], 201);
    assert_eq!(record["request_body"]["password"], "******");
    assert_eq!(record["request_body"]["token"], "******");
    assert_eq!(record["request_body"]["title"], "Hello");
    assert_eq!(
        record["response_body"],
        json!({"id": 1, "title": "Hello", "content": "World"})
    );
    assert_eq!(record["request_headers"]["content-type"], json!(["application/json"]));

    let fields = &exchanges[1];
    assert_eq!(fields["status"], 413);
    let record: Value = serde_json::from_str(fields["exchange"].as_str().unwrap()).unwrap();
    assert_eq!(record["request_body"], Value::Null);
    assert_eq!(record["response_body"]["error"]["code"], "PAYLOAD_TOO_LARGE");
}
