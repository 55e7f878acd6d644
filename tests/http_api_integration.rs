//! Integration tests for the API server.
//!
//! These tests bind the real application router to an ephemeral port and
//! talk to it over HTTP:
//! 1. Health and content endpoints answer with the documented bodies
//! 2. The contact relay reaches the mail transport exactly once
//! 3. The Resend transport speaks the provider's HTTP API

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use portfolio_site::adapters::content::StaticContentSource;
use portfolio_site::adapters::http::{app_router, ContactAppState, PortfolioAppState};
use portfolio_site::adapters::mail::{MockMailTransport, ResendConfig, ResendMailTransport};
use portfolio_site::config::ServerConfig;
use portfolio_site::domain::contact::{ContactMessage, ContactSubmission};
use portfolio_site::domain::portfolio::{default_document, ContentDocument};
use portfolio_site::ports::{MailError, MailTransport};

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_server(transport: Arc<dyn MailTransport>) -> String {
    let portfolio = PortfolioAppState::new(Arc::new(StaticContentSource::with_default()));
    let contact = ContactAppState::new(transport, "me@example.com");
    let addr = serve(app_router(&ServerConfig::default(), portfolio, contact)).await;
    format!("http://{}", addr)
}

fn valid_submission() -> Value {
    json!({
        "name": "A",
        "email": "a@b.com",
        "subject": "Hi",
        "message": "Test"
    })
}

/// A stand-in for the Resend API recording what it receives.
#[derive(Clone)]
struct FakeResend {
    requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    status: StatusCode,
    body: Value,
}

impl FakeResend {
    fn answering(status: StatusCode, body: Value) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            status,
            body,
        }
    }

    fn requests(&self) -> Vec<(Option<String>, Value)> {
        self.requests.lock().unwrap().clone()
    }

    async fn start(&self) -> String {
        let app = Router::new()
            .route("/emails", post(fake_send))
            .with_state(self.clone());
        format!("http://{}", serve(app).await)
    }
}

async fn fake_send(
    State(fake): State<FakeResend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    fake.requests.lock().unwrap().push((auth, body));
    (fake.status, Json(fake.body.clone()))
}

fn resend_transport(base_url: &str) -> ResendMailTransport {
    ResendMailTransport::new(
        ResendConfig::new("me@example.com", "re_test_key").with_base_url(base_url),
    )
    .unwrap()
}

fn message() -> ContactMessage {
    ContactMessage::compose(
        &ContactSubmission::new("A", "a@b.com", "Hi", "Test"),
        "me@example.com",
    )
}

// =============================================================================
// Content endpoints
// =============================================================================

#[tokio::test]
async fn health_reports_running() {
    let base = spawn_server(Arc::new(MockMailTransport::new())).await;

    let response = reqwest::get(format!("{}/api/health", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Server is running!" }));
}

#[tokio::test]
async fn portfolio_returns_every_section() {
    let base = spawn_server(Arc::new(MockMailTransport::new())).await;

    let response = reqwest::get(format!("{}/api/portfolio", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["about"]["name"], "Your Name");
    assert_eq!(body["skills"].as_array().unwrap().len(), 6);
    assert_eq!(body["experience"].as_array().unwrap().len(), 2);
    assert_eq!(body["education"].as_array().unwrap().len(), 1);
    assert_eq!(body["projects"].as_array().unwrap().len(), 6);
    assert_eq!(body["contact"]["email"], "your.email@example.com");

    let document: ContentDocument = serde_json::from_value(body).unwrap();
    assert_eq!(&document, default_document());
}

#[tokio::test]
async fn portfolio_is_identical_across_requests() {
    let base = spawn_server(Arc::new(MockMailTransport::new())).await;
    let url = format!("{}/api/portfolio", base);

    let first = reqwest::get(&url).await.unwrap().text().await.unwrap();
    let second = reqwest::get(&url).await.unwrap().text().await.unwrap();

    assert_eq!(first, second);
}

// =============================================================================
// Contact relay
// =============================================================================

#[tokio::test]
async fn contact_relays_one_prefixed_message() {
    let transport = Arc::new(MockMailTransport::new());
    let base = spawn_server(transport.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&valid_submission())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Email sent successfully!" }));

    let sent = transport.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Portfolio Contact: Hi");
    assert_eq!(sent[0].from, "me@example.com");
    assert_eq!(sent[0].to, "me@example.com");
    assert!(sent[0].html.contains("A"));
    assert!(sent[0].html.contains("a@b.com"));
    assert!(sent[0].html.contains("Test"));
}

#[tokio::test]
async fn contact_failure_is_reported_as_500() {
    let transport = Arc::new(MockMailTransport::failing(MailError::network("smtp down")));
    let base = spawn_server(transport.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&valid_submission())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Failed to send email" }));
    assert_eq!(transport.attempts(), 1);
}

#[tokio::test]
async fn contact_rejects_blank_fields_without_sending() {
    let transport = Arc::new(MockMailTransport::new());
    let base = spawn_server(transport.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&json!({ "name": "", "email": "a@b.com", "subject": "Hi", "message": "Test" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("name"));
    assert_eq!(transport.attempts(), 0);
}

// =============================================================================
// Resend transport
// =============================================================================

#[tokio::test]
async fn resend_posts_bearer_authenticated_email() {
    let fake = FakeResend::answering(StatusCode::OK, json!({ "id": "email_123" }));
    let base = fake.start().await;

    let receipt = resend_transport(&base).send(&message()).await.unwrap();

    assert_eq!(receipt.provider_id.as_deref(), Some("email_123"));
    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    let (auth, body) = &requests[0];
    assert_eq!(auth.as_deref(), Some("Bearer re_test_key"));
    assert_eq!(body["from"], "me@example.com");
    assert_eq!(body["to"], json!(["me@example.com"]));
    assert_eq!(body["subject"], "Portfolio Contact: Hi");
    assert_eq!(body["reply_to"], "a@b.com");
}

#[tokio::test]
async fn resend_maps_unauthorized_to_authentication_failure() {
    let fake = FakeResend::answering(
        StatusCode::UNAUTHORIZED,
        json!({ "statusCode": 401, "message": "API key is invalid", "name": "validation_error" }),
    );
    let base = fake.start().await;

    let result = resend_transport(&base).send(&message()).await;

    assert_eq!(result.unwrap_err(), MailError::AuthenticationFailed);
}

#[tokio::test]
async fn resend_maps_validation_error_to_rejection() {
    let fake = FakeResend::answering(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({ "statusCode": 422, "message": "Invalid `to` field", "name": "validation_error" }),
    );
    let base = fake.start().await;

    let result = resend_transport(&base).send(&message()).await;

    assert_eq!(
        result.unwrap_err(),
        MailError::Rejected("Invalid `to` field".to_string())
    );
}

#[tokio::test]
async fn relay_through_resend_fails_cleanly_on_provider_outage() {
    let fake = FakeResend::answering(StatusCode::SERVICE_UNAVAILABLE, json!({}));
    let resend_base = fake.start().await;
    let base = spawn_server(Arc::new(resend_transport(&resend_base))).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&valid_submission())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(fake.requests().len(), 1);
}
