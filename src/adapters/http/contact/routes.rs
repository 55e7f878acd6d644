//! Axum router configuration for the contact relay.

use axum::routing::post;
use axum::Router;

use super::handlers::{send_contact, ContactAppState};

/// Create the contact router, for mounting under `/api`.
///
/// # Routes
/// - `POST /contact` - Relay a contact form submission by email
pub fn contact_router() -> Router<ContactAppState> {
    Router::new().route("/contact", post(send_contact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mail::MockMailTransport;
    use crate::ports::MailError;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(transport: Arc<MockMailTransport>) -> Router {
        contact_router().with_state(ContactAppState::new(transport, "me@example.com"))
    }

    async fn post_json(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    const VALID: &str = r#"{"name":"A","email":"a@b.com","subject":"Hi","message":"Test"}"#;

    #[tokio::test]
    async fn valid_submission_is_relayed_once() {
        let transport = Arc::new(MockMailTransport::new());

        let (status, body) = post_json(app(transport.clone()), VALID).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "message": "Email sent successfully!" }));
        let sent = transport.sent_messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Portfolio Contact: Hi");
        assert_eq!(sent[0].reply_to.as_deref(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn delivery_failure_maps_to_500_without_details() {
        let transport = Arc::new(MockMailTransport::failing(MailError::AuthenticationFailed));

        let (status, body) = post_json(app(transport.clone()), VALID).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Failed to send email" }));
        assert_eq!(transport.attempts(), 1);
    }

    #[tokio::test]
    async fn blank_field_is_rejected_before_sending() {
        let transport = Arc::new(MockMailTransport::new());
        let body = r#"{"name":"A","email":"a@b.com","subject":"   ","message":"Test"}"#;

        let (status, body) = post_json(app(transport.clone()), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("subject"));
        assert_eq!(transport.attempts(), 0);
    }

    #[tokio::test]
    async fn missing_field_is_reported_by_name() {
        let transport = Arc::new(MockMailTransport::new());
        let body = r#"{"name":"A","email":"a@b.com","subject":"Hi"}"#;

        let (status, body) = post_json(app(transport), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("message"));
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let transport = Arc::new(MockMailTransport::new());

        let (status, body) = post_json(app(transport.clone()), "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Invalid request body" }));
        assert_eq!(transport.attempts(), 0);
    }

    #[tokio::test]
    async fn html_in_fields_is_escaped_in_email() {
        let transport = Arc::new(MockMailTransport::new());
        let body = r#"{"name":"<b>A</b>","email":"a@b.com","subject":"Hi","message":"<script>x</script>"}"#;

        let (status, _) = post_json(app(transport.clone()), body).await;

        assert_eq!(status, StatusCode::OK);
        let html = &transport.sent_messages()[0].html;
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
