//! SendGrid transport tests
//!
//! Verifies the wire call against a mock HTTP server: endpoint, auth
//! header, payload shape, and the success/failure mapping.

use mesa_core::errors::MesaError;
use mesa_notify::{EmailTransport, Message, SendGridTransport};
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn message() -> Message {
    Message {
        to: "carmen@example.com".to_string(),
        subject: "Reservation request received - Riba da Cheda".to_string(),
        html: "<p>details</p>".to_string(),
    }
}

#[tokio::test]
async fn test_send_posts_v3_mail_send_with_bearer_auth() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .and(bearer_token("sg-test-key"))
        .and(body_partial_json(serde_json::json!({
            "personalizations": [{ "to": [{ "email": "carmen@example.com" }] }],
            "from": { "email": "noreply@ribadacheda.example" },
            "subject": "Reservation request received - Riba da Cheda",
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let transport = SendGridTransport::new("sg-test-key", "noreply@ribadacheda.example")
        .with_base_url(server.uri());

    transport.send(&message()).await.unwrap();
}

#[tokio::test]
async fn test_provider_error_is_a_notification_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let transport =
        SendGridTransport::new("wrong-key", "noreply@ribadacheda.example").with_base_url(server.uri());

    let err = transport.send(&message()).await.unwrap_err();
    match err {
        MesaError::Notification { message } => {
            assert!(message.contains("401"), "unexpected message: {message}");
        }
        other => panic!("expected Notification error, got {other:?}"),
    }
}
