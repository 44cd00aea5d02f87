//! Email transports
//!
//! The provider seam: [`EmailTransport`] is what the notifier talks to.
//! [`SendGridTransport`] posts to the SendGrid v3 mail/send API;
//! [`NoopTransport`] logs and drops, for deployments without an API key.

use crate::message::Message;
use async_trait::async_trait;
use mesa_core::errors::{MesaError, Result};
use tracing::{debug, info};

/// Default SendGrid API base
pub const SENDGRID_API_BASE: &str = "https://api.sendgrid.com";

/// A one-shot email sender
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Send a single message; no retries
    async fn send(&self, message: &Message) -> Result<()>;
}

/// Transport posting to the SendGrid v3 mail/send endpoint
pub struct SendGridTransport {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    from_email: String,
}

impl SendGridTransport {
    /// Create a transport against the production API base
    pub fn new(api_key: impl Into<String>, from_email: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: SENDGRID_API_BASE.to_string(),
            from_email: from_email.into(),
        }
    }

    /// Override the API base (tests point this at a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl EmailTransport for SendGridTransport {
    async fn send(&self, message: &Message) -> Result<()> {
        let payload = serde_json::json!({
            "personalizations": [{ "to": [{ "email": message.to }] }],
            "from": { "email": self.from_email },
            "subject": message.subject,
            "content": [{ "type": "text/html", "value": message.html }],
        });

        let response = self
            .client
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MesaError::Notification {
                message: format!("mail/send request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MesaError::Notification {
                message: format!("mail/send returned {}: {}", status, body),
            });
        }

        debug!(to = %message.to, subject = %message.subject, "email accepted by provider");
        Ok(())
    }
}

/// Transport that logs and drops every message
///
/// Selected when no provider key is configured, so the reservation flow
/// keeps working in development and the emails show up in the logs.
pub struct NoopTransport;

#[async_trait]
impl EmailTransport for NoopTransport {
    async fn send(&self, message: &Message) -> Result<()> {
        info!(
            to = %message.to,
            subject = %message.subject,
            "email dispatch disabled; dropping message"
        );
        Ok(())
    }
}
