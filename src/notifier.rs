// Outbound notification seam. Delivery is best-effort everywhere: the
// interaction service awaits the send but swallows and logs any failure.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::config::MailConfig;

#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub subject: String,
    pub body: String,
    pub from: String,
    pub to: String,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<()>;
}

/// Posts each email as JSON to an HTTP relay.
pub struct HttpNotifier {
    client: reqwest::Client,
    relay_url: String,
}

impl HttpNotifier {
    pub fn new(relay_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url,
        }
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send(&self, email: OutboundEmail) -> Result<()> {
        self.client
            .post(&self.relay_url)
            .json(&email)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Drops everything. Used when no relay is configured.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send(&self, _email: OutboundEmail) -> Result<()> {
        Ok(())
    }
}

/// Test double: records sent mail, optionally failing every send.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: std::sync::Mutex<Vec<OutboundEmail>>,
    pub fail_sends: std::sync::atomic::AtomicBool,
}

impl RecordingNotifier {
    pub fn sent_emails(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_sends
            .store(failing, std::sync::atomic::Ordering::SeqCst);
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, email: OutboundEmail) -> Result<()> {
        if self.fail_sends.load(std::sync::atomic::Ordering::SeqCst) {
            anyhow::bail!("relay unavailable");
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Picks the notifier implementation from the mail configuration.
pub fn from_config(mail: &MailConfig) -> Arc<dyn Notifier> {
    match &mail.relay_url {
        Some(url) => Arc::new(HttpNotifier::new(url.clone())),
        None => Arc::new(NoopNotifier),
    }
}
