use std::time::Duration;
use crate::contact::form::WebhookPayload;
use crate::error::ContactError;

pub trait Webhook {
    fn post(&self, payload: &WebhookPayload) -> Result<(), ContactError>;
}

/// Posts payloads as JSON to a fixed URL. Any 2xx counts as delivered.
pub struct HttpWebhook {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpWebhook {
    pub fn new(url: impl Into<String>) -> Result<Self, ContactError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        Ok(Self { client, url: url.into() })
    }
}

impl Webhook for HttpWebhook {
    fn post(&self, payload: &WebhookPayload) -> Result<(), ContactError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ContactError::Status(status.as_u16()))
        }
    }
}
