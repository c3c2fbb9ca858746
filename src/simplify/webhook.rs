// src/simplify/webhook.rs
// External rewriting webhook backend (n8n-style workflow)

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::{Simplifier, SimplifyError};

/// One element of the request array the workflow expects:
/// `[{"chatInput": "<text>"}]`.
#[derive(Serialize)]
struct WebhookRequest<'a> {
    #[serde(rename = "chatInput")]
    chat_input: &'a str,
}

/// Simplifier backed by an external rewriting webhook.
///
/// The reply must be a JSON array whose first element carries an `output`
/// string field; anything else is reported as a malformed response.
pub struct WebhookSimplifier {
    client: Client,
    url: String,
    timeout: Duration,
}

impl WebhookSimplifier {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            url,
            timeout,
        }
    }
}

#[async_trait]
impl Simplifier for WebhookSimplifier {
    async fn simplify(&self, text: &str) -> Result<String, SimplifyError> {
        debug!(url = %self.url, chars = text.len(), "calling simplification webhook");

        let payload = [WebhookRequest { chat_input: text }];
        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SimplifyError::Timeout
                } else {
                    SimplifyError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SimplifyError::Status(status));
        }

        let body: Value = response.json().await.map_err(SimplifyError::Http)?;
        match body.get(0).and_then(|record| record.get("output")).and_then(Value::as_str) {
            Some(output) => Ok(output.to_string()),
            None => Err(SimplifyError::Malformed(body.to_string())),
        }
    }

    fn backend_name(&self) -> &'static str {
        "webhook"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_payload_matches_workflow_contract() {
        let payload = [WebhookRequest {
            chat_input: "hello",
        }];
        let encoded = serde_json::to_value(&payload).unwrap();
        assert_eq!(encoded, json!([{"chatInput": "hello"}]));
    }
}
