//! HTTP client for the n8n summarization webhook.
//!
//! Issues the single outbound `POST` carrying a video reference and
//! normalizes the response or failure via [`crate::payload`] and
//! [`crate::error::GatewayError`].

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::payload::{RawSummaryResponse, SummaryPayload};

/// Outbound interface to the summarization service.
///
/// Production uses [`N8nWebhookClient`]; tests substitute a scripted fake
/// so no network call happens and invocations can be counted.
#[async_trait]
pub trait SummaryGateway: Send + Sync {
    /// Request a summary for the given video reference.
    ///
    /// Suspends until the webhook's single response resolves. Does not
    /// retry, does not set a timeout, and does not deduplicate concurrent
    /// identical requests.
    async fn request_summary(&self, video_reference: &str)
        -> Result<SummaryPayload, GatewayError>;
}

/// HTTP client for a single n8n webhook endpoint.
///
/// Stateless between invocations; safe to share across tasks.
pub struct N8nWebhookClient {
    client: reqwest::Client,
    webhook_url: String,
}

impl N8nWebhookClient {
    /// Create a new client for the statically configured webhook URL.
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, webhook_url: String) -> Self {
        Self {
            client,
            webhook_url,
        }
    }
}

#[async_trait]
impl SummaryGateway for N8nWebhookClient {
    async fn request_summary(
        &self,
        video_reference: &str,
    ) -> Result<SummaryPayload, GatewayError> {
        let body = serde_json::json!({
            "videoReference": video_reference,
        });

        tracing::debug!(video_reference, "Requesting summary from webhook");

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GatewayError::Transport {
                detail: format!("HTTP {}: {body}", status.as_u16()),
            });
        }

        let text = response.text().await?;
        let raw: RawSummaryResponse = serde_json::from_str(&text).map_err(|err| {
            GatewayError::Unknown {
                detail: format!("response body is not valid JSON: {err}"),
            }
        })?;

        raw.into_payload()
    }
}
