//! Error taxonomy for the summarization webhook call.

/// Errors from the summarization webhook layer.
///
/// Every failure of a webhook call falls into exactly one of these kinds;
/// callers never re-inspect response shape themselves.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request failed (network, DNS, TLS) or the webhook
    /// returned a non-2xx status code.
    #[error("summarization webhook transport failure: {detail}")]
    Transport {
        /// Connection error text, or the status line and body on non-2xx.
        detail: String,
    },

    /// The webhook answered 2xx but the body violates the response
    /// contract (a required field is missing or empty).
    #[error("summarization webhook response missing required field '{field}'")]
    Protocol {
        /// Name of the violated field.
        field: &'static str,
    },

    /// Any other failure during the call, e.g. a body that is not JSON.
    #[error("summarization webhook call failed: {detail}")]
    Unknown {
        /// Human-readable failure description.
        detail: String,
    },
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport {
            detail: err.to_string(),
        }
    }
}
