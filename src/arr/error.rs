use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use super::Service;

/// Longest slice of a raw error body carried into an error message.
const MAX_BODY_CHARS: usize = 300;

/// Errors returned by the Radarr/Sonarr clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No API key configured for the service.
    #[error("{0} API key not configured")]
    NotConfigured(Service),

    /// Transport failure (connection refused, timeout, TLS...).
    #[error("{service} API request failed: {source}")]
    Request {
        service: Service,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("{service} API returned {status}: {message}")]
    Status {
        service: Service,
        status: StatusCode,
        message: String,
    },

    /// The response body was not the JSON we expected.
    #[error("{service} API returned an unexpected response for '{endpoint}': {source}")]
    Decode {
        service: Service,
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn service(&self) -> Service {
        match self {
            ClientError::NotConfigured(service)
            | ClientError::Request { service, .. }
            | ClientError::Status { service, .. }
            | ClientError::Decode { service, .. } => *service,
        }
    }
}

/// Pull a readable message out of an error body.
///
/// Radarr and Sonarr answer with either `{"message": ...}` or an array of
/// validation failures carrying `errorMessage`. Anything else is passed
/// through, truncated.
pub(crate) fn error_message_from_body(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
        if let Some(failures) = value.as_array() {
            let messages: Vec<&str> = failures
                .iter()
                .filter_map(|f| f.get("errorMessage").and_then(Value::as_str))
                .collect();
            if !messages.is_empty() {
                return messages.join("; ");
            }
        }
    }

    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string();
    }
    if body.chars().count() > MAX_BODY_CHARS {
        let truncated: String = body.chars().take(MAX_BODY_CHARS).collect();
        format!("{}...", truncated)
    } else {
        body.to_string()
    }
}
