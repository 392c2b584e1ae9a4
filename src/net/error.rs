//! Error taxonomy for remote API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure carries the server `detail` when one was sent. The UI edge
//! collapses an error into a single message with [`ApiError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("not authorized ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Unauthorized { status: u16, detail: Option<String> },
    #[error("request rejected ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Validation { status: u16, detail: Option<String> },
    #[error("server error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Server { status: u16, detail: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("http is not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response by status code.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        match status {
            401 | 403 => Self::Unauthorized { status, detail },
            400 | 409 | 422 => Self::Validation { status, detail },
            _ => Self::Server { status, detail },
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail, .. } | Self::Validation { detail, .. } | Self::Server { detail, .. } => {
                detail.as_deref()
            }
            Self::Transport(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }

    /// Message shown to the user: the server detail, or `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_owned()
    }
}

/// Pull a human-readable detail out of an error body.
///
/// Handles `{"detail": "text"}` and FastAPI validation errors
/// (`{"detail": [{"msg": "..."}, ...]}`), which are joined with `"; "`.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str))
                .filter(|m| !m.is_empty())
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}
