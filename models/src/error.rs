//! Error surfaced to views and the CLI for failed backend calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection refused, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}{}", message_suffix(.message))]
    Status { status: u16, message: String },
    /// The response body did not match the expected view-model.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The call cannot run in this environment (server-side render).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// Build from a non-2xx status and whatever body text came back.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: extract_message(body),
        }
    }
}

/// Map a 404 to `Ok(None)` for lookups where absence is an expected state,
/// such as a buddy guide who has not created a profile yet.
///
/// # Errors
///
/// Passes through every error other than a 404.
pub fn optional<T>(result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

/// Decode a 2xx response body into `T`. An empty body decodes as JSON
/// `null`, so `Option<T>` and unit-like targets accept it.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body does not match `T`.
pub fn decode_body<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let decoded = if text.trim().is_empty() {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_str(text)
    };
    decoded.map_err(|e| ApiError::Decode(e.to_string()))
}

fn message_suffix(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"message": ..}`, `{"title": ..}` (problem details), a JSON
/// string, or plain text. Long bodies are cut at 200 characters.
fn extract_message(body: &str) -> String {
    let trimmed = body.trim();
    let from_json = serde_json::from_str::<serde_json::Value>(trimmed)
        .ok()
        .and_then(|value| match value {
            serde_json::Value::String(text) => Some(text),
            serde_json::Value::Object(map) => ["message", "error", "title", "detail"]
                .iter()
                .find_map(|key| map.get(*key).and_then(|v| v.as_str()).map(str::to_owned)),
            _ => None,
        });
    let message = from_json.unwrap_or_else(|| trimmed.to_owned());
    if message.chars().count() > 200 {
        let cut: String = message.chars().take(200).collect();
        format!("{cut}…")
    } else {
        message
    }
}
