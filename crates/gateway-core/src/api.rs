//! The gateway's universal JSON response envelope.

use log::warn;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{ApiError, NotAuthenticatedError};

/// Response envelope used by every gateway endpoint: `{success, message, data}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the server processed the request.
    pub success: bool,
    /// Human-readable outcome, mostly set on failures.
    pub message: Option<String>,
    /// Operation payload, on endpoints that have one.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// The server message, trimmed, or `fallback` when the server sent none.
    pub fn message_or(&self, fallback: &str) -> String {
        match self.message.as_deref().map(str::trim) {
            Some(m) if !m.is_empty() => m.to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Reads the envelope out of an HTTP response.
    ///
    /// The gateway answers failed requests with the same envelope under a 4xx
    /// or 5xx status, so error statuses are only surfaced as
    /// [`ApiError::ResponseContent`] when the body isn't an envelope. HTTP 401
    /// always maps to [`NotAuthenticatedError`] so callers can drop their
    /// session state.
    pub async fn from_response(response: reqwest::Response) -> Result<Self, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!("Request was rejected as unauthenticated, the session may have expired");
            return Err(NotAuthenticatedError.into());
        }

        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => {
                Err(ApiError::ResponseContent { status, message: body })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: i32,
    }

    #[test]
    fn parses_success_envelope_with_data() {
        let parsed: ApiResponse<Payload> =
            serde_json::from_str(r#"{"success":true,"data":{"value":7}}"#).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.message, None);
        assert_eq!(parsed.data, Some(Payload { value: 7 }));
    }

    #[test]
    fn parses_failure_envelope_without_data() {
        let parsed: ApiResponse<Payload> =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("nope"));
        assert_eq!(parsed.data, None);
    }

    #[test]
    fn message_or_falls_back_on_missing_or_blank() {
        let missing: ApiResponse<Payload> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(missing.message_or("fallback"), "fallback");

        let blank: ApiResponse<Payload> =
            serde_json::from_str(r#"{"success":false,"message":"  "}"#).unwrap();
        assert_eq!(blank.message_or("fallback"), "fallback");

        let set: ApiResponse<Payload> =
            serde_json::from_str(r#"{"success":false,"message":" busy "}"#).unwrap();
        assert_eq!(set.message_or("fallback"), "busy");
    }
}
