//! Client error types

use crate::types::ErrorBody;
use thiserror::Error;

/// Message used when an error response carries no readable `message`
pub const GENERIC_ERROR_MESSAGE: &str = "요청 처리 중 오류가 발생했습니다.";

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status other than 401.
    ///
    /// Displays as the bare message so it can be shown to the user as-is.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Build an API error from a status code and the raw response body
    pub fn from_body(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|body| body.message)
            .unwrap_or_else(|_| GENERIC_ERROR_MESSAGE.to_string());

        Self::Api {
            status: status.as_u16(),
            message,
        }
    }

    /// Consume an error response and turn it into an API error
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Self::from_body(status, &body)
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(error) => error.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn message_comes_from_json_body() {
        let error = ClientError::from_body(
            StatusCode::CONFLICT,
            r#"{"message":"이미 푼 문제입니다.","code":"PROBLEM_ALREADY_SOLVED"}"#,
        );
        assert_eq!(error.to_string(), "이미 푼 문제입니다.");
        assert_eq!(error.status(), Some(409));
    }

    #[test]
    fn unreadable_body_falls_back_to_generic_message() {
        for body in ["", "<html>502</html>", r#"{"error":"nope"}"#] {
            let error = ClientError::from_body(StatusCode::BAD_GATEWAY, body);
            assert_eq!(error.to_string(), GENERIC_ERROR_MESSAGE);
        }
    }
}
