//! Problem Details (RFC 9457) responses for the JSON API

use crate::contract::TalesError;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

const PROBLEM_JSON: &str = "application/problem+json";

/// Error body of every failed `/api` request
#[derive(Debug, Serialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_uri: String,

    pub title: String,

    pub status: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Path of the failing resource, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(self)).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
        response
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: TalesError) -> Problem {
    match error {
        TalesError::NotFound { resource, id } => {
            Problem::new(StatusCode::NOT_FOUND, format!("{} Not Found", capitalize(&resource)))
                .with_detail(format!("{} '{}' was not found", resource, id))
        }

        TalesError::Validation { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message)
        }

        TalesError::Upstream { message } => {
            tracing::warn!(error = %message, "Upstream failure");
            Problem::new(StatusCode::BAD_GATEWAY, "Upstream Unavailable")
                .with_detail("The tale catalog could not be reached")
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (TalesError::not_found("tale", 9), StatusCode::NOT_FOUND),
            (TalesError::validation("bad"), StatusCode::BAD_REQUEST),
            (
                TalesError::Upstream {
                    message: "timeout".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(map_domain_error(error).status_code(), status);
        }
    }

    #[test]
    fn test_not_found_title_and_detail() {
        let problem = map_domain_error(TalesError::not_found("tale", 42));
        assert_eq!(problem.title, "Tale Not Found");
        assert_eq!(problem.detail.as_deref(), Some("tale '42' was not found"));
        assert_eq!(problem.type_uri, "https://httpstatuses.io/404");
        assert!(problem.instance.is_none());
    }

    #[test]
    fn test_response_uses_problem_media_type() {
        let response = Problem::new(StatusCode::BAD_GATEWAY, "Upstream Unavailable")
            .with_instance("/api/tales/3")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(response.headers()[header::CONTENT_TYPE], PROBLEM_JSON);
    }
}
