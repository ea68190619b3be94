//! Request extractors whose rejections are Problem Details
//!
//! axum's own `Query`, `Path` and `Json` reject with a `text/plain` body.
//! These wrappers run the same extraction and turn the rejection into a
//! [`Problem`] so every `/api` failure has one shape.

use super::error::Problem;
use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

/// Query string extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

/// Path parameter extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiPath<T>(pub T);

/// JSON body extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        axum::extract::Query::<T>::from_request_parts(parts, state)
            .await
            .map(|axum::extract::Query(value)| Self(value))
            .map_err(|rejection| {
                invalid_request(rejection.status(), "Invalid Query", rejection.body_text())
                    .with_instance(parts.uri.path().to_string())
            })
    }
}

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map(|axum::extract::Path(value)| Self(value))
            .map_err(|rejection| {
                invalid_request(rejection.status(), "Invalid Path", rejection.body_text())
                    .with_instance(parts.uri.path().to_string())
            })
    }
}

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let instance = req.uri().path().to_string();
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection| {
                invalid_request(rejection.status(), "Invalid Body", rejection.body_text())
                    .with_instance(instance)
            })
    }
}

/// Rejections keep axum's status (400, 415, 422...) and its message as detail
fn invalid_request(
    status: axum::http::StatusCode,
    title: &str,
    detail: String,
) -> Problem {
    tracing::debug!(status = status.as_u16(), detail = %detail, "Rejected API request");
    Problem::new(status, title).with_detail(detail)
}
