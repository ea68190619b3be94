//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
    extract::{ApiJson, ApiPath, ApiQuery},
};
use crate::domain::Service;
use axum::{http::StatusCode, Json};
use std::sync::Arc;

// ===== Tale Handlers =====

/// List one page of tales
#[utoipa::path(
    get,
    path = "/api/tales",
    tag = "tales",
    params(BrowseQuery),
    responses(
        (status = 200, description = "One page of tales", body = TaleListResponse),
        (status = 400, description = "Invalid search or malformed query")
    )
)]
pub async fn list_tales(
    service: Arc<Service>,
    ApiQuery(query): ApiQuery<BrowseQuery>,
) -> Result<Json<TaleListResponse>, Problem> {
    let (view, request) = query.into_parts();
    let page = service
        .browse(view, request)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(page.into()))
}

/// Pick a random tale from the page the query describes
#[utoipa::path(
    get,
    path = "/api/tales/random",
    tag = "tales",
    params(BrowseQuery),
    responses(
        (status = 200, description = "A random tale", body = TaleDto),
        (status = 404, description = "The page is empty")
    )
)]
pub async fn random_tale(
    service: Arc<Service>,
    ApiQuery(query): ApiQuery<BrowseQuery>,
) -> Result<Json<TaleDto>, Problem> {
    let (view, request) = query.into_parts();
    let (index, mut page) = service
        .random_position(view, request)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(page.tales.swap_remove(index).into()))
}

/// Get a tale by identifier
#[utoipa::path(
    get,
    path = "/api/tales/{id}",
    tag = "tales",
    params(("id" = i64, Path, description = "Tale identifier")),
    responses(
        (status = 200, description = "The tale", body = TaleDto),
        (status = 400, description = "Identifier is not an integer"),
        (status = 404, description = "No tale with this identifier"),
        (status = 502, description = "Hosted database unavailable")
    )
)]
pub async fn get_tale(
    service: Arc<Service>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<TaleDto>, Problem> {
    let tale = service
        .get_tale(id)
        .await
        .map_err(|e| map_domain_error(e).with_instance(format!("/api/tales/{id}")))?;

    Ok(Json(tale.into()))
}

// ===== Nation Handlers =====

/// List distinct nations
#[utoipa::path(
    get,
    path = "/api/nations",
    tag = "tales",
    responses((status = 200, description = "Distinct nations", body = NationsResponse))
)]
pub async fn list_nations(service: Arc<Service>) -> Result<Json<NationsResponse>, Problem> {
    let items = service.list_nations().await.map_err(map_domain_error)?;
    let total = items.len();

    Ok(Json(NationsResponse { items, total }))
}

// ===== Contact Handlers =====

/// Submit a contact message
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 202, description = "Message accepted", body = ContactResponse),
        (status = 400, description = "Missing or malformed field")
    )
)]
pub async fn submit_contact(
    service: Arc<Service>,
    ApiJson(req): ApiJson<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), Problem> {
    service
        .submit_contact(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::ACCEPTED, Json(ContactResponse { submitted: true })))
}

// ===== Connectivity Handlers =====

/// Current connectivity
#[utoipa::path(
    get,
    path = "/api/connectivity",
    tag = "connectivity",
    responses((status = 200, description = "Connectivity status", body = ConnectivityDto))
)]
pub async fn get_connectivity(service: Arc<Service>) -> Json<ConnectivityDto> {
    Json(service.connectivity().into())
}

/// Pin connectivity online or offline
#[utoipa::path(
    put,
    path = "/api/connectivity",
    tag = "connectivity",
    request_body = PinConnectivityRequest,
    responses(
        (status = 200, description = "Pinned status", body = ConnectivityDto),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn pin_connectivity(
    service: Arc<Service>,
    ApiJson(req): ApiJson<PinConnectivityRequest>,
) -> Json<ConnectivityDto> {
    Json(service.pin_connectivity(req.online).into())
}

/// Hand connectivity back to the probe
#[utoipa::path(
    delete,
    path = "/api/connectivity",
    tag = "connectivity",
    responses((status = 200, description = "Released status", body = ConnectivityDto))
)]
pub async fn release_connectivity(service: Arc<Service>) -> Json<ConnectivityDto> {
    Json(service.release_connectivity().into())
}
