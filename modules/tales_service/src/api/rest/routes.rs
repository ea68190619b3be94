//! Route registration and OpenAPI document

use super::{
    dto::*,
    error::Problem,
    extract::{ApiJson, ApiPath, ApiQuery},
    handlers,
};
use crate::domain::Service;
use axum::{
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI description of the JSON API
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_tales,
        handlers::random_tale,
        handlers::get_tale,
        handlers::list_nations,
        handlers::submit_contact,
        handlers::get_connectivity,
        handlers::pin_connectivity,
        handlers::release_connectivity,
    ),
    components(schemas(
        TaleDto,
        TaleListResponse,
        NationsResponse,
        ContactRequest,
        ContactResponse,
        ConnectivityDto,
        PinConnectivityRequest,
    )),
    tags(
        (name = "tales", description = "Folktale catalog"),
        (name = "contact", description = "Contact form relay"),
        (name = "connectivity", description = "Online/offline data path"),
    )
)]
pub struct ApiDoc;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let api = Router::new()
        // Tale endpoints
        .route("/api/tales", get(list_tales_handler))
        .route("/api/tales/random", get(random_tale_handler))
        .route("/api/tales/{id}", get(get_tale_handler))
        .route("/api/nations", get(list_nations_handler))
        // Contact endpoint
        .route("/api/contact", post(submit_contact_handler))
        // Connectivity endpoints
        .route(
            "/api/connectivity",
            get(get_connectivity_handler)
                .put(pin_connectivity_handler)
                .delete(release_connectivity_handler),
        )
        .route("/api/openapi.json", get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router.merge(api))
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_tales_handler(
    Extension(service): Extension<Arc<Service>>,
    query: ApiQuery<BrowseQuery>,
) -> Result<Json<TaleListResponse>, Problem> {
    handlers::list_tales(service, query).await
}

async fn random_tale_handler(
    Extension(service): Extension<Arc<Service>>,
    query: ApiQuery<BrowseQuery>,
) -> Result<Json<TaleDto>, Problem> {
    handlers::random_tale(service, query).await
}

async fn get_tale_handler(
    Extension(service): Extension<Arc<Service>>,
    path: ApiPath<i64>,
) -> Result<Json<TaleDto>, Problem> {
    handlers::get_tale(service, path).await
}

async fn list_nations_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<NationsResponse>, Problem> {
    handlers::list_nations(service).await
}

async fn submit_contact_handler(
    Extension(service): Extension<Arc<Service>>,
    json: ApiJson<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), Problem> {
    handlers::submit_contact(service, json).await
}

async fn get_connectivity_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Json<ConnectivityDto> {
    handlers::get_connectivity(service).await
}

async fn pin_connectivity_handler(
    Extension(service): Extension<Arc<Service>>,
    json: ApiJson<PinConnectivityRequest>,
) -> Json<ConnectivityDto> {
    handlers::pin_connectivity(service, json).await
}

async fn release_connectivity_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Json<ConnectivityDto> {
    handlers::release_connectivity(service).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
