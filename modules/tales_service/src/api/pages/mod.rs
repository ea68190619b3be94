//! Server-rendered HTML pages

pub mod assets;
pub mod layout;
pub mod views;

use crate::api::rest::error::map_domain_error;
use crate::contract::{BrowseRequest, BrowseView, ContactMessage, TalesError};
use crate::domain::Service;
use crate::infra::storage::{SnapshotError, SnapshotTaleRepository};
use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Extension, Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Browse parameters as sent by page links and the filter form
///
/// `limit` stays a string so a blank or garbled value falls back to one page
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub view: Option<String>,
    pub search: Option<String>,
    pub nation: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    fn view(&self) -> BrowseView {
        self.view
            .as_deref()
            .map(BrowseView::parse)
            .unwrap_or_default()
    }

    fn into_request(self) -> BrowseRequest {
        BrowseRequest {
            search: self.search,
            nation: self.nation,
            limit: self.limit.and_then(|l| l.trim().parse().ok()),
        }
    }
}

/// Contact form fields
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Register the HTML pages, static assets and the snapshot file
pub fn register_pages(
    router: Router,
    service: Arc<Service>,
    snapshot: Arc<SnapshotTaleRepository>,
) -> Router {
    let pages = Router::new()
        .route("/", get(home_handler))
        .route("/explore", get(explore_handler))
        .route("/about", get(about_handler))
        .route("/contact", get(contact_form_handler).post(contact_submit_handler))
        .route("/read/{position}", get(reader_handler))
        .route("/random", get(random_handler))
        .route("/tales/{id}", get(tale_handler))
        .route("/data/offlineTales.json", get(snapshot_file_handler))
        .route("/assets/{*path}", get(assets::asset_handler))
        .route("/healthz", get(|| async { "ok" }))
        .layer(Extension(service))
        .layer(Extension(snapshot));

    router.merge(pages)
}

fn error_response(error: TalesError) -> Response {
    let problem = map_domain_error(error);
    let html = views::error_page(&problem.title, problem.detail.as_deref().unwrap_or_default());
    (problem.status_code(), Html(html)).into_response()
}

async fn catalog(service: &Service, view: BrowseView, query: PageQuery) -> Response {
    let (page, nations) = tokio::join!(
        service.browse(view, query.into_request()),
        service.list_nations()
    );
    match page {
        Ok(page) => Html(views::catalog(&page, &nations.unwrap_or_default())).into_response(),
        Err(e) => error_response(e),
    }
}

async fn home_handler(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<PageQuery>,
) -> Response {
    catalog(&service, BrowseView::Home, query).await
}

async fn explore_handler(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<PageQuery>,
) -> Response {
    catalog(&service, BrowseView::Explore, query).await
}

async fn reader_handler(
    Extension(service): Extension<Arc<Service>>,
    Path(position): Path<usize>,
    Query(query): Query<PageQuery>,
) -> Response {
    let view = query.view();
    match service.read(view, query.into_request(), position).await {
        Ok(reader) => Html(views::reader(&reader)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn random_handler(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<PageQuery>,
) -> Response {
    let view = query.view();
    match service.random_position(view, query.into_request()).await {
        Ok((index, page)) => {
            let qs = layout::browse_query(Some(view), &page.query, page.query.limit);
            Redirect::to(&format!("/read/{index}?{qs}")).into_response()
        }
        Err(TalesError::NotFound { .. }) => Redirect::to(view.path()).into_response(),
        Err(e) => error_response(e),
    }
}

async fn tale_handler(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Response {
    match service.get_tale(id).await {
        Ok(tale) => Html(views::single_tale(&tale)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn about_handler() -> Html<String> {
    Html(views::about())
}

async fn contact_form_handler() -> Html<String> {
    Html(views::contact_form(None, None))
}

async fn contact_submit_handler(
    Extension(service): Extension<Arc<Service>>,
    Form(form): Form<ContactForm>,
) -> Response {
    let message = ContactMessage {
        name: form.name,
        email: form.email,
        message: form.message,
    };
    match service.submit_contact(message.clone()).await {
        Ok(()) => Html(views::contact_thanks()).into_response(),
        Err(TalesError::Validation { message: reason }) => (
            StatusCode::BAD_REQUEST,
            Html(views::contact_form(Some(&message), Some(&reason))),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

async fn snapshot_file_handler(
    Extension(snapshot): Extension<Arc<SnapshotTaleRepository>>,
) -> Response {
    match snapshot.read_raw().await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(SnapshotError::Missing { .. }) => {
            (StatusCode::NOT_FOUND, "offline snapshot not exported").into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serve offline snapshot");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
