//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ===== Tale DTOs =====

/// Tale response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaleDto {
    /// Row identifier
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "The Clever Hare")]
    pub title: String,

    /// Body text
    pub text: String,

    /// Nation of origin
    #[schema(example = "Zimbabwe")]
    pub nation: String,

    /// Source attribution
    pub source: String,
}

/// One page of tales
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaleListResponse {
    pub items: Vec<TaleDto>,

    /// Number of items in this page
    pub total: usize,

    /// Browse view the page was built for
    #[schema(example = "home")]
    pub view: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nation: Option<String>,

    /// Effective row limit
    pub limit: usize,

    /// Served from the offline snapshot
    pub offline: bool,

    /// Whether requesting `next_limit` may reveal more tales
    pub has_more: bool,

    pub next_limit: usize,
}

/// Browse query parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BrowseQuery {
    /// `home` (default) or `explore`
    pub view: Option<String>,

    /// Case-insensitive title substring
    pub search: Option<String>,

    /// Exact nation
    pub nation: Option<String>,

    /// Row limit; defaults to the view's page size
    pub limit: Option<usize>,
}

// ===== Nation DTOs =====

/// Distinct nations for the nation filter
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NationsResponse {
    pub items: Vec<String>,
    pub total: usize,
}

// ===== Contact DTOs =====

/// Contact form submission
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    #[schema(example = "reader@example.org")]
    pub email: String,

    #[serde(default)]
    pub message: String,
}

/// Contact submission acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub submitted: bool,
}

// ===== Connectivity DTOs =====

/// Online/offline status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConnectivityDto {
    pub online: bool,

    /// Manually pinned; the probe does not change a pinned state
    pub pinned: bool,

    pub changed_at: chrono::DateTime<chrono::Utc>,
}

/// Pin connectivity request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PinConnectivityRequest {
    pub online: bool,
}

// Note: Conversion implementations live in mapper.rs
