//! Contract models for the tales service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - wire shapes live in the REST DTOs and the storage rows.

use chrono::{DateTime, Utc};

/// A single folktale as stored in the hosted `tales` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tale {
    /// Row identifier, unique within the table
    pub id: i64,
    pub title: String,
    /// Body text
    pub text: String,
    /// Nation of origin
    pub nation: String,
    /// Source attribution
    pub source: String,
}

/// Page views that browse the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseView {
    #[default]
    Home,
    Explore,
}

impl BrowseView {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Explore => "explore",
        }
    }

    /// Parse a view name, falling back to `Home` for anything unknown
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "explore" => Self::Explore,
            _ => Self::Home,
        }
    }

    /// Path of the page rendering this view
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Explore => "/explore",
        }
    }
}

/// Raw browse parameters as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseRequest {
    pub search: Option<String>,
    pub nation: Option<String>,
    pub limit: Option<usize>,
}

/// Normalized query applied to a data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaleQuery {
    /// Case-insensitive title substring
    pub search: Option<String>,
    /// Exact nation match
    pub nation: Option<String>,
    /// Maximum number of rows
    pub limit: usize,
}

impl TaleQuery {
    pub fn new(limit: usize) -> Self {
        Self {
            search: None,
            nation: None,
            limit,
        }
    }

    /// Set the title search; blank text clears the predicate
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = non_blank(search);
        self
    }

    /// Set the nation filter; blank text clears the predicate
    pub fn with_nation(mut self, nation: Option<&str>) -> Self {
        self.nation = non_blank(nation);
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Which data path served a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Live hosted table
    Hosted,
    /// Offline snapshot file
    Snapshot,
}

/// One page of browse results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalePage {
    pub view: BrowseView,
    pub tales: Vec<Tale>,
    /// Effective query after normalization
    pub query: TaleQuery,
    pub source: DataSource,
    /// Whether a "View More" step is offered
    pub has_more: bool,
    /// Limit to request for the next step
    pub next_limit: usize,
}

impl TalePage {
    pub fn is_offline(&self) -> bool {
        self.source == DataSource::Snapshot
    }
}

/// Position of the full-screen reader inside a loaded page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderPosition {
    pub index: usize,
    pub len: usize,
}

/// Reader view: the tale at a position plus the page it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderPage {
    pub tale: Tale,
    pub position: ReaderPosition,
    pub page: TalePage,
}

/// Message submitted through the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Current online/offline state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityStatus {
    pub online: bool,
    /// Manual override; the probe leaves a pinned state alone
    pub pinned: bool,
    pub changed_at: DateTime<Utc>,
}
