//! Domain service - business logic orchestration

use super::connectivity::Connectivity;
use super::pagination::Pager;
use super::relay::ContactRelay;
use super::repository::TaleRepository;
use super::validation::{validate_contact, validate_search};
use crate::contract::{
    BrowseRequest, BrowseView, ConnectivityStatus, ContactMessage, DataSource, ReaderPage,
    ReaderPosition, Tale, TalePage, TaleQuery, TalesError,
};
use rand::Rng;
use std::sync::Arc;

/// Page sizes per browse view
#[derive(Debug, Clone, Copy)]
pub struct BrowsePagers {
    pub home: Pager,
    pub explore: Pager,
}

impl Default for BrowsePagers {
    fn default() -> Self {
        Self {
            home: Pager::new(6, 500),
            explore: Pager::new(12, 500),
        }
    }
}

/// Domain service for browsing and reading tales
pub struct Service {
    hosted: Arc<dyn TaleRepository>,
    snapshot: Arc<dyn TaleRepository>,
    relay: Arc<dyn ContactRelay>,
    connectivity: Arc<Connectivity>,
    pagers: BrowsePagers,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        hosted: Arc<dyn TaleRepository>,
        snapshot: Arc<dyn TaleRepository>,
        relay: Arc<dyn ContactRelay>,
        connectivity: Arc<Connectivity>,
        pagers: BrowsePagers,
    ) -> Self {
        Self {
            hosted,
            snapshot,
            relay,
            connectivity,
            pagers,
        }
    }

    pub fn pager(&self, view: BrowseView) -> Pager {
        match view {
            BrowseView::Home => self.pagers.home,
            BrowseView::Explore => self.pagers.explore,
        }
    }

    fn active_source(&self) -> (DataSource, &Arc<dyn TaleRepository>) {
        if self.connectivity.is_offline() {
            (DataSource::Snapshot, &self.snapshot)
        } else {
            (DataSource::Hosted, &self.hosted)
        }
    }

    // ===== Catalog Operations =====

    /// Browse one page of tales
    ///
    /// A failing data source yields an empty page; callers cannot tell it
    /// apart from "no matching rows".
    pub async fn browse(
        &self,
        view: BrowseView,
        request: BrowseRequest,
    ) -> Result<TalePage, TalesError> {
        validate_search(request.search.as_deref())?;

        let pager = self.pager(view);
        let limit = pager.normalize(request.limit);
        let query = TaleQuery::new(limit)
            .with_search(request.search.as_deref())
            .with_nation(request.nation.as_deref());

        let (source, repo) = self.active_source();
        let tales = match repo.find(&query).await {
            Ok(tales) => tales,
            Err(e) => {
                tracing::warn!(
                    error = %format!("{e:#}"),
                    source = ?source,
                    "Tale query failed; rendering empty result"
                );
                Vec::new()
            }
        };

        let offline = source == DataSource::Snapshot;
        Ok(TalePage {
            view,
            has_more: pager.has_more(tales.len(), limit, offline),
            next_limit: pager.load_more(limit),
            tales,
            query,
            source,
        })
    }

    /// Distinct nations from the active data source; empty on failure
    pub async fn list_nations(&self) -> Result<Vec<String>, TalesError> {
        let (source, repo) = self.active_source();
        match repo.list_nations().await {
            Ok(nations) => Ok(nations),
            Err(e) => {
                tracing::warn!(
                    error = %format!("{e:#}"),
                    source = ?source,
                    "Nation query failed; offering no nation filter"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Get a tale by identifier from the active data source
    pub async fn get_tale(&self, id: i64) -> Result<Tale, TalesError> {
        let (_, repo) = self.active_source();
        repo.find_by_id(id)
            .await
            .map_err(|e| TalesError::Upstream {
                message: format!("{e:#}"),
            })?
            .ok_or_else(|| TalesError::not_found("tale", id))
    }

    /// Tale at `position` of the page `request` describes
    pub async fn read(
        &self,
        view: BrowseView,
        request: BrowseRequest,
        position: usize,
    ) -> Result<ReaderPage, TalesError> {
        let page = self.browse(view, request).await?;
        let position = ReaderPosition::open(position, page.tales.len())
            .ok_or_else(|| TalesError::not_found("position", position))?;
        let tale = page.tales[position.index].clone();
        Ok(ReaderPage {
            tale,
            position,
            page,
        })
    }

    /// Uniformly random position within the page `request` describes
    pub async fn random_position(
        &self,
        view: BrowseView,
        request: BrowseRequest,
    ) -> Result<(usize, TalePage), TalesError> {
        let page = self.browse(view, request).await?;
        if page.tales.is_empty() {
            return Err(TalesError::not_found("tale", "random"));
        }
        let index = rand::rng().random_range(0..page.tales.len());
        Ok((index, page))
    }

    // ===== Contact =====

    /// Validate and relay a contact message
    ///
    /// Relay failures are logged and otherwise ignored.
    pub async fn submit_contact(&self, message: ContactMessage) -> Result<(), TalesError> {
        let message = validate_contact(message)?;
        match self.relay.submit(&message).await {
            Ok(()) => tracing::info!(email = %message.email, "Contact message relayed"),
            Err(e) => tracing::warn!(
                error = %format!("{e:#}"),
                email = %message.email,
                "Contact relay failed"
            ),
        }
        Ok(())
    }

    // ===== Connectivity =====

    pub fn connectivity(&self) -> ConnectivityStatus {
        self.connectivity.status()
    }

    pub fn pin_connectivity(&self, online: bool) -> ConnectivityStatus {
        self.connectivity.pin(online);
        self.connectivity.status()
    }

    pub fn release_connectivity(&self) -> ConnectivityStatus {
        self.connectivity.release();
        self.connectivity.status()
    }

    // ===== Snapshot Export =====

    /// First `count` rows of the hosted table, regardless of connectivity
    pub async fn export_rows(&self, count: usize) -> Result<Vec<Tale>, TalesError> {
        if count == 0 {
            return Err(TalesError::validation("export count must be positive"));
        }
        self.hosted
            .find(&TaleQuery::new(count))
            .await
            .map_err(|e| TalesError::Upstream {
                message: format!("{e:#}"),
            })
    }
}
