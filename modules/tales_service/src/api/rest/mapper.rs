//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

// ===== Tale conversions =====

impl From<contract::Tale> for TaleDto {
    fn from(tale: contract::Tale) -> Self {
        Self {
            id: tale.id,
            title: tale.title,
            text: tale.text,
            nation: tale.nation,
            source: tale.source,
        }
    }
}

impl From<contract::TalePage> for TaleListResponse {
    fn from(page: contract::TalePage) -> Self {
        let offline = page.is_offline();
        let items: Vec<TaleDto> = page.tales.into_iter().map(Into::into).collect();
        Self {
            total: items.len(),
            items,
            view: page.view.as_str().to_string(),
            search: page.query.search,
            nation: page.query.nation,
            limit: page.query.limit,
            offline,
            has_more: page.has_more,
            next_limit: page.next_limit,
        }
    }
}

// ===== Browse query conversions =====

impl BrowseQuery {
    /// Split into the view and the raw browse request
    pub fn into_parts(self) -> (contract::BrowseView, contract::BrowseRequest) {
        let view = self
            .view
            .as_deref()
            .map(contract::BrowseView::parse)
            .unwrap_or_default();
        (
            view,
            contract::BrowseRequest {
                search: self.search,
                nation: self.nation,
                limit: self.limit,
            },
        )
    }
}

// ===== Contact conversions =====

impl From<ContactRequest> for contract::ContactMessage {
    fn from(req: ContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            message: req.message,
        }
    }
}

// ===== Connectivity conversions =====

impl From<contract::ConnectivityStatus> for ConnectivityDto {
    fn from(status: contract::ConnectivityStatus) -> Self {
        Self {
            online: status.online,
            pinned: status.pinned,
            changed_at: status.changed_at,
        }
    }
}
