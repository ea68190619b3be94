//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the tales service.
//! NO HTTP - direct function calls.

use super::{
    error::TalesError,
    model::{BrowseRequest, BrowseView, ConnectivityStatus, ContactMessage, Tale, TalePage},
};
use async_trait::async_trait;

/// Tales service API for inter-module communication
#[async_trait]
pub trait TalesApi: Send + Sync {
    // ===== Catalog Operations =====

    /// Browse one page of tales for a view
    async fn browse(&self, view: BrowseView, request: BrowseRequest)
        -> Result<TalePage, TalesError>;

    /// Distinct nations offered by the nation filter
    async fn list_nations(&self) -> Result<Vec<String>, TalesError>;

    /// Get a tale by identifier
    async fn get_tale(&self, id: i64) -> Result<Tale, TalesError>;

    // ===== Contact =====

    /// Submit a contact message to the relay
    async fn submit_contact(&self, message: ContactMessage) -> Result<(), TalesError>;

    // ===== Connectivity =====

    /// Current online/offline status
    fn connectivity(&self) -> ConnectivityStatus;
}
