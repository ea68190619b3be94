//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    BrowseRequest, BrowseView, ConnectivityStatus, ContactMessage, Tale, TalePage, TalesApi,
    TalesError,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TalesApi for NativeClient {
    async fn browse(
        &self,
        view: BrowseView,
        request: BrowseRequest,
    ) -> Result<TalePage, TalesError> {
        self.service.browse(view, request).await
    }

    async fn list_nations(&self) -> Result<Vec<String>, TalesError> {
        self.service.list_nations().await
    }

    async fn get_tale(&self, id: i64) -> Result<Tale, TalesError> {
        self.service.get_tale(id).await
    }

    async fn submit_contact(&self, message: ContactMessage) -> Result<(), TalesError> {
        self.service.submit_contact(message).await
    }

    fn connectivity(&self) -> ConnectivityStatus {
        self.service.connectivity()
    }
}
