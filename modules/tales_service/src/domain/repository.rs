//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage (hosted table and offline snapshot).

use crate::contract::{Tale, TaleQuery};
use anyhow::Result;
use async_trait::async_trait;

/// Read-only source of tales
#[async_trait]
pub trait TaleRepository: Send + Sync {
    /// Tales matching the query, at most `query.limit`, in id order
    async fn find(&self, query: &TaleQuery) -> Result<Vec<Tale>>;

    /// Find a tale by identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Tale>>;

    /// Distinct nations in first-seen order
    async fn list_nations(&self) -> Result<Vec<String>>;
}

/// Reachability check used by the connectivity probe
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// Succeeds when the hosted database answers
    async fn ping(&self) -> Result<()>;
}
