//! Domain layer - business logic and services

pub mod connectivity;
pub mod filter;
pub mod pagination;
pub mod reader;
pub mod relay;
pub mod repository;
pub mod service;
pub mod validation;

pub use connectivity::{run_probe, Connectivity};
pub use pagination::Pager;
pub use relay::{ContactRelay, NoOpContactRelay};
pub use repository::{ReachabilityProbe, TaleRepository};
pub use service::{BrowsePagers, Service};
