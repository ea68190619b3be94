//! Storage layer - hosted table and offline snapshot

pub mod hosted;
pub mod mapper;
pub mod row;
pub mod snapshot;

pub use hosted::HostedTaleRepository;
pub use snapshot::{write_snapshot, SnapshotError, SnapshotTaleRepository};
