//! Tales Service Module
//!
//! Folktale catalog served from a hosted PostgREST table, with an offline
//! snapshot file as fallback while the hosted database is unreachable.

// Public exports
pub mod contract;
pub use contract::{
    client::TalesApi, error::TalesError, BrowseRequest, BrowseView, ConnectivityStatus,
    ContactMessage, DataSource, ReaderPage, ReaderPosition, Tale, TalePage, TaleQuery,
};

pub mod module;
pub use config::Config;
pub use module::TalesServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
