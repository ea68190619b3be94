//! Infrastructure layer - adapters for external services

pub mod relay;
pub mod storage;
