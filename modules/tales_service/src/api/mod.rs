//! API layer - JSON endpoints, HTML pages and the in-process client

pub mod native;
pub mod pages;
pub mod rest;
