//! HTTP transport for the catalog service

pub mod rest;
pub mod router;

pub use rest::AppState;
pub use router::build_router;
