//! # Spacedock
//!
//! A catalog service for starships: list with filtering, sorting and
//! pagination, plus create, read, update and delete over REST.
//!
//! ## Features
//!
//! - **Typed query engine**: AND-composed optional filters, stable ascending
//!   sort by id/speed/date/rating, clamped pagination
//! - **Derived rating**: recomputed from speed, usage and production year on
//!   every relevant change, never accepted from a client
//! - **Explicit wiring**: the service takes its store as a constructor
//!   argument; swap [`storage::InMemoryShipStore`] for any [`core::ShipStore`]
//! - **Typed errors**: bad-request and not-found classes that map straight to
//!   HTTP statuses
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spacedock::prelude::*;
//!
//! let store = Arc::new(InMemoryShipStore::new());
//! let service = Arc::new(ShipService::new(store));
//! let app = build_router(service);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ErrorResponse, ShipError, ShipResult},
        model::{Ship, ShipType, compute_rating},
        query::{PageRequest, ShipFilter, ShipOrder},
        service::{ShipPayload, ShipService},
        store::ShipStore,
    };

    // === Storage ===
    pub use crate::storage::InMemoryShipStore;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{AppState, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
