//! Core catalog logic: model, validation, query engine and lifecycle service

pub mod error;
pub mod model;
pub mod query;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{ErrorResponse, ShipError, ShipResult};
pub use model::{Ship, ShipType, compute_rating};
pub use query::{PageRequest, ShipFilter, ShipOrder};
pub use service::{ShipPayload, ShipService};
pub use store::ShipStore;
