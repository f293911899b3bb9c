//! Store trait for the ship catalog
//!
//! The service is agnostic to the underlying storage mechanism; any backend
//! that can list, look up, save and delete ships by id can sit behind it.

use crate::core::model::Ship;
use anyhow::Result;
use async_trait::async_trait;

/// Storage boundary for ship records
///
/// `save` is insert-or-update: a ship with `id == 0` is treated as new and
/// the store assigns the next id; any other id overwrites the existing
/// record.
#[async_trait]
pub trait ShipStore: Send + Sync {
    /// List every ship in the catalog
    async fn find_all(&self) -> Result<Vec<Ship>>;

    /// Look up a ship by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>>;

    /// Check whether a ship with this id exists
    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Insert a new ship (id assigned) or overwrite an existing one
    async fn save(&self, ship: Ship) -> Result<Ship>;

    /// Remove a ship by id
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}
