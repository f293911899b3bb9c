//! In-memory implementation of ShipStore for testing and development

use crate::core::model::Ship;
use crate::core::store::ShipStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory ship store
///
/// Uses RwLock for thread-safe access and a monotonic counter for id
/// assignment. Ids start at 1; 0 marks an unsaved ship.
#[derive(Clone)]
pub struct InMemoryShipStore {
    ships: Arc<RwLock<HashMap<i64, Ship>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryShipStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self {
            ships: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryShipStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShipStore for InMemoryShipStore {
    async fn find_all(&self) -> Result<Vec<Ship>> {
        let ships = self
            .ships
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(ships.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>> {
        let ships = self
            .ships
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(ships.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let ships = self
            .ships
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(ships.contains_key(&id))
    }

    async fn save(&self, mut ship: Ship) -> Result<Ship> {
        let mut ships = self
            .ships
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if ship.id == 0 {
            ship.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        }
        ships.insert(ship.id, ship.clone());

        Ok(ship)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut ships = self
            .ships
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        ships.remove(&id);

        Ok(())
    }
}
