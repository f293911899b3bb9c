//! Ship lifecycle service
//!
//! Validates and executes create, read, update and delete, computes the
//! derived rating, and delegates list/count to the query engine. The store
//! is an explicit constructor argument; there is no ambient wiring.

use crate::core::error::{ShipError, ShipResult};
use crate::core::model::{Ship, ShipType, compute_rating};
use crate::core::query::{self, PageRequest, ShipFilter, ShipOrder};
use crate::core::store::ShipStore;
use crate::core::validation;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

/// Inbound ship fields for create and update
///
/// Everything is optional at the wire level; `create` enforces presence of
/// the required fields, `update` applies only what is present.
/// `productionDate` is epoch milliseconds, matching the record's wire form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShipPayload {
    pub name: Option<String>,
    pub planet: Option<String>,
    #[serde(rename = "shipType")]
    pub ship_type: Option<ShipType>,
    #[serde(rename = "productionDate")]
    pub prod_date: Option<i64>,
    #[serde(rename = "isUsed")]
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    #[serde(rename = "crewSize")]
    pub crew_size: Option<i32>,
}

/// The record lifecycle manager
pub struct ShipService {
    store: Arc<dyn ShipStore>,
}

impl ShipService {
    /// Create a service backed by the given store
    pub fn new(store: Arc<dyn ShipStore>) -> Self {
        Self { store }
    }

    /// List the ships matching `filter`, sorted by `order`, windowed by `page`
    pub async fn list(
        &self,
        filter: &ShipFilter,
        order: ShipOrder,
        page: PageRequest,
    ) -> ShipResult<Vec<Ship>> {
        let ships = self.store.find_all().await?;
        let (page, _) = query::query(ships, filter, order, page);
        Ok(page)
    }

    /// Count the ships matching `filter`
    pub async fn count(&self, filter: &ShipFilter) -> ShipResult<usize> {
        let ships = self.store.find_all().await?;
        Ok(query::count(&ships, filter))
    }

    /// Fetch a single ship by id
    pub async fn get(&self, id: i64) -> ShipResult<Ship> {
        validation::check_id(id)?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ShipError::NotFound { id })
    }

    /// Remove a ship by id
    pub async fn delete(&self, id: i64) -> ShipResult<()> {
        validation::check_id(id)?;
        if !self.store.exists_by_id(id).await? {
            return Err(ShipError::NotFound { id });
        }
        self.store.delete_by_id(id).await?;
        Ok(())
    }

    /// Validate the payload and persist a new ship
    ///
    /// `isUsed` defaults to false when omitted; the store assigns the id.
    pub async fn create(&self, payload: ShipPayload) -> ShipResult<Ship> {
        let name = payload.name.ok_or_else(|| validation::missing("name"))?;
        validation::check_text("name", &name)?;

        let planet = payload.planet.ok_or_else(|| validation::missing("planet"))?;
        validation::check_text("planet", &planet)?;

        let ship_type = payload
            .ship_type
            .ok_or_else(|| validation::missing("shipType"))?;

        let prod_date = payload
            .prod_date
            .ok_or_else(|| validation::missing("productionDate"))?;
        let prod_date = parse_prod_date(prod_date)?;
        validation::check_prod_date("productionDate", prod_date)?;

        let speed = payload.speed.ok_or_else(|| validation::missing("speed"))?;
        validation::check_speed("speed", speed)?;

        let crew_size = payload
            .crew_size
            .ok_or_else(|| validation::missing("crewSize"))?;
        validation::check_crew_size("crewSize", crew_size)?;

        let is_used = payload.is_used.unwrap_or(false);

        let ship = Ship {
            id: 0, // assigned by the store
            name,
            planet,
            ship_type,
            prod_date,
            is_used,
            speed,
            crew_size,
            rating: compute_rating(speed, is_used, prod_date),
        };

        Ok(self.store.save(ship).await?)
    }

    /// Apply the supplied fields to an existing ship and persist it
    ///
    /// Each present field is validated with the same rule as creation.
    /// The rating is recomputed unconditionally after all fields are
    /// applied, so it can never be persisted stale.
    pub async fn update(&self, id: i64, payload: ShipPayload) -> ShipResult<Ship> {
        validation::check_id(id)?;
        let mut ship = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ShipError::NotFound { id })?;

        if let Some(name) = payload.name {
            validation::check_text("name", &name)?;
            ship.name = name;
        }
        if let Some(planet) = payload.planet {
            validation::check_text("planet", &planet)?;
            ship.planet = planet;
        }
        if let Some(ship_type) = payload.ship_type {
            ship.ship_type = ship_type;
        }
        if let Some(millis) = payload.prod_date {
            let prod_date = parse_prod_date(millis)?;
            validation::check_prod_date("productionDate", prod_date)?;
            ship.prod_date = prod_date;
        }
        if let Some(is_used) = payload.is_used {
            ship.is_used = is_used;
        }
        if let Some(speed) = payload.speed {
            validation::check_speed("speed", speed)?;
            ship.speed = speed;
        }
        if let Some(crew_size) = payload.crew_size {
            validation::check_crew_size("crewSize", crew_size)?;
            ship.crew_size = crew_size;
        }

        ship.recompute_rating();

        Ok(self.store.save(ship).await?)
    }
}

fn parse_prod_date(millis: i64) -> ShipResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or(ShipError::InvalidField {
        field: "productionDate",
        message: format!("'{}' is not a representable timestamp", millis),
    })
}
