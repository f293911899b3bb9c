//! REST handlers for the ship catalog
//!
//! The transport layer decodes inbound query/path/body parameters into the
//! typed criteria and payloads the service expects and lets [`ShipError`]
//! encode failures back to the wire.

use crate::core::error::ShipResult;
use crate::core::model::{Ship, ShipType};
use crate::core::query::{PageRequest, ShipFilter, ShipOrder};
use crate::core::service::{ShipPayload, ShipService};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use std::sync::Arc;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub ships: Arc<ShipService>,
}

/// Query parameters for the list and count endpoints
///
/// One flat struct rather than nested extraction; every parameter is
/// optional and the count endpoint simply ignores order and paging.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipQueryParams {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub order: Option<ShipOrder>,
    pub page_number: Option<usize>,
    pub page_size: Option<usize>,
}

impl ShipQueryParams {
    fn filter(&self) -> ShipFilter {
        ShipFilter {
            name: self.name.clone(),
            planet: self.planet.clone(),
            ship_type: self.ship_type,
            after: self.after,
            before: self.before,
            is_used: self.is_used,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            min_crew_size: self.min_crew_size,
            max_crew_size: self.max_crew_size,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        }
    }

    fn page(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.page_number.unwrap_or(defaults.page_number),
            self.page_size.unwrap_or(defaults.page_size),
        )
    }
}

pub async fn list_ships(
    State(state): State<AppState>,
    Query(params): Query<ShipQueryParams>,
) -> ShipResult<Json<Vec<Ship>>> {
    let ships = state
        .ships
        .list(
            &params.filter(),
            params.order.unwrap_or_default(),
            params.page(),
        )
        .await?;
    Ok(Json(ships))
}

pub async fn count_ships(
    State(state): State<AppState>,
    Query(params): Query<ShipQueryParams>,
) -> ShipResult<Json<usize>> {
    let count = state.ships.count(&params.filter()).await?;
    Ok(Json(count))
}

pub async fn get_ship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ShipResult<Json<Ship>> {
    let ship = state.ships.get(id).await?;
    Ok(Json(ship))
}

pub async fn create_ship(
    State(state): State<AppState>,
    Json(payload): Json<ShipPayload>,
) -> ShipResult<Json<Ship>> {
    let ship = state.ships.create(payload).await?;
    Ok(Json(ship))
}

pub async fn update_ship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ShipPayload>,
) -> ShipResult<Json<Ship>> {
    let ship = state.ships.update(id, payload).await?;
    Ok(Json(ship))
}

pub async fn delete_ship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ShipResult<StatusCode> {
    state.ships.delete(id).await?;
    Ok(StatusCode::OK)
}
