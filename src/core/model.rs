//! The ship record and its derived rating

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length for the `name` and `planet` fields.
pub const TEXT_MAX_LEN: usize = 50;

/// Earliest accepted production year.
pub const MIN_PROD_YEAR: i32 = 2800;
/// Latest accepted production year.
pub const MAX_PROD_YEAR: i32 = 3019;

/// Accepted speed range, inclusive.
pub const MIN_SPEED: f64 = 0.01;
pub const MAX_SPEED: f64 = 0.99;

/// Accepted crew size range, inclusive.
pub const MIN_CREW_SIZE: i32 = 1;
pub const MAX_CREW_SIZE: i32 = 9999;

/// Fixed ship categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

/// A catalogued starship
///
/// `id` is assigned by the store on creation and never changes afterwards.
/// `rating` is derived from `speed`, `is_used` and `prod_date`; it is never
/// accepted from a client and is recomputed whenever any of its inputs change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: i64,
    pub name: String,
    pub planet: String,
    #[serde(rename = "shipType")]
    pub ship_type: ShipType,
    /// Production timestamp; epoch milliseconds on the wire
    #[serde(rename = "productionDate", with = "chrono::serde::ts_milliseconds")]
    pub prod_date: DateTime<Utc>,
    #[serde(rename = "isUsed")]
    pub is_used: bool,
    pub speed: f64,
    #[serde(rename = "crewSize")]
    pub crew_size: i32,
    pub rating: f64,
}

impl Ship {
    /// Recompute `rating` from the current `speed`, `is_used` and `prod_date`
    pub fn recompute_rating(&mut self) {
        self.rating = compute_rating(self.speed, self.is_used, self.prod_date);
    }
}

/// Compute a ship's rating
///
/// ```text
/// k = 0.5 if used else 1.0
/// rating = (80 * speed * k) / (3019 - year + 1), rounded to 2 decimals
/// ```
///
/// Rounding is half away from zero, which for the non-negative values this
/// formula produces is the same as half-up.
pub fn compute_rating(speed: f64, is_used: bool, prod_date: DateTime<Utc>) -> f64 {
    let k = if is_used { 0.5 } else { 1.0 };
    let year = prod_date.year();
    let raw = (80.0 * speed * k) / f64::from(MAX_PROD_YEAR - year + 1);
    (raw * 100.0).round() / 100.0
}
