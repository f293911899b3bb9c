//! Filter, sort and page over a snapshot of the catalog
//!
//! Pure functions of the record set and the criteria; no store access and no
//! side effects. Filters compose with logical AND, sorting happens before
//! paging, and the page clamp never produces an out-of-range slice.

use crate::core::model::{Ship, ShipType};
use serde::{Deserialize, Serialize};

/// Optional filter criteria for list and count queries
///
/// Every field is optional; an absent field leaves that dimension
/// unconstrained. `after`/`before` are epoch milliseconds and compare
/// strictly against the production date.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipFilter {
    /// Case-insensitive substring of the ship name
    pub name: Option<String>,
    /// Case-insensitive substring of the planet name
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
}

impl ShipFilter {
    /// True when the ship satisfies every supplied criterion
    pub fn matches(&self, ship: &Ship) -> bool {
        if let Some(name) = &self.name
            && !contains_ignore_case(&ship.name, name)
        {
            return false;
        }
        if let Some(planet) = &self.planet
            && !contains_ignore_case(&ship.planet, planet)
        {
            return false;
        }
        if let Some(ship_type) = self.ship_type
            && ship.ship_type != ship_type
        {
            return false;
        }
        let produced = ship.prod_date.timestamp_millis();
        if let Some(after) = self.after
            && produced <= after
        {
            return false;
        }
        if let Some(before) = self.before
            && produced >= before
        {
            return false;
        }
        if let Some(is_used) = self.is_used
            && ship.is_used != is_used
        {
            return false;
        }
        if let Some(min) = self.min_speed
            && ship.speed < min
        {
            return false;
        }
        if let Some(max) = self.max_speed
            && ship.speed > max
        {
            return false;
        }
        if let Some(min) = self.min_crew_size
            && ship.crew_size < min
        {
            return false;
        }
        if let Some(max) = self.max_crew_size
            && ship.crew_size > max
        {
            return false;
        }
        if let Some(min) = self.min_rating
            && ship.rating < min
        {
            return false;
        }
        if let Some(max) = self.max_rating
            && ship.rating > max
        {
            return false;
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Sort key for list queries; always ascending, always stable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipOrder {
    #[default]
    Id,
    Speed,
    Date,
    Rating,
}

impl ShipOrder {
    /// Sort the ships in place by this key
    pub fn sort(self, ships: &mut [Ship]) {
        match self {
            ShipOrder::Id => ships.sort_by_key(|s| s.id),
            ShipOrder::Speed => ships.sort_by(|a, b| a.speed.total_cmp(&b.speed)),
            ShipOrder::Date => ships.sort_by_key(|s| s.prod_date),
            ShipOrder::Rating => ships.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        }
    }
}

/// Pagination window for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: 3,
        }
    }
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size,
        }
    }
}

/// Extract one page from an already-sorted set
///
/// A page number past the end yields the trailing page rather than an error.
/// The clamp order matters for the last partial page: compute `start`, clamp
/// it against the set size, compute `end`, then re-clamp `start` against
/// `end`.
pub fn paginate<T>(items: Vec<T>, page: PageRequest) -> Vec<T> {
    let total = items.len();
    let mut start = page.page_number.saturating_mul(page.page_size);
    if start > total {
        start = total.saturating_sub(page.page_size);
    }
    let end = start.saturating_add(page.page_size).min(total);
    start = start.min(end);

    items
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect()
}

/// Filter, sort and page a snapshot of the catalog
///
/// Returns the requested page together with the total number of ships that
/// matched the filter (before paging).
pub fn query(
    ships: Vec<Ship>,
    filter: &ShipFilter,
    order: ShipOrder,
    page: PageRequest,
) -> (Vec<Ship>, usize) {
    let mut matched: Vec<Ship> = ships.into_iter().filter(|s| filter.matches(s)).collect();
    let total = matched.len();
    order.sort(&mut matched);
    (paginate(matched, page), total)
}

/// Count ships matching the filter; no sorting or paging involved
pub fn count(ships: &[Ship], filter: &ShipFilter) -> usize {
    ships.iter().filter(|s| filter.matches(s)).count()
}
