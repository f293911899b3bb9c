//! Field validators shared by create and update
//!
//! Each validator checks one field against its catalog rule and reports a
//! bad-request class error naming the field.

use crate::core::error::{ShipError, ShipResult};
use crate::core::model::{
    MAX_CREW_SIZE, MAX_PROD_YEAR, MAX_SPEED, MIN_CREW_SIZE, MIN_PROD_YEAR, MIN_SPEED, TEXT_MAX_LEN,
};
use chrono::{DateTime, Datelike, Utc};

/// Validate a text field: non-empty, at most 50 characters
pub fn check_text(field: &'static str, value: &str) -> ShipResult<()> {
    if value.is_empty() {
        return Err(ShipError::InvalidField {
            field,
            message: "must not be empty".to_string(),
        });
    }
    if value.chars().count() > TEXT_MAX_LEN {
        return Err(ShipError::InvalidField {
            field,
            message: format!("must not exceed {} characters", TEXT_MAX_LEN),
        });
    }
    Ok(())
}

/// Validate a production date: calendar year in [2800, 3019]
pub fn check_prod_date(field: &'static str, value: DateTime<Utc>) -> ShipResult<()> {
    let year = value.year();
    if !(MIN_PROD_YEAR..=MAX_PROD_YEAR).contains(&year) {
        return Err(ShipError::InvalidField {
            field,
            message: format!(
                "production year must be between {} and {} (got {})",
                MIN_PROD_YEAR, MAX_PROD_YEAR, year
            ),
        });
    }
    Ok(())
}

/// Validate a speed: in [0.01, 0.99]
pub fn check_speed(field: &'static str, value: f64) -> ShipResult<()> {
    if !(MIN_SPEED..=MAX_SPEED).contains(&value) {
        return Err(ShipError::InvalidField {
            field,
            message: format!(
                "must be between {} and {} (got {})",
                MIN_SPEED, MAX_SPEED, value
            ),
        });
    }
    Ok(())
}

/// Validate a crew size: in [1, 9999]
pub fn check_crew_size(field: &'static str, value: i32) -> ShipResult<()> {
    if !(MIN_CREW_SIZE..=MAX_CREW_SIZE).contains(&value) {
        return Err(ShipError::InvalidField {
            field,
            message: format!(
                "must be between {} and {} (got {})",
                MIN_CREW_SIZE, MAX_CREW_SIZE, value
            ),
        });
    }
    Ok(())
}

/// Validate an id's shape; existence is checked against the store separately
pub fn check_id(id: i64) -> ShipResult<()> {
    if id <= 0 {
        return Err(ShipError::InvalidId { id });
    }
    Ok(())
}

/// A required field that the payload did not carry
pub fn missing(field: &'static str) -> ShipError {
    ShipError::InvalidField {
        field,
        message: "is required".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_check_text_rejects_empty() {
        assert!(check_text("name", "").is_err());
    }

    #[test]
    fn test_check_text_rejects_51_chars() {
        let long = "x".repeat(51);
        assert!(check_text("name", &long).is_err());
        assert!(check_text("name", &"x".repeat(50)).is_ok());
    }

    #[test]
    fn test_check_prod_date_bounds() {
        let year = |y| Utc.with_ymd_and_hms(y, 6, 1, 0, 0, 0).unwrap();
        assert!(check_prod_date("productionDate", year(2799)).is_err());
        assert!(check_prod_date("productionDate", year(2800)).is_ok());
        assert!(check_prod_date("productionDate", year(3019)).is_ok());
        assert!(check_prod_date("productionDate", year(3020)).is_err());
    }

    #[test]
    fn test_check_speed_bounds() {
        assert!(check_speed("speed", 0.0).is_err());
        assert!(check_speed("speed", 0.01).is_ok());
        assert!(check_speed("speed", 0.99).is_ok());
        assert!(check_speed("speed", 1.0).is_err());
    }

    #[test]
    fn test_check_crew_size_bounds() {
        assert!(check_crew_size("crewSize", 0).is_err());
        assert!(check_crew_size("crewSize", 1).is_ok());
        assert!(check_crew_size("crewSize", 9999).is_ok());
        assert!(check_crew_size("crewSize", 10_000).is_err());
    }

    #[test]
    fn test_check_id_rejects_non_positive() {
        assert!(check_id(0).is_err());
        assert!(check_id(-5).is_err());
        assert!(check_id(1).is_ok());
    }
}
