//! Sensor readings — raw form input and its validated, typed counterpart.
//!
//! A `ReadingSet` is built fresh per request from the current input state
//! and is immutable once constructed. Validation happens before any network
//! call: the first field that fails to parse aborts the run.

use crate::error::RecommendError;
use serde::{Deserialize, Serialize};

/// Raw field strings as supplied by the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawReadings {
    /// Room temperature in °C.
    pub temperature: String,
    /// Number of people in the room.
    pub occupancy: String,
    /// Current power draw in watts.
    pub power: String,
    /// Room floor area in m² — optional; a blank field counts as absent.
    pub room_area: Option<String>,
    /// Whether the request falls inside peak tariff hours.
    pub peak_hours: bool,
}

/// Validated, bounded sensor readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingSet {
    pub temperature: i32,
    pub occupancy: u32,
    pub power_watts: u32,
    pub room_area_sq_m: Option<f64>,
    pub peak_hours: bool,
}

impl RawReadings {
    /// Parse every field into its declared type.
    ///
    /// Fields are checked in a fixed order — temperature, occupancy, power,
    /// room area — and the first offending field is named in the error.
    /// Occupancy and power are unsigned, so negative input fails the parse.
    /// Room area additionally rejects non-finite floats.
    pub fn validate(&self) -> Result<ReadingSet, RecommendError> {
        let temperature = self
            .temperature
            .trim()
            .parse::<i32>()
            .map_err(|_| RecommendError::not_a_number("temperature"))?;

        let occupancy = self
            .occupancy
            .trim()
            .parse::<u32>()
            .map_err(|_| RecommendError::not_a_number("occupancy"))?;

        let power_watts = self
            .power
            .trim()
            .parse::<u32>()
            .map_err(|_| RecommendError::not_a_number("power"))?;

        let room_area_sq_m = match self.room_area.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let area = raw
                    .parse::<f64>()
                    .map_err(|_| RecommendError::not_a_number("room area"))?;
                if !area.is_finite() {
                    return Err(RecommendError::not_a_number("room area"));
                }
                Some(area)
            }
        };

        Ok(ReadingSet {
            temperature,
            occupancy,
            power_watts,
            room_area_sq_m,
            peak_hours: self.peak_hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(temp: &str, occ: &str, power: &str, area: Option<&str>) -> RawReadings {
        RawReadings {
            temperature: temp.into(),
            occupancy: occ.into(),
            power: power.into(),
            room_area: area.map(String::from),
            peak_hours: false,
        }
    }

    #[test]
    fn valid_fields_parse_to_equal_values() {
        let set = raw("22", "3", "500", Some("25.5")).validate().unwrap();
        assert_eq!(set.temperature, 22);
        assert_eq!(set.occupancy, 3);
        assert_eq!(set.power_watts, 500);
        assert_eq!(set.room_area_sq_m, Some(25.5));
        assert!(!set.peak_hours);
    }

    #[test]
    fn negative_temperature_is_valid() {
        let set = raw("-5", "0", "0", None).validate().unwrap();
        assert_eq!(set.temperature, -5);
    }

    #[test]
    fn non_numeric_temperature_names_the_field() {
        let err = raw("abc", "3", "500", None).validate().unwrap_err();
        assert_eq!(err.to_string(), "temperature: not a number");
    }

    #[test]
    fn fields_are_checked_in_fixed_order() {
        // Both occupancy and power are bad; occupancy comes first.
        let err = raw("22", "x", "y", None).validate().unwrap_err();
        assert_eq!(err.to_string(), "occupancy: not a number");
    }

    #[test]
    fn negative_occupancy_is_rejected() {
        let err = raw("22", "-1", "500", None).validate().unwrap_err();
        assert_eq!(err.to_string(), "occupancy: not a number");
    }

    #[test]
    fn blank_room_area_counts_as_absent() {
        let set = raw("22", "3", "500", Some("  ")).validate().unwrap();
        assert_eq!(set.room_area_sq_m, None);
        let set = raw("22", "3", "500", None).validate().unwrap();
        assert_eq!(set.room_area_sq_m, None);
    }

    #[test]
    fn non_finite_room_area_is_rejected() {
        for bad in ["inf", "-inf", "NaN"] {
            let err = raw("22", "3", "500", Some(bad)).validate().unwrap_err();
            assert_eq!(err.to_string(), "room area: not a number");
        }
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let set = raw(" 22 ", " 3", "500 ", Some(" 12.0 ")).validate().unwrap();
        assert_eq!(set.temperature, 22);
        assert_eq!(set.room_area_sq_m, Some(12.0));
    }
}
