//! Core types for rover coordinate reports and landing zones

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// 2D coordinate reported by a rover, serialized as `[x, y]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Hashable key built from both components.
    ///
    /// Two finite coordinates produce the same key exactly when they compare
    /// equal component-wise. `-0.0` and `0.0` share a key. Keys of non-finite
    /// coordinates carry no equality guarantee, so callers validate first.
    pub fn key(&self) -> CoordinateKey {
        CoordinateKey(canonical_bits(self.x), canonical_bits(self.y))
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(value: (f64, f64)) -> Self {
        Coordinate::new(value.0, value.1)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.x, value.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Composite hash key for a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateKey(u64, u64);

/// Ordered rover report; duplicates count individually
pub type CoordinateSet = Vec<Coordinate>;

/// Coordinates reported by both rovers for one zone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingZoneInput {
    /// Reference report
    #[serde(rename = "R1")]
    pub r1: CoordinateSet,

    /// Report under test
    #[serde(rename = "R2")]
    pub r2: CoordinateSet,
}

impl LandingZoneInput {
    pub fn new(r1: CoordinateSet, r2: CoordinateSet) -> Self {
        Self { r1, r2 }
    }

    /// Reject the first coordinate with a non-finite component
    pub fn validate(&self) -> SharedResult<()> {
        check_finite("R1", &self.r1)?;
        check_finite("R2", &self.r2)
    }
}

fn check_finite(set: &'static str, coordinates: &[Coordinate]) -> SharedResult<()> {
    match coordinates.iter().position(|c| !c.is_finite()) {
        Some(index) => {
            let bad = coordinates[index];
            Err(SharedError::InvalidCoordinate {
                set,
                index,
                x: bad.x,
                y: bad.y,
            })
        }
        None => Ok(()),
    }
}

/// Landing zone identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    Z1,
    Z2,
    Z3,
    Z4,
    Z5,
    Z6,
    Z7,
    Z8,
    Z9,
    Z10,
}

impl Zone {
    pub const ALL: [Zone; 10] = [
        Zone::Z1,
        Zone::Z2,
        Zone::Z3,
        Zone::Z4,
        Zone::Z5,
        Zone::Z6,
        Zone::Z7,
        Zone::Z8,
        Zone::Z9,
        Zone::Z10,
    ];

    /// Zero-based position in [`Zone::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Z1 => "Z1",
            Zone::Z2 => "Z2",
            Zone::Z3 => "Z3",
            Zone::Z4 => "Z4",
            Zone::Z5 => "Z5",
            Zone::Z6 => "Z6",
            Zone::Z7 => "Z7",
            Zone::Z8 => "Z8",
            Zone::Z9 => "Z9",
            Zone::Z10 => "Z10",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .into_iter()
            .find(|zone| zone.as_str() == s)
            .ok_or_else(|| SharedError::InvalidZone { input: s.to_string() })
    }
}

/// Result payload for a single zone check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneReport {
    pub zone: Zone,
    pub is_valid: bool,
    /// Checker execution time in milliseconds
    pub elapsed_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_parsing() {
        assert_eq!("Z1".parse::<Zone>().unwrap(), Zone::Z1);
        assert_eq!("Z10".parse::<Zone>().unwrap(), Zone::Z10);
        assert!("z1".parse::<Zone>().is_err());
        assert!("Z0".parse::<Zone>().is_err());
        assert!("Z11".parse::<Zone>().is_err());
        assert!("".parse::<Zone>().is_err());
    }

    #[test]
    fn test_zone_display_matches_parse() {
        for (i, zone) in Zone::ALL.into_iter().enumerate() {
            assert_eq!(zone.index(), i);
            assert_eq!(zone.to_string().parse::<Zone>().unwrap(), zone);
        }
    }

    #[test]
    fn test_coordinate_key_equality() {
        assert_eq!(Coordinate::new(1.0, 2.0).key(), Coordinate::new(1.0, 2.0).key());
        assert_ne!(Coordinate::new(1.0, 2.0).key(), Coordinate::new(2.0, 1.0).key());
        assert_eq!(Coordinate::new(-0.0, 0.0).key(), Coordinate::new(0.0, -0.0).key());
        assert_ne!(Coordinate::new(0.1, 0.0).key(), Coordinate::new(0.1 + f64::EPSILON, 0.0).key());
    }

    #[test]
    fn test_input_json_shape() {
        let input: LandingZoneInput =
            serde_json::from_str(r#"{"R1": [[0, 0], [1.5, 2]], "R2": [[1.5, 2]]}"#).unwrap();
        assert_eq!(input.r1, vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.5, 2.0)]);
        assert_eq!(input.r2, vec![Coordinate::new(1.5, 2.0)]);

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["R2"][0][0], 1.5);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let input = LandingZoneInput::new(
            vec![Coordinate::new(0.0, 0.0)],
            vec![Coordinate::new(1.0, 1.0), Coordinate::new(f64::NAN, 1.0)],
        );
        match input.validate() {
            Err(SharedError::InvalidCoordinate { set, index, .. }) => {
                assert_eq!(set, "R2");
                assert_eq!(index, 1);
            }
            other => panic!("Expected InvalidCoordinate, got {other:?}"),
        }

        let input = LandingZoneInput::new(vec![Coordinate::new(f64::INFINITY, 0.0)], vec![]);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_zone_report_serialization() {
        let report = ZoneReport {
            zone: Zone::Z3,
            is_valid: true,
            elapsed_time: 0.25,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["zone"], "Z3");
        assert_eq!(value["isValid"], true);
        assert_eq!(value["elapsedTime"], 0.25);
    }
}
