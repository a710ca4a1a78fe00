//! Multiset containment check for rover coordinate reports
//!
//! A landing zone is valid when every coordinate reported by R2 appears in
//! R1 at least as many times as R2 reports it.

use std::collections::HashMap;

use shared::{Coordinate, CoordinateKey, LandingZoneInput, SharedResult};

/// Remaining occurrence counts of R1 coordinates
#[derive(Debug, Default)]
pub struct CoordinateCounts {
    counts: HashMap<CoordinateKey, usize>,
}

impl CoordinateCounts {
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Self {
        let mut counts = HashMap::with_capacity(coordinates.len());
        for coordinate in coordinates {
            *counts.entry(coordinate.key()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remaining occurrences of `coordinate`
    pub fn count(&self, coordinate: &Coordinate) -> usize {
        self.counts.get(&coordinate.key()).copied().unwrap_or(0)
    }

    /// Take one occurrence of `coordinate`; false when none remain
    pub fn consume(&mut self, coordinate: &Coordinate) -> bool {
        match self.counts.get_mut(&coordinate.key()) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                true
            }
            _ => false,
        }
    }
}

/// True iff R2 is a submultiset of R1.
///
/// Both reports are only borrowed. Coordinates with non-finite components
/// are rejected before any counting happens.
pub fn is_valid_landing_zone(input: &LandingZoneInput) -> SharedResult<bool> {
    input.validate()?;

    let mut available = CoordinateCounts::from_coordinates(&input.r1);
    Ok(input.r2.iter().all(|coordinate| available.consume(coordinate)))
}
