//! Seeded survey data for all landing zones
//!
//! Builds one intact zone and nine corrupted ones at start-up so the service
//! can run without any external coordinate source.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

use shared::{Coordinate, CoordinateSet, LandingZoneInput, ServerConfig, SharedError, Zone};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::CoordinateProvider;

/// Surveyed coordinates lie within `[-GRID_EXTENT, GRID_EXTENT]` on both axes
pub const GRID_EXTENT: i32 = 100;

/// How a zone's R2 report was damaged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    /// R2 contains a coordinate outside the surveyed grid
    GarbageCoordinate,
    /// R2 asks for one more copy of a coordinate than R1 holds
    DuplicateOverdraw,
}

#[derive(Debug, Clone)]
struct ZoneSurvey {
    input: LandingZoneInput,
    corruption: Option<Corruption>,
}

/// Coordinate provider backed by deterministic generated data
#[derive(Debug, Clone)]
pub struct GeneratedCoordinateProvider {
    surveys: HashMap<Zone, ZoneSurvey>,
    valid_zone: Zone,
}

impl GeneratedCoordinateProvider {
    /// Generate all ten zones from `seed`
    pub fn new(seed: u64, r1_len: usize, r2_len: usize) -> WebServerResult<Self> {
        if r2_len == 0 || r2_len > r1_len {
            return Err(WebServerError::SharedError(SharedError::InvalidConfig {
                field: "r2_len".to_string(),
                value: format!("{r2_len} (r1_len {r1_len})"),
            }));
        }

        let valid_zone = Zone::ALL[(seed % Zone::ALL.len() as u64) as usize];
        let surveys = Zone::ALL
            .into_iter()
            .map(|zone| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(zone.index() as u64));
                let corrupt = zone != valid_zone;
                (zone, survey_zone(&mut rng, r1_len, r2_len, corrupt))
            })
            .collect();

        Ok(Self { surveys, valid_zone })
    }

    pub fn from_config(config: &ServerConfig) -> WebServerResult<Self> {
        config.validate()?;
        Self::new(config.seed, config.r1_len, config.r2_len)
    }

    /// The single zone whose reports were left intact
    pub fn valid_zone(&self) -> Zone {
        self.valid_zone
    }

    pub fn corruption(&self, zone: Zone) -> Option<Corruption> {
        self.surveys.get(&zone).and_then(|survey| survey.corruption)
    }
}

#[async_trait]
impl CoordinateProvider for GeneratedCoordinateProvider {
    async fn get_coordinates(&self, zone: Zone) -> WebServerResult<LandingZoneInput> {
        self.surveys
            .get(&zone)
            .map(|survey| survey.input.clone())
            .ok_or(WebServerError::ZoneDataMissing { zone })
    }

    fn source_name(&self) -> &'static str {
        "generated"
    }
}

fn survey_zone(rng: &mut StdRng, r1_len: usize, r2_len: usize, corrupt: bool) -> ZoneSurvey {
    let r1: CoordinateSet = (0..r1_len).map(|_| grid_point(rng)).collect();
    let mut r2: CoordinateSet = r1.choose_multiple(rng, r2_len).copied().collect();

    let corruption = if corrupt {
        let kind = if rng.gen_bool(0.5) {
            Corruption::GarbageCoordinate
        } else {
            Corruption::DuplicateOverdraw
        };
        match kind {
            Corruption::GarbageCoordinate => insert_garbage(rng, &mut r2),
            Corruption::DuplicateOverdraw => overdraw(rng, &r1, &mut r2),
        }
        Some(kind)
    } else {
        None
    };

    r2.shuffle(rng);

    ZoneSurvey {
        input: LandingZoneInput::new(r1, r2),
        corruption,
    }
}

fn grid_point(rng: &mut StdRng) -> Coordinate {
    Coordinate::new(
        rng.gen_range(-GRID_EXTENT..=GRID_EXTENT) as f64,
        rng.gen_range(-GRID_EXTENT..=GRID_EXTENT) as f64,
    )
}

fn insert_garbage(rng: &mut StdRng, r2: &mut CoordinateSet) {
    let offset = rng.gen_range(1..=GRID_EXTENT);
    let garbage = Coordinate::new((GRID_EXTENT + offset) as f64, -((GRID_EXTENT + offset) as f64));
    let slot = rng.gen_range(0..r2.len());
    r2[slot] = garbage;
}

fn overdraw(rng: &mut StdRng, r1: &[Coordinate], r2: &mut CoordinateSet) {
    let target = r2[rng.gen_range(0..r2.len())];
    let available = r1.iter().filter(|c| c.key() == target.key()).count();
    let requested = r2.iter().filter(|c| c.key() == target.key()).count();
    r2.extend(std::iter::repeat(target).take(available + 1 - requested));
}
