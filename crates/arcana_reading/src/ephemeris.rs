//! A fixed in-memory ephemeris.
//!
//! The production provider is an external astronomical library; tests
//! and the CLI feed known longitudes through this stand-in instead.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use arcana_chart::{CelestialPosition, ChartError, EclipticCoord, Ephemeris, Planet};

/// Ephemeris backed by a fixed position table, ignoring the instant.
#[derive(Debug, Clone, Default)]
pub struct FixedEphemeris {
    positions: HashMap<Planet, EclipticCoord>,
}

impl FixedEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from bare longitudes (latitude/distance zeroed, direct motion).
    pub fn from_longitudes(longitudes: &[(Planet, f64)]) -> Self {
        let positions = longitudes
            .iter()
            .map(|&(planet, longitude_deg)| {
                (
                    planet,
                    EclipticCoord {
                        longitude_deg,
                        latitude_deg: 0.0,
                        distance_au: 0.0,
                        retrograde: false,
                    },
                )
            })
            .collect();
        Self { positions }
    }

    /// Build from full position snapshots.
    pub fn from_positions(positions: &[CelestialPosition]) -> Self {
        Self {
            positions: positions.iter().map(|p| (p.planet, p.coord)).collect(),
        }
    }

    pub fn insert(&mut self, planet: Planet, coord: EclipticCoord) {
        self.positions.insert(planet, coord);
    }
}

impl Ephemeris for FixedEphemeris {
    fn position(
        &self,
        planet: Planet,
        _instant: DateTime<Utc>,
    ) -> Result<EclipticCoord, ChartError> {
        self.positions
            .get(&planet)
            .copied()
            .ok_or_else(|| ChartError::Ephemeris(format!("no position for {}", planet.name())))
    }
}
