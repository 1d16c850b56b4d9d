//! Celestial positions and the external ephemeris seam.
//!
//! This crate never computes planetary positions itself; a vetted
//! astronomical provider supplies geocentric ecliptic coordinates through
//! the [`Ephemeris`] trait. Anything returning standard ecliptic degrees
//! at a UTC instant qualifies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::planet::Planet;

/// Geocentric ecliptic coordinates of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoord {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Distance in AU.
    pub distance_au: f64,
    /// Apparent retrograde motion.
    pub retrograde: bool,
}

/// A planet together with its ephemeris snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialPosition {
    pub planet: Planet,
    pub coord: EclipticCoord,
}

/// External ephemeris provider.
///
/// Failures are per-body: the chart orchestration catches an error for
/// one planet and omits it rather than aborting the whole chart.
pub trait Ephemeris {
    fn position(&self, planet: Planet, instant: DateTime<Utc>) -> Result<EclipticCoord, ChartError>;
}
