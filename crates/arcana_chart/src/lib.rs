//! Chart geometry: zodiac placement, chart angles, and house division.
//!
//! This crate provides:
//! - `Planet` / `Sign` / `Element` enums with static correspondence tables
//! - ecliptic longitude → zodiac placement
//! - ascendant/midheaven from instant + location (Meeus spherical trig)
//! - Porphyry quadrant-trisection house cusps and house lookup
//! - the [`Ephemeris`] trait, the seam to the external position provider
//!
//! Everything is a pure function of its inputs; no state is held between
//! calls.

pub mod error;
pub mod horizon;
pub mod houses;
pub mod planet;
pub mod position;
pub mod sign;
pub mod util;

pub use error::ChartError;
pub use horizon::{Angles, OBLIQUITY_J2000_DEG, angles_from_sidereal, ascendant_midheaven};
pub use houses::{HouseCusps, house_cusps, house_of};
pub use planet::{ALL_PLANETS, Planet};
pub use position::{CelestialPosition, EclipticCoord, Ephemeris};
pub use sign::{ALL_SIGNS, Element, Sign, ZodiacPlacement, zodiac_placement};
pub use util::normalize_360;
