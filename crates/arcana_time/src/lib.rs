//! Civil time resolution and sidereal time for chart computation.
//!
//! This crate turns birth data (calendar date, wall-clock time, zone
//! label) into the absolute and sidereal instants the chart math needs:
//! - IANA/abbreviation zone resolution with historical DST rules
//! - Julian Date conversion
//! - GMST / Local Sidereal Time

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::resolve_utc_instant;
pub use error::TimeError;
pub use julian::{J2000_JD, julian_centuries, julian_day};
pub use sidereal::{gmst_deg, local_sidereal_deg};
