//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! Uses the Meeus degree-form GMST series ("Astronomical Algorithms",
//! 2nd ed., Eq. 12.4). The input is nominally JD UT1; we pass JD UTC
//! directly, since |UT1 - UTC| < 0.9 s contributes well under an
//! arcsecond of sidereal rotation — negligible at aspect-orb precision.

use crate::julian::J2000_JD;

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38 710 000
pub fn gmst_deg(jd_ut1: f64) -> f64 {
    let d = jd_ut1 - J2000_JD;
    let t = d / 36_525.0;
    let theta =
        280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local Sidereal Time in degrees from GMST and east longitude.
pub fn local_sidereal_deg(gmst: f64, longitude_east_deg: f64) -> f64 {
    (gmst + longitude_east_deg).rem_euclid(360.0)
}
