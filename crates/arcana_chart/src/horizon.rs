//! Ascendant and Midheaven from instant + observer location.
//!
//! Standard spherical astronomy (Meeus, "Astronomical Algorithms" 2nd ed.,
//! Chapter 13): both angles derive from Local Sidereal Time and the
//! obliquity of the ecliptic.
//!
//! Known degeneracy: the ascendant is mathematically unstable as
//! |latitude| approaches 90 degrees — the ecliptic becomes tangent to the
//! horizon and "the rising degree" stops being well defined. We return the
//! best-effort limit value rather than failing; callers charting polar
//! births get a continuous but astrologically dubious ascendant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use arcana_time::{gmst_deg, julian_day, local_sidereal_deg};

use crate::util::normalize_360;

/// Mean obliquity of the ecliptic at J2000.0, degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;

/// The chart angles at an instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    /// Ecliptic longitude of the ascendant, [0, 360).
    pub ascendant_deg: f64,
    /// Ecliptic longitude of the midheaven, [0, 360).
    pub midheaven_deg: f64,
    /// Local sidereal time, [0, 360).
    pub sidereal_deg: f64,
}

/// Compute ascendant, midheaven, and LST.
///
/// Formulas (Meeus Ch. 13):
/// - `Asc = atan2(cos(LST), -(sin(LST)*cos(eps) + tan(phi)*sin(eps)))`
/// - `MC  = atan2(sin(LST), cos(LST)*cos(eps))`
///
/// The atan2 quadrant places the ascendant in the forward half-circle
/// (MC, MC+180), where the rising point always lies.
pub fn ascendant_midheaven(instant: DateTime<Utc>, latitude_deg: f64, longitude_deg: f64) -> Angles {
    let jd = julian_day(instant);
    let lst_deg = local_sidereal_deg(gmst_deg(jd), longitude_deg);
    angles_from_sidereal(lst_deg, latitude_deg)
}

/// Angles from a pre-computed LST (shared by tests and house division).
pub fn angles_from_sidereal(lst_deg: f64, latitude_deg: f64) -> Angles {
    let lst = lst_deg.to_radians();
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
    let mc = f64::atan2(lst.sin(), lst.cos() * eps.cos());

    Angles {
        ascendant_deg: normalize_360(asc.to_degrees()),
        midheaven_deg: normalize_360(mc.to_degrees()),
        sidereal_deg: normalize_360(lst_deg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// At the equator with LST = 0, the vernal equinox culminates: the
    /// MC is 0 Aries and the rising point a quarter turn ahead at 90
    /// (0 Cancer) — not its antipode, the setting point.
    #[test]
    fn equator_lst_zero() {
        let a = angles_from_sidereal(0.0, 0.0);
        assert!((a.ascendant_deg - 90.0).abs() < 1e-9, "asc = {}", a.ascendant_deg);
        assert!(a.midheaven_deg.abs() < 1e-9, "mc = {}", a.midheaven_deg);
    }

    /// The ascendant always lies in the forward half-circle from the
    /// MC, so the asc→IC arc stays under 180 degrees.
    #[test]
    fn ascendant_leads_midheaven() {
        for lat in [-60.0, -23.4, 0.0, 40.7, 66.5] {
            for i in 0..360 {
                let a = angles_from_sidereal(f64::from(i), lat);
                let lead = normalize_360(a.ascendant_deg - a.midheaven_deg);
                assert!(
                    lead > 0.0 && lead < 180.0,
                    "asc {} vs mc {} at lst {i} lat {lat}",
                    a.ascendant_deg,
                    a.midheaven_deg,
                );
            }
        }
    }

    /// Computed angles must always be valid house-division input.
    #[test]
    fn computed_angles_drive_house_division() {
        for lat in [-45.0, 0.0, 40.7, 64.1] {
            for i in 0..360 {
                let a = angles_from_sidereal(f64::from(i), lat);
                crate::houses::house_cusps(a.ascendant_deg, a.midheaven_deg)
                    .unwrap_or_else(|e| panic!("lst {i} lat {lat}: {e}"));
            }
        }
    }

    /// Sweeping LST through a full turn sweeps the ascendant through the
    /// full zodiac at any temperate latitude.
    #[test]
    fn ascendant_sweeps_circle() {
        let mut seen = [false; 12];
        for i in 0..720 {
            let lst = f64::from(i) * 0.5;
            let a = angles_from_sidereal(lst, 40.7);
            seen[(a.ascendant_deg / 30.0).floor() as usize % 12] = true;
        }
        assert!(seen.iter().all(|&s| s), "signs seen: {seen:?}");
    }

    /// MC is latitude-independent.
    #[test]
    fn midheaven_ignores_latitude() {
        for lst in [0.0, 77.0, 200.0, 311.0] {
            let a = angles_from_sidereal(lst, 10.0);
            let b = angles_from_sidereal(lst, 60.0);
            assert!((a.midheaven_deg - b.midheaven_deg).abs() < 1e-12);
        }
    }

    /// Polar input stays finite (best-effort, documented degeneracy).
    #[test]
    fn polar_latitude_finite() {
        for lst in [0.0, 90.0, 180.0, 270.0] {
            let a = angles_from_sidereal(lst, 89.99);
            assert!(a.ascendant_deg.is_finite());
            assert!((0.0..360.0).contains(&a.ascendant_deg));
        }
    }

    #[test]
    fn end_to_end_deterministic() {
        let t = Utc.with_ymd_and_hms(1990, 6, 15, 8, 30, 0).unwrap();
        let a = ascendant_midheaven(t, 40.7128, -74.0060);
        let b = ascendant_midheaven(t, 40.7128, -74.0060);
        assert_eq!(a, b);
        assert!((0.0..360.0).contains(&a.ascendant_deg));
        assert!((0.0..360.0).contains(&a.midheaven_deg));
    }
}
