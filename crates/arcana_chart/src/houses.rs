//! Quadrant-based house division (Porphyry trisection).
//!
//! The four angles (ascendant, IC, descendant, midheaven) bound four
//! quadrants; each quadrant arc is trisected to yield the intermediate
//! cusps. Unlike Placidus, the division is purely angular — latitude
//! enters only through the ascendant itself — so it stays well defined
//! everywhere the ascendant does.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::util::normalize_360;

/// Minimum quadrant arc before the chart is considered degenerate.
const MIN_QUADRANT_ARC_DEG: f64 = 1e-6;

/// The 12 house cusp longitudes, in house order.
///
/// `cusps[0]` is the 1st-house cusp (the ascendant), `cusps[9]` the
/// 10th-house cusp (the midheaven). House `i+1` spans forward from
/// `cusps[i]` to `cusps[(i+1) % 12]`, wrapping past 360.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub cusps: [f64; 12],
}

/// Compute Porphyry house cusps from the ascendant and midheaven.
///
/// Invariants on the result:
/// - `cusps[0] == asc`, `cusps[9] == mc`
/// - `cusps[6] == asc + 180`, `cusps[3] == mc + 180` (mod 360)
/// - strictly monotonic going forward around the circle, no duplicates
///
/// Returns [`ChartError::DegenerateAngles`] when a quadrant collapses to
/// zero width (ascendant on the meridian axis) or inverts (IC not in the
/// forward half-circle from the ascendant).
pub fn house_cusps(ascendant_deg: f64, midheaven_deg: f64) -> Result<HouseCusps, ChartError> {
    let asc = normalize_360(ascendant_deg);
    let mc = normalize_360(midheaven_deg);
    let ic = normalize_360(mc + 180.0);
    let desc = normalize_360(asc + 180.0);

    // Forward arc from the ascendant to the IC (houses 1-3), and from the
    // IC to the descendant (houses 4-6). The two arcs sum to 180 exactly;
    // the opposite hemisphere mirrors them.
    let arc_asc_ic = normalize_360(ic - asc);
    let arc_ic_desc = 180.0 - arc_asc_ic;

    if arc_asc_ic < MIN_QUADRANT_ARC_DEG || arc_ic_desc < MIN_QUADRANT_ARC_DEG {
        return Err(ChartError::DegenerateAngles(
            "quadrant arcs collapsed or inverted",
        ));
    }

    let mut cusps = [0.0; 12];
    cusps[0] = asc;
    cusps[1] = normalize_360(asc + arc_asc_ic / 3.0);
    cusps[2] = normalize_360(asc + arc_asc_ic * 2.0 / 3.0);
    cusps[3] = ic;
    cusps[4] = normalize_360(ic + arc_ic_desc / 3.0);
    cusps[5] = normalize_360(ic + arc_ic_desc * 2.0 / 3.0);
    for i in 0..6 {
        cusps[i + 6] = normalize_360(cusps[i] + 180.0);
    }

    Ok(HouseCusps { cusps })
}

/// House number (1..=12) containing a longitude.
///
/// Forward-wrapping containment: house `i` is `[cusps[i-1], cusps[i])`
/// measured going forward mod 360, lower edge inclusive. A planet exactly
/// on the ascendant is in house 1.
pub fn house_of(longitude_deg: f64, cusps: &HouseCusps) -> u8 {
    let lon = normalize_360(longitude_deg);
    for i in 0..12 {
        let lo = cusps.cusps[i];
        let hi = cusps.cusps[(i + 1) % 12];
        let span = normalize_360(hi - lo);
        let offset = normalize_360(lon - lo);
        if offset < span {
            return (i + 1) as u8;
        }
    }
    // unreachable for valid cusps; the spans tile the circle
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cusps_100_10() -> HouseCusps {
        house_cusps(100.0, 10.0).unwrap()
    }

    #[test]
    fn angle_invariants() {
        let h = cusps_100_10();
        assert!((h.cusps[0] - 100.0).abs() < 1e-12);
        assert!((h.cusps[9] - 10.0).abs() < 1e-12);
        assert!((h.cusps[6] - 280.0).abs() < 1e-12);
        assert!((h.cusps[3] - 190.0).abs() < 1e-12);
    }

    #[test]
    fn quadrants_trisected() {
        // asc=100, ic=190: arc 90, trisected at 130, 160
        let h = cusps_100_10();
        assert!((h.cusps[1] - 130.0).abs() < 1e-12);
        assert!((h.cusps[2] - 160.0).abs() < 1e-12);
        assert!((h.cusps[4] - 220.0).abs() < 1e-12);
        assert!((h.cusps[5] - 250.0).abs() < 1e-12);
    }

    #[test]
    fn monotonic_wrapping_no_duplicates() {
        for (asc, mc) in [(100.0, 10.0), (5.0, 280.0), (359.0, 250.0), (200.0, 95.0)] {
            let h = house_cusps(asc, mc).unwrap();
            let mut total = 0.0;
            for i in 0..12 {
                let step = normalize_360(h.cusps[(i + 1) % 12] - h.cusps[i]);
                assert!(step > 1e-9, "duplicate cusp at {i} for asc={asc} mc={mc}");
                total += step;
            }
            assert!((total - 360.0).abs() < 1e-9);
        }
    }

    #[test]
    fn degenerate_axes_rejected() {
        assert!(matches!(
            house_cusps(100.0, 100.0),
            Err(ChartError::DegenerateAngles(_))
        ));
        // asc opposite mc: IC falls on the ascendant
        assert!(matches!(
            house_cusps(100.0, 280.0),
            Err(ChartError::DegenerateAngles(_))
        ));
        // mc ahead of asc: the asc->IC arc exceeds 180 (inverted ordering)
        assert!(matches!(
            house_cusps(100.0, 150.0),
            Err(ChartError::DegenerateAngles(_))
        ));
    }

    #[test]
    fn planet_on_ascendant_is_house_1() {
        let h = cusps_100_10();
        assert_eq!(house_of(100.0, &h), 1);
    }

    #[test]
    fn house_lookup_samples() {
        let h = cusps_100_10();
        assert_eq!(house_of(129.9, &h), 1);
        assert_eq!(house_of(130.0, &h), 2);
        assert_eq!(house_of(10.0, &h), 10);
        assert_eq!(house_of(99.9, &h), 12);
        assert_eq!(house_of(280.0, &h), 7);
    }

    /// Every degree maps to exactly one house: the partition covers the
    /// circle with no gaps or overlaps.
    #[test]
    fn partition_covers_circle_once() {
        let h = house_cusps(247.3, 163.8).unwrap();
        let mut counts = [0u32; 12];
        for i in 0..3600 {
            let lon = f64::from(i) * 0.1;
            let house = house_of(lon, &h);
            assert!((1..=12).contains(&house));
            counts[house as usize - 1] += 1;
        }
        assert_eq!(counts.iter().sum::<u32>(), 3600);
        assert!(counts.iter().all(|&c| c > 0), "counts: {counts:?}");
    }

    #[test]
    fn wraparound_house() {
        // asc=350: house 1 spans 350 across 0 to the first cusp
        let h = house_cusps(350.0, 260.0).unwrap();
        assert_eq!(house_of(355.0, &h), 1);
        assert_eq!(house_of(5.0, &h), 1);
    }
}
