//! Planetary aspect detection.
//!
//! An aspect is a named angular relationship between two ecliptic
//! longitudes, held within a per-aspect tolerance (the "orb"). Detection
//! walks a fixed table whose orb windows are disjoint, so at most one
//! aspect type matches any separation and table order can never mask a
//! tighter match.

use serde::{Deserialize, Serialize};

use arcana_chart::{Planet, normalize_360};

/// The six detected aspect types, in table (angle) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Quincunx,
    Opposition,
}

/// All aspect kinds in detection order.
pub const ALL_ASPECT_KINDS: [AspectKind; 6] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Quincunx,
    AspectKind::Opposition,
];

/// Relational quality of an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Harmonious,
    Challenging,
    Neutral,
}

impl Quality {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Harmonious => "harmonious",
            Self::Challenging => "challenging",
            Self::Neutral => "neutral",
        }
    }
}

/// How tightly the separation matches the exact angle, in orb thirds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Illumination {
    /// Deviation within the inner third of the orb.
    Full,
    /// Deviation within the middle third.
    Partial,
    /// Deviation in the outer third, still inside the orb.
    Shadow,
}

impl AspectKind {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Quincunx => "Quincunx",
            Self::Opposition => "Opposition",
        }
    }

    /// Exact angle in degrees.
    pub const fn exact_angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Quincunx => 150.0,
            Self::Opposition => 180.0,
        }
    }

    /// Orb tolerance in degrees. The windows `exact ± orb` are disjoint
    /// across the table: [0,8] [54,66] [83,97] [112,128] [145,155] [172,180].
    pub const fn orb(self) -> f64 {
        match self {
            Self::Conjunction => 8.0,
            Self::Sextile => 6.0,
            Self::Square => 7.0,
            Self::Trine => 8.0,
            Self::Quincunx => 5.0,
            Self::Opposition => 8.0,
        }
    }

    /// Relational quality. Trines and sextiles flow; squares and
    /// oppositions grind; the conjunction takes on the planets involved
    /// and the quincunx points nowhere in particular, so both are neutral.
    pub const fn quality(self) -> Quality {
        match self {
            Self::Sextile | Self::Trine => Quality::Harmonious,
            Self::Square | Self::Opposition => Quality::Challenging,
            Self::Conjunction | Self::Quincunx => Quality::Neutral,
        }
    }
}

/// A detected aspect between two planets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body_a: Planet,
    pub body_b: Planet,
    pub kind: AspectKind,
    /// Angular separation of the pair, [0, 180].
    pub separation_deg: f64,
    /// |separation - exact angle|, <= orb.
    pub deviation_deg: f64,
    pub quality: Quality,
    pub illumination: Illumination,
}

/// Angular separation of two longitudes, [0, 180].
///
/// The absolute difference mod 360, reflected across 180.
pub fn angular_separation(a_deg: f64, b_deg: f64) -> f64 {
    let d = normalize_360(a_deg - b_deg);
    if d > 180.0 { 360.0 - d } else { d }
}

/// Illumination from how much of the orb the deviation consumes.
fn illumination_for(deviation: f64, orb: f64) -> Illumination {
    let ratio = deviation / orb;
    if ratio <= 1.0 / 3.0 {
        Illumination::Full
    } else if ratio <= 2.0 / 3.0 {
        Illumination::Partial
    } else {
        Illumination::Shadow
    }
}

/// Detect the aspect between two longitudes, if any.
///
/// Symmetric in its longitude arguments. Returns `None` when the
/// separation falls outside every orb window.
pub fn detect_aspect(body_a: Planet, lon_a: f64, body_b: Planet, lon_b: f64) -> Option<Aspect> {
    let separation = angular_separation(lon_a, lon_b);
    for kind in ALL_ASPECT_KINDS {
        let deviation = (separation - kind.exact_angle()).abs();
        if deviation <= kind.orb() {
            return Some(Aspect {
                body_a,
                body_b,
                kind,
                separation_deg: separation,
                deviation_deg: deviation,
                quality: kind.quality(),
                illumination: illumination_for(deviation, kind.orb()),
            });
        }
    }
    None
}

/// All aspects among a set of placements, tightest first.
///
/// Every unordered pair is tested once; the planet count is at most 10,
/// so the quadratic scan is trivial. Output is sorted by deviation from
/// exact for display stability, ties keeping pair order.
pub fn all_aspects(placements: &[(Planet, f64)]) -> Vec<Aspect> {
    let mut found = Vec::new();
    for (i, &(pa, la)) in placements.iter().enumerate() {
        for &(pb, lb) in &placements[i + 1..] {
            if let Some(aspect) = detect_aspect(pa, la, pb, lb) {
                found.push(aspect);
            }
        }
    }
    found.sort_by(|x, y| x.deviation_deg.total_cmp(&y.deviation_deg));
    found
}
