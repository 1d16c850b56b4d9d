//! The Four Worlds and weighted placement scoring.
//!
//! Each placement votes for the Worlds with fixed weights: the planet's
//! nature counts 3, the sign's element 2, the house quadrant 1. The
//! placement's primary World is the argmax; ties break by declaration
//! order (Atziluth, Briah, Yetzirah, Assiah), which is fixed and
//! documented rather than meaningful.

use serde::{Deserialize, Serialize};

use arcana_chart::{Element, Planet, Sign};

/// Weight of the planet-nature contribution.
const PLANET_WEIGHT: u32 = 3;
/// Weight of the sign-element contribution.
const ELEMENT_WEIGHT: u32 = 2;
/// Weight of the house-quadrant contribution.
const QUADRANT_WEIGHT: u32 = 1;

/// The four Worlds, emanation downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum World {
    Atziluth,
    Briah,
    Yetzirah,
    Assiah,
}

/// All four Worlds in emanation order (also the tie-break order).
pub const ALL_WORLDS: [World; 4] = [World::Atziluth, World::Briah, World::Yetzirah, World::Assiah];

impl World {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Atziluth => "Atziluth",
            Self::Briah => "Briah",
            Self::Yetzirah => "Yetzirah",
            Self::Assiah => "Assiah",
        }
    }

    /// 0-based index into [`ALL_WORLDS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Atziluth => 0,
            Self::Briah => 1,
            Self::Yetzirah => 2,
            Self::Assiah => 3,
        }
    }
}

/// World expressed by a planet's nature.
pub const fn planet_world(planet: Planet) -> World {
    match planet {
        Planet::Sun | Planet::Mars => World::Atziluth,
        Planet::Moon | Planet::Venus | Planet::Neptune => World::Briah,
        Planet::Mercury | Planet::Jupiter | Planet::Uranus => World::Yetzirah,
        Planet::Saturn | Planet::Pluto => World::Assiah,
    }
}

/// World of a sign's element: the classical Fire/Water/Air/Earth
/// correspondence to Atziluth/Briah/Yetzirah/Assiah.
pub const fn element_world(element: Element) -> World {
    match element {
        Element::Fire => World::Atziluth,
        Element::Water => World::Briah,
        Element::Air => World::Yetzirah,
        Element::Earth => World::Assiah,
    }
}

/// World of a house quadrant: ascending from incarnate (houses 1-3,
/// Assiah) to archetypal (houses 10-12, Atziluth).
///
/// Out-of-range house numbers clamp into the last quadrant; valid input
/// is 1..=12.
pub const fn quadrant_world(house: u8) -> World {
    match house {
        1..=3 => World::Assiah,
        4..=6 => World::Yetzirah,
        7..=9 => World::Briah,
        _ => World::Atziluth,
    }
}

/// World scoring of one placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldScore {
    /// Points per World, indexed by `World::index()`.
    pub points: [u32; 4],
    /// Argmax World, ties broken by emanation order.
    pub primary: World,
}

/// Score a placement's World emphasis.
pub fn world_score_for(planet: Planet, sign: Sign, house: u8) -> WorldScore {
    let mut points = [0u32; 4];
    points[planet_world(planet).index() as usize] += PLANET_WEIGHT;
    points[element_world(sign.element()).index() as usize] += ELEMENT_WEIGHT;
    points[quadrant_world(house).index() as usize] += QUADRANT_WEIGHT;

    let mut primary = World::Atziluth;
    for w in ALL_WORLDS {
        if points[w.index() as usize] > points[primary.index() as usize] {
            primary = w;
        }
    }
    WorldScore { points, primary }
}

/// Aggregate primary-World percentages over a chart's placements.
///
/// Each placement contributes its primary World's point total to that
/// World's bucket; buckets are normalized to percentages. With no
/// placements the result is all zeros (never NaN).
pub fn aggregate_world_percentages(scores: &[WorldScore]) -> [f64; 4] {
    let mut buckets = [0u32; 4];
    for s in scores {
        buckets[s.primary.index() as usize] += s.points[s.primary.index() as usize];
    }
    let grand: u32 = buckets.iter().sum();
    if grand == 0 {
        return [0.0; 4];
    }
    let mut percents = [0.0; 4];
    for (pct, &b) in percents.iter_mut().zip(&buckets) {
        *pct = f64::from(b) / f64::from(grand) * 100.0;
    }
    percents
}
