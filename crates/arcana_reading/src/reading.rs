//! Reading orchestration: from birth input to a full structured reading.
//!
//! Bridges the ephemeris seam and the pure calculation crates. Failures
//! are isolated per planet: a body the provider cannot place is warned
//! about and omitted, and the reading proceeds with the rest. Identical
//! inputs always produce identical readings — nothing here holds state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use arcana_aspects::{Aspect, all_aspects};
use arcana_chart::{
    ALL_PLANETS, Angles, EclipticCoord, Ephemeris, HouseCusps, Planet, ZodiacPlacement,
    ascendant_midheaven, house_cusps, house_of, zodiac_placement,
};
use arcana_time::resolve_utc_instant;
use arcana_tree::{
    ClassifiedEdge, EdgeState, GematriaSum, HebrewLetter, PathDef, Sephirah, SephirahSet, World,
    WorldScore, aggregate_world_percentages, classify_edges, gematria_sum, largest_component,
    path_between, path_for_sign, planet_sephirah, world_score_for, ALL_WORLDS,
};

use crate::error::ReadingError;
use crate::input::BirthInput;

/// One planet fully placed in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPlacement {
    pub planet: Planet,
    pub coord: EclipticCoord,
    pub zodiac: ZodiacPlacement,
    /// House number 1..=12.
    pub house: u8,
    /// Sphere this planet illuminates.
    pub sephirah: Sephirah,
}

/// A classified path in serializable form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeReport {
    pub path_number: u8,
    pub letter: HebrewLetter,
    pub from: Sephirah,
    pub to: Sephirah,
    pub state: EdgeState,
}

impl EdgeReport {
    fn new(edge: &ClassifiedEdge) -> Self {
        Self {
            path_number: edge.path.number,
            letter: edge.path.letter,
            from: edge.path.from,
            to: edge.path.to,
            state: edge.state,
        }
    }
}

/// Illumination analysis of the Tree for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeState {
    /// Spheres lit by placed planets, descent order.
    pub illuminated: Vec<Sephirah>,
    /// Candidate paths (activated by occupied signs and by aspects)
    /// with their states.
    pub edges: Vec<EdgeReport>,
    /// Largest connected component: member spheres.
    pub component_nodes: Vec<Sephirah>,
    /// Path numbers of the component's internal edges.
    pub component_paths: Vec<u8>,
    /// Gematria over the component's sphere names and path letters.
    pub gematria: GematriaSum,
}

/// Aggregated Four-Worlds emphasis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldBalance {
    /// Percentages indexed by `World::index()`; zeros when no planet
    /// was placed.
    pub percentages: [f64; 4],
    /// World with the highest percentage, `None` for an empty chart.
    pub dominant: Option<World>,
    /// Per-placement scores, in placement order.
    pub scores: Vec<WorldScore>,
}

/// A complete structured reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub instant: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub angles: Angles,
    pub cusps: HouseCusps,
    /// Successfully placed planets, in [`ALL_PLANETS`] order.
    pub placements: Vec<PlanetPlacement>,
    /// Detected aspects, tightest first.
    pub aspects: Vec<Aspect>,
    pub tree: TreeState,
    pub worlds: WorldBalance,
}

/// Compute a reading from a validated birth input.
pub fn compute_reading_for_birth(
    ephemeris: &dyn Ephemeris,
    input: &BirthInput,
) -> Result<Reading, ReadingError> {
    let instant = resolve_utc_instant(&input.date, &input.time, &input.zone)?;
    compute_reading(ephemeris, instant, input.latitude, input.longitude)
}

/// Compute a reading at an instant and place.
///
/// Per-planet ephemeris failures are logged and skipped; only a
/// degenerate angle axis (house division impossible) fails the whole
/// reading.
pub fn compute_reading(
    ephemeris: &dyn Ephemeris,
    instant: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
) -> Result<Reading, ReadingError> {
    let angles = ascendant_midheaven(instant, latitude, longitude);
    let cusps = house_cusps(angles.ascendant_deg, angles.midheaven_deg)?;

    let mut placements = Vec::with_capacity(ALL_PLANETS.len());
    for planet in ALL_PLANETS {
        match ephemeris.position(planet, instant) {
            Ok(coord) => {
                let zodiac = zodiac_placement(coord.longitude_deg);
                let house = house_of(zodiac.absolute_degree, &cusps);
                placements.push(PlanetPlacement {
                    planet,
                    coord,
                    zodiac,
                    house,
                    sephirah: planet_sephirah(planet),
                });
            }
            Err(e) => {
                warn!(planet = planet.name(), error = %e, "omitting planet from reading");
            }
        }
    }

    let longitude_pairs: Vec<(Planet, f64)> = placements
        .iter()
        .map(|p| (p.planet, p.zodiac.absolute_degree))
        .collect();
    let aspects = all_aspects(&longitude_pairs);

    let tree = analyze_tree(&placements, &aspects);
    let worlds = balance_worlds(&placements);

    Ok(Reading {
        instant,
        latitude,
        longitude,
        angles,
        cusps,
        placements,
        aspects,
        tree,
        worlds,
    })
}

/// Candidate paths for a chart: one per occupied sign, one per aspect
/// whose endpoint spheres share a path. Deduplicated, path-number order.
fn candidate_paths(placements: &[PlanetPlacement], aspects: &[Aspect]) -> Vec<&'static PathDef> {
    let mut paths: Vec<&'static PathDef> = Vec::new();
    let mut push = |p: &'static PathDef| {
        if !paths.iter().any(|q| q.number == p.number) {
            paths.push(p);
        }
    };
    for placement in placements {
        push(path_for_sign(placement.zodiac.sign));
    }
    for aspect in aspects {
        let a = planet_sephirah(aspect.body_a);
        let b = planet_sephirah(aspect.body_b);
        if let Some(p) = path_between(a, b) {
            push(p);
        }
    }
    paths.sort_by_key(|p| p.number);
    paths
}

fn analyze_tree(placements: &[PlanetPlacement], aspects: &[Aspect]) -> TreeState {
    let lit = placements
        .iter()
        .fold(SephirahSet::empty(), |set, p| set.insert(p.sephirah));

    let classified = classify_edges(&candidate_paths(placements, aspects), lit);
    let component = largest_component(lit, &classified);

    let mut tokens: Vec<&'static str> = component.nodes.iter().map(|s| s.name()).collect();
    tokens.extend(component.edges.iter().map(|p| p.letter.name()));
    let gematria = gematria_sum(&tokens);

    TreeState {
        illuminated: lit.iter().collect(),
        edges: classified.iter().map(EdgeReport::new).collect(),
        component_paths: component.edges.iter().map(|p| p.number).collect(),
        component_nodes: component.nodes,
        gematria,
    }
}

fn balance_worlds(placements: &[PlanetPlacement]) -> WorldBalance {
    let scores: Vec<WorldScore> = placements
        .iter()
        .map(|p| world_score_for(p.planet, p.zodiac.sign, p.house))
        .collect();
    let percentages = aggregate_world_percentages(&scores);
    let dominant = if placements.is_empty() {
        None
    } else {
        let mut best = World::Atziluth;
        for w in ALL_WORLDS {
            if percentages[w.index() as usize] > percentages[best.index() as usize] {
                best = w;
            }
        }
        Some(best)
    };
    WorldBalance {
        percentages,
        dominant,
        scores,
    }
}
