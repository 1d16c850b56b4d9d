//! Deterministic narrative assembly.
//!
//! Pure templating over a reading: phrase banks are const arrays and the
//! selection key for each bank is a fixed function of counts or
//! thresholds. No randomness — the same reading always yields the same
//! text. Free-prose embellishment is delegated to the LLM boundary in
//! [`crate::prompt`].

use arcana_aspects::Quality;
use arcana_tree::house_domain;

use crate::reading::{PlanetPlacement, Reading};

/// Opening lines keyed by harmonious-aspect count: 3+, 1-2, 0.
const HARMONY_PHRASES: [&str; 3] = [
    "The sky leans kindly; its currents run with you.",
    "A thread of ease winds through an otherwise mixed sky.",
    "No easy currents tonight; what is won here is earned.",
];

/// Lines keyed by challenging-aspect count: 3+, 1-2, 0.
const FRICTION_PHRASES: [&str; 3] = [
    "Expect friction at every turn; the grindstone is busy.",
    "One or two knots ask for patient hands.",
    "Little resists you; beware the complacency of smooth water.",
];

/// Lines keyed by largest-component size: 4+, 2-3, 0-1.
const TREE_PHRASES: [&str; 3] = [
    "A broad river of light crosses the Tree.",
    "A small constellation glows amid darker branches.",
    "The lamps burn alone; no two lights touch.",
];

/// Index into a 3-entry bank: 3+ hits, 1-2 hits, none.
const fn bank_index(count: usize) -> usize {
    match count {
        0 => 2,
        1 | 2 => 1,
        _ => 0,
    }
}

/// One sentence for a placement.
pub fn placement_sentence(p: &PlanetPlacement) -> String {
    let domain = house_domain(p.house).unwrap_or("the chart");
    format!(
        "{} stands at {:.1} degrees {} in house {} ({}), kindling {}.",
        p.planet.name(),
        p.zodiac.degree_in_sign,
        p.zodiac.sign.name(),
        p.house,
        domain,
        p.sephirah.name(),
    )
}

/// Summary paragraph for a reading.
pub fn summary(reading: &Reading) -> String {
    let harmonious = reading
        .aspects
        .iter()
        .filter(|a| a.quality == Quality::Harmonious)
        .count();
    let challenging = reading
        .aspects
        .iter()
        .filter(|a| a.quality == Quality::Challenging)
        .count();

    let mut out = String::new();
    out.push_str(HARMONY_PHRASES[bank_index(harmonious)]);
    out.push(' ');
    out.push_str(FRICTION_PHRASES[bank_index(challenging)]);
    out.push(' ');
    // singleton components count as "alone" only when <= 1 node
    let component_size = reading.tree.component_nodes.len();
    out.push_str(TREE_PHRASES[if component_size >= 4 {
        0
    } else if component_size >= 2 {
        1
    } else {
        2
    }]);

    if let Some(world) = reading.worlds.dominant {
        out.push_str(&format!(
            " The chart's weight settles in {} ({:.0}%).",
            world.name(),
            reading.worlds.percentages[world.index() as usize],
        ));
    }
    if reading.tree.gematria.total > 0 {
        out.push_str(&format!(
            " The illuminated names sum to {}, a key of {}.",
            reading.tree.gematria.total, reading.tree.gematria.digit_root,
        ));
    }
    out
}

/// Full narrative: summary plus one line per placement.
pub fn narrate(reading: &Reading) -> String {
    let mut out = summary(reading);
    for p in &reading.placements {
        out.push('\n');
        out.push_str(&placement_sentence(p));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::FixedEphemeris;
    use crate::reading::compute_reading;
    use arcana_chart::Planet;
    use chrono::{TimeZone, Utc};

    fn reading_for(longitudes: &[(Planet, f64)]) -> Reading {
        let eph = FixedEphemeris::from_longitudes(longitudes);
        let t = Utc.with_ymd_and_hms(1990, 6, 15, 12, 30, 0).unwrap();
        compute_reading(&eph, t, 40.7, -74.0).unwrap()
    }

    #[test]
    fn bank_index_thresholds() {
        assert_eq!(bank_index(0), 2);
        assert_eq!(bank_index(1), 1);
        assert_eq!(bank_index(2), 1);
        assert_eq!(bank_index(3), 0);
        assert_eq!(bank_index(9), 0);
    }

    #[test]
    fn grand_trine_selects_harmonious_opening() {
        // three exact trines = 3 harmonious aspects -> bank entry 0
        let r = reading_for(&[
            (Planet::Sun, 0.0),
            (Planet::Moon, 120.0),
            (Planet::Mars, 240.0),
        ]);
        assert!(summary(&r).starts_with(HARMONY_PHRASES[0]));
    }

    #[test]
    fn empty_sky_text_is_stable() {
        let r = reading_for(&[]);
        let s = summary(&r);
        assert!(s.starts_with(HARMONY_PHRASES[2]));
        assert!(s.contains(TREE_PHRASES[2]));
        // no dominant world, no gematria tail
        assert!(!s.contains('%'));
    }

    #[test]
    fn narration_is_deterministic() {
        let lons = [(Planet::Sun, 84.2), (Planet::Venus, 45.3)];
        let a = narrate(&reading_for(&lons));
        let b = narrate(&reading_for(&lons));
        assert_eq!(a, b);
    }

    #[test]
    fn placement_sentence_mentions_domain() {
        let r = reading_for(&[(Planet::Sun, 15.0)]);
        let s = placement_sentence(&r.placements[0]);
        assert!(s.contains("Sun"));
        assert!(s.contains("Aries"));
        assert!(s.contains("Tiphereth"));
    }
}
