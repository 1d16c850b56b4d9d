//! End-to-end reading checks against hand-worked expectations.

use chrono::{TimeZone, Utc};

use arcana_aspects::{AspectKind, Quality};
use arcana_chart::Planet;
use arcana_reading::{
    FixedEphemeris, RawBirthInput, Reading, build_request, compute_reading,
    compute_reading_for_birth, parse_interpretation,
};
use arcana_tree::Sephirah;

fn reading_at(longitudes: &[(Planet, f64)]) -> Reading {
    let eph = FixedEphemeris::from_longitudes(longitudes);
    let t = Utc.with_ymd_and_hms(1990, 6, 15, 12, 30, 0).unwrap();
    compute_reading(&eph, t, 40.7128, -74.0060).unwrap()
}

#[test]
fn sun_at_15_degrees_is_aries() {
    let r = reading_at(&[(Planet::Sun, 15.0)]);
    let p = &r.placements[0];
    assert_eq!(p.zodiac.sign.name(), "Aries");
    assert!((p.zodiac.degree_in_sign - 15.0).abs() < 1e-12);
    assert!((p.zodiac.absolute_degree - 15.0).abs() < 1e-12);
}

#[test]
fn longitudes_10_and_130_form_a_trine() {
    let r = reading_at(&[(Planet::Sun, 10.0), (Planet::Moon, 130.0)]);
    assert_eq!(r.aspects.len(), 1);
    let a = &r.aspects[0];
    assert_eq!(a.kind, AspectKind::Trine);
    assert_eq!(a.quality, Quality::Harmonious);
    assert!((a.separation_deg - 120.0).abs() < 1e-12);
}

#[test]
fn planet_on_ascendant_sits_in_house_one() {
    // two passes: read the ascendant off an empty chart, then place a
    // body exactly on it
    let empty = reading_at(&[]);
    let asc = empty.angles.ascendant_deg;
    let r = reading_at(&[(Planet::Sun, asc)]);
    assert_eq!(r.placements[0].house, 1);
}

#[test]
fn sun_venus_trine_connects_tiphereth_and_netzach() {
    let r = reading_at(&[(Planet::Sun, 0.0), (Planet::Venus, 120.0)]);
    assert_eq!(
        r.tree.illuminated,
        vec![Sephirah::Tiphereth, Sephirah::Netzach]
    );
    assert_eq!(
        r.tree.component_nodes,
        vec![Sephirah::Tiphereth, Sephirah::Netzach]
    );
    // the one internal edge is path 24 (Nun)
    assert_eq!(r.tree.component_paths, vec![24]);
    // Tiphereth 1081 + Netzach 148 + Nun 50
    assert_eq!(r.tree.gematria.total, 1279);
    assert_eq!(r.tree.gematria.digit_root, 1);
}

#[test]
fn birth_input_drives_a_full_reading() {
    let raw = RawBirthInput {
        date: Some("1986-07-04".into()),
        time: Some("09:15".into()),
        zone: Some("America/New_York".into()),
        latitude: Some(40.7128),
        longitude: Some(-74.0060),
    };
    let input = raw.validate().unwrap();
    let eph = FixedEphemeris::from_longitudes(&[
        (Planet::Sun, 102.3),
        (Planet::Moon, 215.8),
        (Planet::Saturn, 243.1),
    ]);
    let r = compute_reading_for_birth(&eph, &input).unwrap();
    // EDT in July: 09:15 local is 13:15 UTC
    assert_eq!(r.instant, Utc.with_ymd_and_hms(1986, 7, 4, 13, 15, 0).unwrap());
    assert_eq!(r.placements.len(), 3);
}

#[test]
fn reading_survives_json_round_trip() {
    let r = reading_at(&[(Planet::Sun, 84.2), (Planet::Mars, 5.1)]);
    let json = serde_json::to_string_pretty(&r).unwrap();
    let back: Reading = serde_json::from_str(&json).unwrap();
    assert_eq!(r, back);
}

#[test]
fn request_and_response_shapes_agree() {
    let r = reading_at(&[(Planet::Sun, 10.0), (Planet::Moon, 130.0)]);
    let req = build_request(&r);
    let payload = serde_json::to_string(&req).unwrap();
    assert!(payload.contains("graph_summary") || payload.contains("preamble"));

    let response = r#"{
        "graph_summary": "Two spheres alight.",
        "symbolic_reading": "Sun trine Moon.",
        "final_interpretation": "Inner and outer agree.",
        "divine_key": "The key is one."
    }"#;
    let parsed = parse_interpretation(response).unwrap();
    assert_eq!(parsed.graph_summary, "Two spheres alight.");
}
