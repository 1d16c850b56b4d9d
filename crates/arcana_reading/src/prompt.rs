//! The LLM boundary.
//!
//! Builds the structured payload an external text-generation endpoint
//! receives, and validates the structured response it is asked to
//! return. Transport is out of scope; this module only defines the
//! shapes and the prompt text.

use serde::{Deserialize, Serialize};

use arcana_chart::Planet;
use arcana_tree::{HebrewLetter, Sephirah, World};

use crate::error::ReadingError;
use crate::narrative::{placement_sentence, summary};
use crate::reading::Reading;

/// Instruction block prepended to every interpretation request. The
/// endpoint is asked for JSON matching [`StructuredInterpretation`].
pub const INTERPRETATION_PREAMBLE: &str = "You are an interpreter of \
natal charts read through the Tree of Life. Using the chart data that \
follows, reply with a single JSON object containing exactly these \
string fields: \"graph_summary\" (the state of the Tree), \
\"symbolic_reading\" (planet-by-planet symbolism), \
\"final_interpretation\" (a synthesis for the querent), and \
\"divine_key\" (one sentence on the gematria key). No text outside \
the JSON object.";

/// Chart data serialized into the interpretation request.
#[derive(Debug, Clone, Serialize)]
pub struct InterpretationRequest {
    pub preamble: &'static str,
    /// Deterministic template output; the endpoint embellishes, never
    /// recomputes.
    pub narrative_seed: String,
    pub placements: Vec<PlacementSummary>,
    pub aspects: Vec<AspectSummary>,
    pub illuminated: Vec<Sephirah>,
    pub component_nodes: Vec<Sephirah>,
    pub component_letters: Vec<HebrewLetter>,
    pub gematria_total: u32,
    pub gematria_key: u32,
    pub dominant_world: Option<World>,
}

/// One placement, flattened for the prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PlacementSummary {
    pub planet: Planet,
    pub sign: &'static str,
    pub house: u8,
    pub sephirah: Sephirah,
    pub sentence: String,
}

/// One aspect, flattened for the prompt.
#[derive(Debug, Clone, Serialize)]
pub struct AspectSummary {
    pub body_a: Planet,
    pub body_b: Planet,
    pub kind: &'static str,
    pub quality: &'static str,
    pub deviation_deg: f64,
}

/// The fixed response schema the endpoint must return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredInterpretation {
    pub graph_summary: String,
    pub symbolic_reading: String,
    pub final_interpretation: String,
    pub divine_key: String,
}

/// Build the interpretation request for a reading.
pub fn build_request(reading: &Reading) -> InterpretationRequest {
    let placements = reading
        .placements
        .iter()
        .map(|p| PlacementSummary {
            planet: p.planet,
            sign: p.zodiac.sign.name(),
            house: p.house,
            sephirah: p.sephirah,
            sentence: placement_sentence(p),
        })
        .collect();
    let aspects = reading
        .aspects
        .iter()
        .map(|a| AspectSummary {
            body_a: a.body_a,
            body_b: a.body_b,
            kind: a.kind.name(),
            quality: a.quality.name(),
            deviation_deg: a.deviation_deg,
        })
        .collect();
    InterpretationRequest {
        preamble: INTERPRETATION_PREAMBLE,
        narrative_seed: summary(reading),
        placements,
        aspects,
        illuminated: reading.tree.illuminated.clone(),
        component_nodes: reading.tree.component_nodes.clone(),
        component_letters: reading
            .tree
            .edges
            .iter()
            .filter(|e| reading.tree.component_paths.contains(&e.path_number))
            .map(|e| e.letter)
            .collect(),
        gematria_total: reading.tree.gematria.total,
        gematria_key: reading.tree.gematria.digit_root,
        dominant_world: reading.worlds.dominant,
    }
}

/// Parse the endpoint's response against the fixed schema.
///
/// A response that is not valid JSON, or that lacks any of the four
/// fields, is rejected; the caller shows a generic failure message and
/// keeps displaying the structured reading.
pub fn parse_interpretation(body: &str) -> Result<StructuredInterpretation, ReadingError> {
    serde_json::from_str(body).map_err(ReadingError::MalformedInterpretation)
}
