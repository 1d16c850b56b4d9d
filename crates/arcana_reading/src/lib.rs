//! Reading orchestration: birth input to structured reading to
//! narrative text and LLM prompt.
//!
//! The calculation crates underneath are pure; this crate wires them
//! together behind the [`Ephemeris`](arcana_chart::Ephemeris) seam,
//! isolates per-planet failures, and owns the two text boundaries
//! (deterministic templates and the LLM request/response shapes).

pub mod ephemeris;
pub mod error;
pub mod input;
pub mod narrative;
pub mod prompt;
pub mod reading;

pub use ephemeris::FixedEphemeris;
pub use error::ReadingError;
pub use input::{BirthInput, RawBirthInput};
pub use narrative::{narrate, placement_sentence, summary};
pub use prompt::{
    INTERPRETATION_PREAMBLE, InterpretationRequest, StructuredInterpretation, build_request,
    parse_interpretation,
};
pub use reading::{
    EdgeReport, PlanetPlacement, Reading, TreeState, WorldBalance, compute_reading,
    compute_reading_for_birth,
};
