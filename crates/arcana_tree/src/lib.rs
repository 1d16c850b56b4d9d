//! Tree of Life correspondences and analysis.
//!
//! This crate provides:
//! - `Sephirah` / `HebrewLetter` enums with name, Hebrew, and gematria
//!   tables, and the 22-path edge table with zodiacal attributions
//! - planet→sephirah and house→life-domain correspondences
//! - illumination and connected-component analysis of the Tree
//! - gematria summation with digit-root reduction
//! - Four-Worlds weighted placement scoring
//!
//! All tables are immutable module-level constants; every function is a
//! pure function of its inputs.

pub mod domain;
pub mod gematria;
pub mod graph;
pub mod letter;
pub mod path;
pub mod sephirah;
pub mod worlds;

pub use domain::house_domain;
pub use gematria::{GematriaSum, TokenValue, digit_root, gematria_sum, token_value};
pub use graph::{
    ClassifiedEdge, Component, EdgeState, SephirahSet, classify_edges, illuminated_sephiroth,
    largest_component,
};
pub use letter::{ALL_LETTERS, HebrewLetter};
pub use path::{ALL_PATHS, PathDef, path_between, path_for_sign};
pub use sephirah::{ALL_SEPHIROTH, Sephirah, planet_sephirah};
pub use worlds::{
    ALL_WORLDS, World, WorldScore, aggregate_world_percentages, element_world, planet_world,
    quadrant_world, world_score_for,
};
