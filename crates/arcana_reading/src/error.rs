//! Error types for reading computation and the LLM boundary.

use std::error::Error;
use std::fmt::{Display, Formatter};

use arcana_chart::ChartError;
use arcana_time::TimeError;

/// Errors from reading orchestration.
#[derive(Debug)]
#[non_exhaustive]
pub enum ReadingError {
    /// Error from chart geometry.
    Chart(ChartError),
    /// Error from civil time resolution.
    Time(TimeError),
    /// A required birth-input field is absent.
    MissingField(&'static str),
    /// The structured interpretation response failed to parse.
    MalformedInterpretation(serde_json::Error),
}

impl Display for ReadingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(e) => write!(f, "chart error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::MissingField(field) => write!(f, "missing birth input field: {field}"),
            Self::MalformedInterpretation(e) => {
                write!(f, "malformed interpretation response: {e}")
            }
        }
    }
}

impl Error for ReadingError {}

impl From<ChartError> for ReadingError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<TimeError> for ReadingError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
