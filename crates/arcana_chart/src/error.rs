//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use arcana_time::TimeError;

/// Errors from chart-level computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from civil time resolution.
    Time(TimeError),
    /// The angle axes leave no valid quadrants to divide.
    DegenerateAngles(&'static str),
    /// The external ephemeris provider failed for one body.
    Ephemeris(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::DegenerateAngles(msg) => write!(f, "degenerate angles: {msg}"),
            Self::Ephemeris(msg) => write!(f, "ephemeris error: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
