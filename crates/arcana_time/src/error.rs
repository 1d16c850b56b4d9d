//! Error types for civil time resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time parsing.
///
/// Note that an unknown timezone label is *not* an error: it degrades to
/// UTC+0 with a logged warning (see [`crate::resolve_utc_instant`]).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Time string is not a valid `HH:MM` or `HH:MM:SS` clock time.
    InvalidTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date: {s}"),
            Self::InvalidTime(s) => write!(f, "invalid time: {s}"),
        }
    }
}

impl Error for TimeError {}
