//! Birth input validation.
//!
//! Input arrives from the UI as loosely-filled JSON; validation rejects
//! it before any computation, naming the first missing field.

use serde::{Deserialize, Serialize};

use crate::error::ReadingError;

/// Birth data as submitted, fields individually optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBirthInput {
    pub date: Option<String>,
    pub time: Option<String>,
    pub zone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Validated birth data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`
    pub time: String,
    /// IANA zone name or fixed abbreviation.
    pub zone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl RawBirthInput {
    /// Validate presence of every field.
    ///
    /// The zone is the one field with a soft default: an absent zone
    /// means UTC, matching the unknown-label fallback downstream.
    pub fn validate(self) -> Result<BirthInput, ReadingError> {
        let date = self.date.ok_or(ReadingError::MissingField("date"))?;
        let time = self.time.ok_or(ReadingError::MissingField("time"))?;
        let zone = self.zone.unwrap_or_else(|| "UTC".to_string());
        let latitude = self.latitude.ok_or(ReadingError::MissingField("latitude"))?;
        let longitude = self
            .longitude
            .ok_or(ReadingError::MissingField("longitude"))?;
        Ok(BirthInput {
            date,
            time,
            zone,
            latitude,
            longitude,
        })
    }
}
