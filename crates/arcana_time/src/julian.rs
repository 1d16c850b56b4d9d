//! Julian Date conversion.

use chrono::{DateTime, Utc};

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date (UTC scale) of an instant.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    let secs = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_millis()) / 1000.0;
    UNIX_EPOCH_JD + secs / 86_400.0
}

/// Julian centuries from J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unix_epoch() {
        let t = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert!((julian_day(t) - 2_440_587.5).abs() < 1e-9);
    }

    #[test]
    fn j2000_noon() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(t) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn day_advances_by_one() {
        let a = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 3, 21, 0, 0, 0).unwrap();
        assert!((julian_day(b) - julian_day(a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn centuries_at_j2000() {
        assert!(julian_centuries(J2000_JD).abs() < 1e-15);
    }

    #[test]
    fn centuries_one_century_later() {
        assert!((julian_centuries(J2000_JD + 36_525.0) - 1.0).abs() < 1e-15);
    }
}
