//! Shared angle utilities.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_in_range() {
        assert!((normalize_360(123.4) - 123.4).abs() < 1e-15);
    }

    #[test]
    fn full_turn() {
        assert!(normalize_360(360.0).abs() < 1e-15);
    }

    #[test]
    fn negative() {
        assert!((normalize_360(-30.0) - 330.0).abs() < 1e-12);
    }

    #[test]
    fn multiple_turns() {
        assert!((normalize_360(725.0) - 5.0).abs() < 1e-10);
        assert!((normalize_360(-725.0) - 355.0).abs() < 1e-10);
    }
}
