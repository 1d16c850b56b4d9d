//! House-to-life-domain correspondence.

/// Life domain governed by a house (1..=12). Returns `None` outside the
/// valid range.
pub const fn house_domain(house: u8) -> Option<&'static str> {
    Some(match house {
        1 => "self and appearance",
        2 => "resources and values",
        3 => "communication and kin",
        4 => "home and roots",
        5 => "creativity and pleasure",
        6 => "service and health",
        7 => "partnership",
        8 => "transformation and shared bonds",
        9 => "philosophy and far journeys",
        10 => "vocation and standing",
        11 => "community and hopes",
        12 => "seclusion and the unseen",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_houses_mapped() {
        for h in 1..=12u8 {
            assert!(house_domain(h).is_some(), "house {h}");
        }
    }

    #[test]
    fn out_of_range() {
        assert!(house_domain(0).is_none());
        assert!(house_domain(13).is_none());
    }

    #[test]
    fn domains_distinct() {
        let mut seen = Vec::new();
        for h in 1..=12u8 {
            let d = house_domain(h).unwrap();
            assert!(!seen.contains(&d));
            seen.push(d);
        }
    }
}
