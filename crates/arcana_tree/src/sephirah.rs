//! The sephiroth (spheres) of the Tree of Life.
//!
//! Eleven nodes: the ten canonical emanations plus Daath, the hidden
//! sphere at the Abyss. Each carries its Hebrew spelling and the
//! gematria value of that spelling. The ten chart planets map one-to-one
//! onto the ten canonical spheres (modern scheme); Daath has no planet.

use serde::{Deserialize, Serialize};

use arcana_chart::Planet;

/// The 11 sephiroth, in descent order from Kether to Malkuth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sephirah {
    Kether,
    Chokmah,
    Binah,
    Daath,
    Chesed,
    Geburah,
    Tiphereth,
    Netzach,
    Hod,
    Yesod,
    Malkuth,
}

/// All 11 sephiroth in descent order.
pub const ALL_SEPHIROTH: [Sephirah; 11] = [
    Sephirah::Kether,
    Sephirah::Chokmah,
    Sephirah::Binah,
    Sephirah::Daath,
    Sephirah::Chesed,
    Sephirah::Geburah,
    Sephirah::Tiphereth,
    Sephirah::Netzach,
    Sephirah::Hod,
    Sephirah::Yesod,
    Sephirah::Malkuth,
];

impl Sephirah {
    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kether => "Kether",
            Self::Chokmah => "Chokmah",
            Self::Binah => "Binah",
            Self::Daath => "Daath",
            Self::Chesed => "Chesed",
            Self::Geburah => "Geburah",
            Self::Tiphereth => "Tiphereth",
            Self::Netzach => "Netzach",
            Self::Hod => "Hod",
            Self::Yesod => "Yesod",
            Self::Malkuth => "Malkuth",
        }
    }

    /// Hebrew spelling.
    pub const fn hebrew(self) -> &'static str {
        match self {
            Self::Kether => "כתר",
            Self::Chokmah => "חכמה",
            Self::Binah => "בינה",
            Self::Daath => "דעת",
            Self::Chesed => "חסד",
            Self::Geburah => "גבורה",
            Self::Tiphereth => "תפארת",
            Self::Netzach => "נצח",
            Self::Hod => "הוד",
            Self::Yesod => "יסוד",
            Self::Malkuth => "מלכות",
        }
    }

    /// Gematria value of the Hebrew spelling.
    pub const fn gematria_value(self) -> u32 {
        match self {
            Self::Kether => 620,
            Self::Chokmah => 73,
            Self::Binah => 67,
            Self::Daath => 474,
            Self::Chesed => 72,
            Self::Geburah => 216,
            Self::Tiphereth => 1081,
            Self::Netzach => 148,
            Self::Hod => 15,
            Self::Yesod => 80,
            Self::Malkuth => 496,
        }
    }

    /// 0-based index into [`ALL_SEPHIROTH`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Kether => 0,
            Self::Chokmah => 1,
            Self::Binah => 2,
            Self::Daath => 3,
            Self::Chesed => 4,
            Self::Geburah => 5,
            Self::Tiphereth => 6,
            Self::Netzach => 7,
            Self::Hod => 8,
            Self::Yesod => 9,
            Self::Malkuth => 10,
        }
    }

    /// Daath is the non-canonical hidden sphere.
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Daath)
    }

    /// Parse a transliterated name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_SEPHIROTH.iter().copied().find(|s| s.name() == name)
    }
}

/// Sphere occupied by a planet (modern attribution).
///
/// Bijective over the 10 planets and the 10 canonical spheres; Daath is
/// never a target.
pub const fn planet_sephirah(planet: Planet) -> Sephirah {
    match planet {
        Planet::Sun => Sephirah::Tiphereth,
        Planet::Moon => Sephirah::Yesod,
        Planet::Mercury => Sephirah::Hod,
        Planet::Venus => Sephirah::Netzach,
        Planet::Mars => Sephirah::Geburah,
        Planet::Jupiter => Sephirah::Chesed,
        Planet::Saturn => Sephirah::Binah,
        Planet::Uranus => Sephirah::Chokmah,
        Planet::Neptune => Sephirah::Kether,
        Planet::Pluto => Sephirah::Malkuth,
    }
}
