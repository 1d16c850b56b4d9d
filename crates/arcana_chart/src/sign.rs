//! Zodiac signs and placement of an ecliptic longitude.
//!
//! The tropical ecliptic is divided into 12 equal signs of 30 degrees,
//! starting from Aries at the vernal equinox (0 degrees).

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 tropical zodiac signs, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order.
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// The four classical elements, one per sign triplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Sign {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Element of the sign (triplicities repeat Fire-Earth-Air-Water).
    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }
}

/// A longitude expressed as sign + degree within the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPlacement {
    pub sign: Sign,
    /// Degrees into the sign, [0, 30).
    pub degree_in_sign: f64,
    /// Normalized absolute longitude, [0, 360).
    pub absolute_degree: f64,
}

/// Place an ecliptic longitude into the zodiac.
///
/// Total function: any finite input normalizes into [0, 360) first.
/// Invariant: `absolute_degree == sign.index() * 30 + degree_in_sign`.
pub fn zodiac_placement(longitude_deg: f64) -> ZodiacPlacement {
    let absolute = normalize_360(longitude_deg);
    // floor(absolute/30) is already in 0..12; the min guards the
    // absolute == 360.0-epsilon rounding edge
    let idx = ((absolute / 30.0).floor() as usize).min(11);
    ZodiacPlacement {
        sign: ALL_SIGNS[idx],
        degree_in_sign: absolute - idx as f64 * 30.0,
        absolute_degree: absolute,
    }
}
