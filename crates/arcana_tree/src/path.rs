//! The 22 paths joining the sephiroth.
//!
//! Golden Dawn attribution: each path carries a Hebrew letter, and the
//! twelve single letters carry the twelve zodiac signs. Daath touches no
//! path — the hidden sphere connects only through its absence.

use arcana_chart::Sign;

use crate::letter::HebrewLetter;
use crate::sephirah::Sephirah;

/// A path between two sephiroth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathDef {
    /// Traditional path number, 11..=32.
    pub number: u8,
    pub letter: HebrewLetter,
    pub from: Sephirah,
    pub to: Sephirah,
    /// Zodiacal attribution, for the 12 single-letter paths.
    pub sign: Option<Sign>,
}

/// All 22 paths in traditional numbering order.
pub const ALL_PATHS: [PathDef; 22] = [
    PathDef { number: 11, letter: HebrewLetter::Aleph, from: Sephirah::Kether, to: Sephirah::Chokmah, sign: None },
    PathDef { number: 12, letter: HebrewLetter::Beth, from: Sephirah::Kether, to: Sephirah::Binah, sign: None },
    PathDef { number: 13, letter: HebrewLetter::Gimel, from: Sephirah::Kether, to: Sephirah::Tiphereth, sign: None },
    PathDef { number: 14, letter: HebrewLetter::Daleth, from: Sephirah::Chokmah, to: Sephirah::Binah, sign: None },
    PathDef { number: 15, letter: HebrewLetter::Heh, from: Sephirah::Chokmah, to: Sephirah::Tiphereth, sign: Some(Sign::Aries) },
    PathDef { number: 16, letter: HebrewLetter::Vav, from: Sephirah::Chokmah, to: Sephirah::Chesed, sign: Some(Sign::Taurus) },
    PathDef { number: 17, letter: HebrewLetter::Zayin, from: Sephirah::Binah, to: Sephirah::Tiphereth, sign: Some(Sign::Gemini) },
    PathDef { number: 18, letter: HebrewLetter::Cheth, from: Sephirah::Binah, to: Sephirah::Geburah, sign: Some(Sign::Cancer) },
    PathDef { number: 19, letter: HebrewLetter::Teth, from: Sephirah::Chesed, to: Sephirah::Geburah, sign: Some(Sign::Leo) },
    PathDef { number: 20, letter: HebrewLetter::Yod, from: Sephirah::Chesed, to: Sephirah::Tiphereth, sign: Some(Sign::Virgo) },
    PathDef { number: 21, letter: HebrewLetter::Kaph, from: Sephirah::Chesed, to: Sephirah::Netzach, sign: None },
    PathDef { number: 22, letter: HebrewLetter::Lamed, from: Sephirah::Geburah, to: Sephirah::Tiphereth, sign: Some(Sign::Libra) },
    PathDef { number: 23, letter: HebrewLetter::Mem, from: Sephirah::Geburah, to: Sephirah::Hod, sign: None },
    PathDef { number: 24, letter: HebrewLetter::Nun, from: Sephirah::Tiphereth, to: Sephirah::Netzach, sign: Some(Sign::Scorpio) },
    PathDef { number: 25, letter: HebrewLetter::Samekh, from: Sephirah::Tiphereth, to: Sephirah::Yesod, sign: Some(Sign::Sagittarius) },
    PathDef { number: 26, letter: HebrewLetter::Ayin, from: Sephirah::Tiphereth, to: Sephirah::Hod, sign: Some(Sign::Capricorn) },
    PathDef { number: 27, letter: HebrewLetter::Peh, from: Sephirah::Netzach, to: Sephirah::Hod, sign: None },
    PathDef { number: 28, letter: HebrewLetter::Tzaddi, from: Sephirah::Netzach, to: Sephirah::Yesod, sign: Some(Sign::Aquarius) },
    PathDef { number: 29, letter: HebrewLetter::Qoph, from: Sephirah::Netzach, to: Sephirah::Malkuth, sign: Some(Sign::Pisces) },
    PathDef { number: 30, letter: HebrewLetter::Resh, from: Sephirah::Hod, to: Sephirah::Yesod, sign: None },
    PathDef { number: 31, letter: HebrewLetter::Shin, from: Sephirah::Hod, to: Sephirah::Malkuth, sign: None },
    PathDef { number: 32, letter: HebrewLetter::Tav, from: Sephirah::Yesod, to: Sephirah::Malkuth, sign: None },
];

/// The path carrying a zodiac sign.
pub const fn path_for_sign(sign: Sign) -> &'static PathDef {
    match sign {
        Sign::Aries => &ALL_PATHS[4],
        Sign::Taurus => &ALL_PATHS[5],
        Sign::Gemini => &ALL_PATHS[6],
        Sign::Cancer => &ALL_PATHS[7],
        Sign::Leo => &ALL_PATHS[8],
        Sign::Virgo => &ALL_PATHS[9],
        Sign::Libra => &ALL_PATHS[11],
        Sign::Scorpio => &ALL_PATHS[13],
        Sign::Sagittarius => &ALL_PATHS[14],
        Sign::Capricorn => &ALL_PATHS[15],
        Sign::Aquarius => &ALL_PATHS[17],
        Sign::Pisces => &ALL_PATHS[18],
    }
}

/// The path joining two sephiroth, if one exists (unordered endpoints).
pub fn path_between(a: Sephirah, b: Sephirah) -> Option<&'static PathDef> {
    ALL_PATHS
        .iter()
        .find(|p| (p.from == a && p.to == b) || (p.from == b && p.to == a))
}
