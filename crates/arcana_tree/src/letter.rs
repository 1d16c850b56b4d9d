//! The 22 Hebrew letters and their gematria values.

use serde::{Deserialize, Serialize};

/// The 22 letters of the Hebrew alphabet, in alphabetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HebrewLetter {
    Aleph,
    Beth,
    Gimel,
    Daleth,
    Heh,
    Vav,
    Zayin,
    Cheth,
    Teth,
    Yod,
    Kaph,
    Lamed,
    Mem,
    Nun,
    Samekh,
    Ayin,
    Peh,
    Tzaddi,
    Qoph,
    Resh,
    Shin,
    Tav,
}

/// All 22 letters in alphabetical order.
pub const ALL_LETTERS: [HebrewLetter; 22] = [
    HebrewLetter::Aleph,
    HebrewLetter::Beth,
    HebrewLetter::Gimel,
    HebrewLetter::Daleth,
    HebrewLetter::Heh,
    HebrewLetter::Vav,
    HebrewLetter::Zayin,
    HebrewLetter::Cheth,
    HebrewLetter::Teth,
    HebrewLetter::Yod,
    HebrewLetter::Kaph,
    HebrewLetter::Lamed,
    HebrewLetter::Mem,
    HebrewLetter::Nun,
    HebrewLetter::Samekh,
    HebrewLetter::Ayin,
    HebrewLetter::Peh,
    HebrewLetter::Tzaddi,
    HebrewLetter::Qoph,
    HebrewLetter::Resh,
    HebrewLetter::Shin,
    HebrewLetter::Tav,
];

impl HebrewLetter {
    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aleph => "Aleph",
            Self::Beth => "Beth",
            Self::Gimel => "Gimel",
            Self::Daleth => "Daleth",
            Self::Heh => "Heh",
            Self::Vav => "Vav",
            Self::Zayin => "Zayin",
            Self::Cheth => "Cheth",
            Self::Teth => "Teth",
            Self::Yod => "Yod",
            Self::Kaph => "Kaph",
            Self::Lamed => "Lamed",
            Self::Mem => "Mem",
            Self::Nun => "Nun",
            Self::Samekh => "Samekh",
            Self::Ayin => "Ayin",
            Self::Peh => "Peh",
            Self::Tzaddi => "Tzaddi",
            Self::Qoph => "Qoph",
            Self::Resh => "Resh",
            Self::Shin => "Shin",
            Self::Tav => "Tav",
        }
    }

    /// Hebrew glyph.
    pub const fn glyph(self) -> char {
        match self {
            Self::Aleph => 'א',
            Self::Beth => 'ב',
            Self::Gimel => 'ג',
            Self::Daleth => 'ד',
            Self::Heh => 'ה',
            Self::Vav => 'ו',
            Self::Zayin => 'ז',
            Self::Cheth => 'ח',
            Self::Teth => 'ט',
            Self::Yod => 'י',
            Self::Kaph => 'כ',
            Self::Lamed => 'ל',
            Self::Mem => 'מ',
            Self::Nun => 'נ',
            Self::Samekh => 'ס',
            Self::Ayin => 'ע',
            Self::Peh => 'פ',
            Self::Tzaddi => 'צ',
            Self::Qoph => 'ק',
            Self::Resh => 'ר',
            Self::Shin => 'ש',
            Self::Tav => 'ת',
        }
    }

    /// Standard gematria value (units, tens, hundreds).
    pub const fn gematria_value(self) -> u32 {
        match self {
            Self::Aleph => 1,
            Self::Beth => 2,
            Self::Gimel => 3,
            Self::Daleth => 4,
            Self::Heh => 5,
            Self::Vav => 6,
            Self::Zayin => 7,
            Self::Cheth => 8,
            Self::Teth => 9,
            Self::Yod => 10,
            Self::Kaph => 20,
            Self::Lamed => 30,
            Self::Mem => 40,
            Self::Nun => 50,
            Self::Samekh => 60,
            Self::Ayin => 70,
            Self::Peh => 80,
            Self::Tzaddi => 90,
            Self::Qoph => 100,
            Self::Resh => 200,
            Self::Shin => 300,
            Self::Tav => 400,
        }
    }

    /// Parse a transliterated name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_LETTERS.iter().copied().find(|l| l.name() == name)
    }
}
