//! Character classes and the similar-character exclusion set

use serde::{Deserialize, Serialize};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// The 32 ASCII punctuation characters
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const SPACE: &str = " ";

/// Visually ambiguous glyphs removed when similar characters are excluded
pub const SIMILAR_CHARACTERS: &str = "iIl1Lo0O\"'`|";

/// A character class the generator can draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
    Space,
}

impl CharClass {
    pub const ALL: [CharClass; 5] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
        CharClass::Space,
    ];

    /// Every character of the class
    pub fn characters(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
            CharClass::Space => SPACE,
        }
    }

    /// Characters of the class available for generation
    pub fn pool(self, exclude_similar: bool) -> Vec<char> {
        self.characters()
            .chars()
            .filter(|c| !exclude_similar || !is_similar(*c))
            .collect()
    }

    /// Class of a generatable character, `None` for anything outside the five sets
    pub fn of(c: char) -> Option<CharClass> {
        match c {
            'a'..='z' => Some(CharClass::Lowercase),
            'A'..='Z' => Some(CharClass::Uppercase),
            '0'..='9' => Some(CharClass::Digit),
            ' ' => Some(CharClass::Space),
            c if c.is_ascii_punctuation() => Some(CharClass::Symbol),
            _ => None,
        }
    }
}

/// Whether `c` belongs to the similar-character set
pub fn is_similar(c: char) -> bool {
    SIMILAR_CHARACTERS.contains(c)
}
