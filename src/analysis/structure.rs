//! Structural character analysis
//!
//! Classifies every character and counts repetitions and progressions.
//! Works on any text, generated or typed by the user.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::generator::charset::CharClass;

/// Pool size assumed for characters outside the ASCII classes
pub const OTHER_POOL_SIZE: u32 = 100;

/// Class of a single analysed character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharKind {
    Lowercase,
    Uppercase,
    Digit,
    Space,
    Symbol,
    Other,
}

impl CharKind {
    pub fn of(c: char) -> CharKind {
        match CharClass::of(c) {
            Some(CharClass::Lowercase) => CharKind::Lowercase,
            Some(CharClass::Uppercase) => CharKind::Uppercase,
            Some(CharClass::Digit) => CharKind::Digit,
            Some(CharClass::Space) => CharKind::Space,
            Some(CharClass::Symbol) => CharKind::Symbol,
            None => CharKind::Other,
        }
    }

    /// Number of characters an attacker must consider for this class
    pub fn pool_size(self) -> u32 {
        match self {
            CharKind::Lowercase | CharKind::Uppercase => 26,
            CharKind::Digit => 10,
            CharKind::Space => 1,
            CharKind::Symbol => 32,
            CharKind::Other => OTHER_POOL_SIZE,
        }
    }
}

/// How predictable a position is given the characters before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Not explained by anything earlier
    Fresh,
    /// Same character as the previous one
    ConsecutiveRepeat,
    /// Code point one above or below the previous one
    Progressive,
    /// Character seen earlier, but not directly before
    Recurring,
}

/// Whether two adjacent characters form an ascending or descending step
pub fn is_progressive(prev: char, next: char) -> bool {
    (prev as u32).abs_diff(next as u32) == 1
}

/// Classify every position of `text`.
///
/// A position's kind depends only on the characters before it, so appending
/// to a text never changes the kinds already assigned.
pub fn positions(text: &str) -> Vec<Position> {
    let mut seen = HashSet::new();
    let mut prev: Option<char> = None;

    text.chars()
        .map(|c| {
            let kind = match prev {
                Some(p) if p == c => Position::ConsecutiveRepeat,
                Some(p) if is_progressive(p, c) => Position::Progressive,
                _ if seen.contains(&c) => Position::Recurring,
                _ => Position::Fresh,
            };
            seen.insert(c);
            prev = Some(c);
            kind
        })
        .collect()
}

/// Counts and derived values for one analysed text.
///
/// The structural analyzer fills the counts; `is_common`, `score` and
/// `crack_time` are merged in by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub length: usize,
    pub lowercase_count: usize,
    pub uppercase_count: usize,
    pub number_count: usize,
    pub space_count: usize,
    pub symbol_count: usize,
    pub other_count: usize,
    /// Adjacent pairs of equal characters
    pub consecutive_repeat_count: usize,
    /// Later occurrences of an already-seen character whose predecessor differs
    pub non_consecutive_repeat_count: usize,
    /// Adjacent pairs whose code points differ by exactly one
    pub progressive_count: usize,
    pub is_common: bool,
    pub score: u8,
    pub crack_time: String,
}

impl AnalysisResult {
    /// Classes present in the text
    pub fn observed_kinds(&self) -> Vec<CharKind> {
        [
            (CharKind::Lowercase, self.lowercase_count),
            (CharKind::Uppercase, self.uppercase_count),
            (CharKind::Digit, self.number_count),
            (CharKind::Space, self.space_count),
            (CharKind::Symbol, self.symbol_count),
            (CharKind::Other, self.other_count),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(kind, _)| kind)
        .collect()
    }

    /// Alphabet size implied by the classes actually present
    pub fn observed_pool_size(&self) -> u32 {
        self.observed_kinds().into_iter().map(CharKind::pool_size).sum()
    }

    /// Sum of the six class counts; always equals `length`
    pub fn class_total(&self) -> usize {
        self.lowercase_count
            + self.uppercase_count
            + self.number_count
            + self.space_count
            + self.symbol_count
            + self.other_count
    }
}

/// Count classes, repetitions and progressions of `text`
pub fn analyze_structure(text: &str) -> AnalysisResult {
    let mut result = AnalysisResult::default();
    let chars: Vec<char> = text.chars().collect();
    result.length = chars.len();

    for c in &chars {
        match CharKind::of(*c) {
            CharKind::Lowercase => result.lowercase_count += 1,
            CharKind::Uppercase => result.uppercase_count += 1,
            CharKind::Digit => result.number_count += 1,
            CharKind::Space => result.space_count += 1,
            CharKind::Symbol => result.symbol_count += 1,
            CharKind::Other => result.other_count += 1,
        }
    }

    for pair in chars.windows(2) {
        if pair[0] == pair[1] {
            result.consecutive_repeat_count += 1;
        } else if is_progressive(pair[0], pair[1]) {
            result.progressive_count += 1;
        }
    }

    let mut seen = HashSet::new();
    for (i, c) in chars.iter().enumerate() {
        let after_same = i > 0 && chars[i - 1] == *c;
        if !seen.insert(*c) && !after_same {
            result.non_consecutive_repeat_count += 1;
        }
    }

    result
}
