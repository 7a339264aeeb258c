//! Strength scoring
//!
//! A text's effective entropy is the sum of per-position bits over the
//! alphabet implied by the classes it actually uses. Predictable positions
//! (repeats, ±1 steps, recurring characters) contribute less. The 0-100
//! score is a monotone map of that entropy.

use std::ops::RangeInclusive;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::common::CommonPasswords;
use crate::analysis::structure::{positions, AnalysisResult, Position};

/// Bits credited to a position that repeats or steps from its predecessor
const PREDICTABLE_BITS: f64 = 1.0;

/// Share of full bits credited to a character seen earlier in the text
const RECURRING_FACTOR: f64 = 0.5;

/// Highest score a common password can receive
pub const COMMON_SCORE_CEILING: u8 = 10;

/// Entropy that maps to `COMMON_SCORE_CEILING`; common passwords never exceed it
const COMMON_ENTROPY_CEILING: f64 = 14.0;

/// (entropy bits, score) anchors, linearly interpolated
const SCORE_ANCHORS: [(f64, f64); 9] = [
    (0.0, 0.0),
    (28.0, 20.0),
    (36.0, 40.0),
    (50.0, 60.0),
    (64.0, 80.0),
    (80.0, 90.0),
    (100.0, 95.0),
    (128.0, 99.0),
    (160.0, 100.0),
];

/// Color class of a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Red,
    Orange,
    Yellow,
    Green,
}

impl BandColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BandColor::Red => "red",
            BandColor::Orange => "orange",
            BandColor::Yellow => "yellow",
            BandColor::Green => "green",
        }
    }
}

/// One of the eight fixed score ranges shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrengthBand {
    VeryDangerous,
    Dangerous,
    VeryWeak,
    Weak,
    Good,
    Strong,
    VeryStrong,
    Invulnerable,
}

impl StrengthBand {
    pub const ALL: [StrengthBand; 8] = [
        StrengthBand::VeryDangerous,
        StrengthBand::Dangerous,
        StrengthBand::VeryWeak,
        StrengthBand::Weak,
        StrengthBand::Good,
        StrengthBand::Strong,
        StrengthBand::VeryStrong,
        StrengthBand::Invulnerable,
    ];

    /// Band for a score; anything above 100 counts as 100
    pub fn from_score(score: u8) -> StrengthBand {
        match score {
            0..=19 => StrengthBand::VeryDangerous,
            20..=39 => StrengthBand::Dangerous,
            40..=59 => StrengthBand::VeryWeak,
            60..=79 => StrengthBand::Weak,
            80..=89 => StrengthBand::Good,
            90..=94 => StrengthBand::Strong,
            95..=98 => StrengthBand::VeryStrong,
            _ => StrengthBand::Invulnerable,
        }
    }

    /// Scores covered by this band
    pub fn range(&self) -> RangeInclusive<u8> {
        match self {
            StrengthBand::VeryDangerous => 0..=19,
            StrengthBand::Dangerous => 20..=39,
            StrengthBand::VeryWeak => 40..=59,
            StrengthBand::Weak => 60..=79,
            StrengthBand::Good => 80..=89,
            StrengthBand::Strong => 90..=94,
            StrengthBand::VeryStrong => 95..=98,
            StrengthBand::Invulnerable => 99..=100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthBand::VeryDangerous => "VERY DANGEROUS",
            StrengthBand::Dangerous => "DANGEROUS",
            StrengthBand::VeryWeak => "VERY WEAK",
            StrengthBand::Weak => "WEAK",
            StrengthBand::Good => "GOOD",
            StrengthBand::Strong => "STRONG",
            StrengthBand::VeryStrong => "VERY STRONG",
            StrengthBand::Invulnerable => "INVULNERABLE",
        }
    }

    pub fn color(&self) -> BandColor {
        match self {
            StrengthBand::VeryDangerous | StrengthBand::Dangerous => BandColor::Red,
            StrengthBand::VeryWeak => BandColor::Orange,
            StrengthBand::Weak => BandColor::Yellow,
            _ => BandColor::Green,
        }
    }
}

/// Map effective entropy to a 0-100 score
pub fn score_from_entropy(bits: f64) -> u8 {
    if bits.is_nan() || bits <= 0.0 {
        return 0;
    }

    for pair in SCORE_ANCHORS.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if bits < x1 {
            let score = y0 + (bits - x0) / (x1 - x0) * (y1 - y0);
            return score.floor() as u8;
        }
    }

    100
}

/// Scores texts against a fixed common-password table
#[derive(Debug, Clone)]
pub struct StrengthScorer {
    common: Arc<CommonPasswords>,
}

impl Default for StrengthScorer {
    fn default() -> Self {
        Self::new(CommonPasswords::builtin())
    }
}

impl StrengthScorer {
    pub fn new(common: Arc<CommonPasswords>) -> Self {
        Self { common }
    }

    pub fn common_passwords(&self) -> &CommonPasswords {
        &self.common
    }

    /// Exact, case-sensitive membership in the common-password table
    pub fn is_common(&self, text: &str) -> bool {
        self.common.contains(text)
    }

    /// Effective entropy of `text` in bits.
    ///
    /// `analysis` must be the structural analysis of the same text.
    pub fn entropy_bits(&self, text: &str, analysis: &AnalysisResult) -> f64 {
        self.effective_entropy(text, analysis, self.is_common(text))
    }

    /// Score `text` from 0 to 100
    pub fn score(&self, text: &str, analysis: &AnalysisResult) -> u8 {
        let is_common = self.is_common(text);
        capped_score(self.effective_entropy(text, analysis, is_common), is_common)
    }

    /// Entropy with the common-password lookup already done by the caller
    pub(crate) fn effective_entropy(
        &self,
        text: &str,
        analysis: &AnalysisResult,
        is_common: bool,
    ) -> f64 {
        let pool = analysis.observed_pool_size();
        if pool == 0 {
            return 0.0;
        }

        let full = f64::from(pool).log2();
        let predictable = full.min(PREDICTABLE_BITS);
        let bits: f64 = positions(text)
            .into_iter()
            .map(|position| match position {
                Position::Fresh => full,
                Position::Recurring => full * RECURRING_FACTOR,
                Position::ConsecutiveRepeat | Position::Progressive => predictable,
            })
            .sum();

        if is_common {
            bits.min(self.common.guess_bits()).min(COMMON_ENTROPY_CEILING)
        } else {
            bits
        }
    }
}

/// Score for already computed entropy, clamped for common passwords
pub(crate) fn capped_score(bits: f64, is_common: bool) -> u8 {
    let score = score_from_entropy(bits);
    if is_common {
        score.min(COMMON_SCORE_CEILING)
    } else {
        score
    }
}
