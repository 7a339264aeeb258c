//! Password analysis: structure, common-password lookup, scoring and
//! crack-time estimation

pub mod common;
pub mod crack_time;
pub mod score;
pub mod structure;

pub use common::CommonPasswords;
pub use crack_time::{format_duration, CrackTimeEstimator};
pub use score::{score_from_entropy, BandColor, StrengthBand, StrengthScorer};
pub use structure::{analyze_structure, AnalysisResult, CharKind};
