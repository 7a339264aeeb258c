//! Time-to-crack estimation
//!
//! Assumes an offline attacker enumerating the effective keyspace at a fixed
//! guess rate and finding the password halfway through on average.

use crate::error::{EngineError, Result};
use crate::utils::common::pluralize;

/// Offline guesses per second assumed by default (fast hash on GPU hardware)
pub const DEFAULT_GUESSES_PER_SECOND: f64 = 1e10;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const YEAR: f64 = 365.2425 * DAY;
const MONTH: f64 = YEAR / 12.0;

/// Converts effective entropy into a human-readable duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackTimeEstimator {
    guesses_per_second: f64,
}

impl Default for CrackTimeEstimator {
    fn default() -> Self {
        Self {
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,
        }
    }
}

impl CrackTimeEstimator {
    /// Estimator for a given guess rate; the rate must be positive and finite
    pub fn new(guesses_per_second: f64) -> Result<Self> {
        if !guesses_per_second.is_finite() || guesses_per_second <= 0.0 {
            return Err(EngineError::ConfigError(format!(
                "guesses per second must be positive, got {}",
                guesses_per_second
            )));
        }
        Ok(Self { guesses_per_second })
    }

    pub fn guesses_per_second(&self) -> f64 {
        self.guesses_per_second
    }

    /// Expected seconds to find a secret with `bits` of effective entropy
    pub fn seconds(&self, bits: f64) -> f64 {
        let keyspace = bits.max(0.0).exp2();
        (keyspace + 1.0) / 2.0 / self.guesses_per_second
    }

    /// Human-readable expected time for `bits` of effective entropy
    pub fn estimate(&self, bits: f64) -> String {
        format_duration(self.seconds(bits))
    }
}

/// Render a duration, collapsing huge magnitudes into descriptive buckets
pub fn format_duration(seconds: f64) -> String {
    if seconds.is_nan() || seconds < 1.0 {
        return "less than a second".to_string();
    }

    let whole = |unit: f64| (seconds / unit).floor() as u64;

    if seconds < MINUTE {
        pluralize(whole(1.0), "second")
    } else if seconds < HOUR {
        pluralize(whole(MINUTE), "minute")
    } else if seconds < DAY {
        pluralize(whole(HOUR), "hour")
    } else if seconds < MONTH {
        pluralize(whole(DAY), "day")
    } else if seconds < YEAR {
        pluralize(whole(MONTH), "month")
    } else if seconds < 100.0 * YEAR {
        pluralize(whole(YEAR), "year")
    } else if seconds < 1e3 * YEAR {
        "centuries".to_string()
    } else if seconds < 1e6 * YEAR {
        "thousands of years".to_string()
    } else if seconds < 1e9 * YEAR {
        "millions of years".to_string()
    } else {
        "billions of years".to_string()
    }
}
