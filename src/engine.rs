//! Engine facade
//!
//! [`PasswordEngine`] owns the read-only tables (common passwords, word list)
//! and the estimator settings, and exposes every operation the presentation
//! layer calls. It holds no per-call state, so one instance can serve any
//! number of concurrent callers.

use std::sync::{Arc, LazyLock};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::common::CommonPasswords;
use crate::analysis::crack_time::CrackTimeEstimator;
use crate::analysis::score::{capped_score, StrengthBand, StrengthScorer};
use crate::analysis::structure::{analyze_structure, AnalysisResult};
use crate::config::EngineConfig;
use crate::crypto::random::secure_rng;
use crate::error::Result;
use crate::generator::passphrase::{build_passphrase_with, generate_words_with, PassphraseConfig};
use crate::generator::password::{generate_password_with, GenerationConfig};
use crate::generator::pin::{generate_pin_with, PinConfig};
use crate::generator::words::{PrefixForm, WordForm, WordList};

static DEFAULT_ENGINE: LazyLock<PasswordEngine> = LazyLock::new(PasswordEngine::default);

/// Everything derived from one strength evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strength {
    pub entropy_bits: f64,
    pub score: u8,
    pub band: StrengthBand,
    pub crack_time: String,
}

/// Stateless password engine
#[derive(Clone)]
pub struct PasswordEngine {
    scorer: StrengthScorer,
    estimator: CrackTimeEstimator,
    words: Arc<WordList>,
    word_form: Arc<dyn WordForm>,
}

impl Default for PasswordEngine {
    fn default() -> Self {
        Self {
            scorer: StrengthScorer::default(),
            estimator: CrackTimeEstimator::default(),
            words: WordList::builtin(),
            word_form: Arc::new(PrefixForm::default()),
        }
    }
}

impl PasswordEngine {
    /// The process-wide engine built from defaults
    pub fn shared() -> &'static PasswordEngine {
        &DEFAULT_ENGINE
    }

    /// Build an engine, loading any replacement tables the config names
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let common = match &config.common_passwords_path {
            Some(path) => {
                debug!("loading common passwords from {:?}", path);
                Arc::new(CommonPasswords::from_path(path)?)
            }
            None => CommonPasswords::builtin(),
        };
        let words = match &config.word_list_path {
            Some(path) => {
                debug!("loading word list from {:?}", path);
                Arc::new(WordList::from_path(path)?)
            }
            None => WordList::builtin(),
        };

        Ok(Self {
            scorer: StrengthScorer::new(common),
            estimator: CrackTimeEstimator::new(config.guesses_per_second)?,
            words,
            word_form: Arc::new(PrefixForm(config.short_word_length)),
        })
    }

    /// Replace the short-form policy used when full words are off
    pub fn with_word_form(mut self, form: Arc<dyn WordForm>) -> Self {
        self.word_form = form;
        self
    }

    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    pub fn scorer(&self) -> &StrengthScorer {
        &self.scorer
    }

    pub fn generate_password(&self, config: &GenerationConfig) -> Result<String> {
        generate_password_with(config, &mut secure_rng())
    }

    pub fn generate_passphrase(&self, config: &PassphraseConfig) -> Result<String> {
        build_passphrase_with(config, &self.words, self.word_form.as_ref(), &mut secure_rng())
    }

    /// Raw words for a passphrase, before casing and joining
    pub fn generate_words(&self, count: usize, use_full_words: bool) -> Result<Vec<String>> {
        generate_words_with(
            &self.words,
            self.word_form.as_ref(),
            count,
            use_full_words,
            &mut secure_rng(),
        )
    }

    pub fn generate_pin(&self, length: usize) -> Result<String> {
        generate_pin_with(&PinConfig { length }, &mut secure_rng())
    }

    /// Structural counts merged with common-password flag, score and crack time
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let mut result = analyze_structure(text);
        let is_common = self.scorer.is_common(text);
        let strength = self.evaluate_with(text, &result, is_common);
        result.is_common = is_common;
        result.score = strength.score;
        result.crack_time = strength.crack_time;
        result
    }

    pub fn score(&self, text: &str) -> u8 {
        self.scorer.score(text, &analyze_structure(text))
    }

    pub fn crack_time(&self, text: &str) -> String {
        self.evaluate(text).crack_time
    }

    /// Entropy, score, band and crack time from a single analysis
    pub fn evaluate(&self, text: &str) -> Strength {
        self.evaluate_with(text, &analyze_structure(text), self.scorer.is_common(text))
    }

    fn evaluate_with(&self, text: &str, analysis: &AnalysisResult, is_common: bool) -> Strength {
        let entropy_bits = self.scorer.effective_entropy(text, analysis, is_common);
        let score = capped_score(entropy_bits, is_common);
        Strength {
            entropy_bits,
            score,
            band: StrengthBand::from_score(score),
            crack_time: self.estimator.estimate(entropy_bits),
        }
    }
}

/// Build a passphrase with the shared engine
pub fn generate_passphrase(config: &PassphraseConfig) -> Result<String> {
    PasswordEngine::shared().generate_passphrase(config)
}

/// Full analysis of `text` with the shared engine
pub fn analyze(text: &str) -> AnalysisResult {
    PasswordEngine::shared().analyze(text)
}

/// Strength score of `text` with the shared engine
pub fn score(text: &str) -> u8 {
    PasswordEngine::shared().score(text)
}

/// Estimated time to crack `text` with the shared engine
pub fn crack_time(text: &str) -> String {
    PasswordEngine::shared().crack_time(text)
}
