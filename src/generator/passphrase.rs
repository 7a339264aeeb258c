//! Memorable passphrase generation
//!
//! Words are drawn independently and uniformly from a [`WordList`], optionally
//! shortened, cased, and joined with a separator.

use log::debug;
use rand::CryptoRng;
use serde::{Deserialize, Serialize};

use crate::crypto::random::secure_rng;
use crate::error::{EngineError, Result};
use crate::generator::words::{PrefixForm, WordForm, WordList};
use crate::utils::common::capitalize_first;
use crate::{PASSPHRASE_MAX_WORDS, PASSPHRASE_MIN_WORDS};

/// Separator used when the configured one is empty
pub const FALLBACK_SEPARATOR: &str = " ";

/// Options for passphrase generation.
///
/// `capitalize` and `uppercase` are meant to be exclusive. The setters keep
/// them that way; if both fields are set directly, whole-word uppercase wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassphraseConfig {
    /// Number of words, 3 to 20
    pub word_count: usize,
    /// Use whole dictionary words instead of their short form
    pub use_full_words: bool,
    /// Uppercase the first character of every word
    pub capitalize: bool,
    /// Uppercase every word entirely
    pub uppercase: bool,
    /// Text placed between words
    pub separator: String,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self {
            word_count: 4,
            use_full_words: true,
            capitalize: false,
            uppercase: false,
            separator: "-".to_string(),
        }
    }
}

impl PassphraseConfig {
    /// Enable or disable capitalization; enabling it clears `uppercase`
    pub fn set_capitalize(&mut self, capitalize: bool) {
        self.capitalize = capitalize;
        if capitalize {
            self.uppercase = false;
        }
    }

    /// Enable or disable uppercase words; enabling it clears `capitalize`
    pub fn set_uppercase(&mut self, uppercase: bool) {
        self.uppercase = uppercase;
        if uppercase {
            self.capitalize = false;
        }
    }

    /// The separator actually placed between words
    pub fn effective_separator(&self) -> &str {
        if self.separator.is_empty() {
            FALLBACK_SEPARATOR
        } else {
            &self.separator
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_word_count(self.word_count)
    }

    fn apply_case(&self, word: &str) -> String {
        if self.uppercase {
            word.to_uppercase()
        } else if self.capitalize {
            capitalize_first(word)
        } else {
            word.to_string()
        }
    }
}

fn validate_word_count(count: usize) -> Result<()> {
    if !(PASSPHRASE_MIN_WORDS..=PASSPHRASE_MAX_WORDS).contains(&count) {
        return Err(EngineError::ConfigError(format!(
            "word count {} outside [{}, {}]",
            count, PASSPHRASE_MIN_WORDS, PASSPHRASE_MAX_WORDS
        )));
    }
    Ok(())
}

/// Draw `count` raw words, before casing and joining
pub fn generate_words_with<R: CryptoRng + ?Sized>(
    words: &WordList,
    form: &dyn WordForm,
    count: usize,
    use_full_words: bool,
    rng: &mut R,
) -> Result<Vec<String>> {
    validate_word_count(count)?;
    if words.is_empty() {
        return Err(EngineError::ConfigError("word list is empty".to_string()));
    }

    debug!("drawing {} words from a list of {}", count, words.len());
    (0..count)
        .map(|_| -> Result<String> {
            let word = words.choose(rng).ok_or_else(|| {
                EngineError::GenerationError("word list yielded no word".to_string())
            })?;
            Ok(if use_full_words {
                word.to_string()
            } else {
                form.shorten(word)
            })
        })
        .collect()
}

/// Build a passphrase from the given list, short-form policy and random source
pub fn build_passphrase_with<R: CryptoRng + ?Sized>(
    config: &PassphraseConfig,
    words: &WordList,
    form: &dyn WordForm,
    rng: &mut R,
) -> Result<String> {
    config.validate()?;
    let drawn = generate_words_with(words, form, config.word_count, config.use_full_words, rng)?;

    Ok(drawn
        .iter()
        .map(|word| config.apply_case(word))
        .collect::<Vec<_>>()
        .join(config.effective_separator()))
}

/// Draw raw words from the built-in dictionary
pub fn generate_words(count: usize, use_full_words: bool) -> Result<Vec<String>> {
    generate_words_with(
        &WordList::builtin(),
        &PrefixForm::default(),
        count,
        use_full_words,
        &mut secure_rng(),
    )
}

/// Build a passphrase from the built-in dictionary.
///
/// # Example
/// ```
/// use pwcore::generator::{build_passphrase, PassphraseConfig};
///
/// let config = PassphraseConfig { word_count: 5, ..Default::default() };
/// let phrase = build_passphrase(&config).unwrap();
/// assert_eq!(phrase.split('-').count(), 5);
/// ```
pub fn build_passphrase(config: &PassphraseConfig) -> Result<String> {
    build_passphrase_with(config, &WordList::builtin(), &PrefixForm::default(), &mut secure_rng())
}
