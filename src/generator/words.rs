//! Passphrase dictionary and short-form policy

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use log::trace;
use rand::CryptoRng;
use rand::seq::IndexedRandom;

use crate::error::{EngineError, Result};
use crate::utils::common::parse_lines;

// Embedded at compile time
const BUILTIN_WORDS: &str = include_str!("words.txt");

static BUILTIN: LazyLock<Arc<WordList>> = LazyLock::new(|| {
    Arc::new(WordList::from_entries(parse_lines(BUILTIN_WORDS.lines())))
});

/// Immutable list of words a passphrase is drawn from
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// The embedded dictionary, parsed once per process
    pub fn builtin() -> Arc<WordList> {
        Arc::clone(&BUILTIN)
    }

    /// Build from entries, dropping duplicates while keeping first-seen order
    fn from_entries(entries: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let words: Vec<String> = entries
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();
        trace!("word list loaded with {} entries", words.len());
        Self { words }
    }

    /// Parse a word list, one word per line
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let lines = BufReader::new(reader)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        let list = Self::from_entries(parse_lines(lines.iter().map(String::as_str)));
        if list.is_empty() {
            return Err(EngineError::ConfigError("word list is empty".to_string()));
        }
        Ok(list)
    }

    /// Load a word list file
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// One word drawn uniformly at random, `None` only for an empty list
    pub fn choose<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// How a dictionary word is rendered when full words are not wanted
pub trait WordForm: Send + Sync {
    fn shorten(&self, word: &str) -> String;
}

/// Keep the first `n` characters of each word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixForm(pub usize);

impl WordForm for PrefixForm {
    fn shorten(&self, word: &str) -> String {
        word.chars().take(self.0).collect()
    }
}

impl Default for PrefixForm {
    fn default() -> Self {
        PrefixForm(crate::SHORT_WORD_LENGTH)
    }
}
