use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use rand::Rng;
use tracing::info;

use game_types::{ValidationError, Word};

pub const DEFAULT_WORD_LENGTH: usize = 4;

/// The fixed set of playable words, all of one length, each with no
/// repeated letter. Serves both as the target pool and as the
/// membership list for guess validation.
pub struct Dictionary {
    words: Vec<Word>,
    index: HashSet<String>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary from a newline-separated word list.
    ///
    /// Blank lines and `#` comments are skipped; entries that are not
    /// plain letters of the right length, or that repeat a letter, are
    /// dropped rather than rejected.
    pub fn from_word_list(word_list: &str, word_length: usize) -> Self {
        let mut words = Vec::new();
        let mut index = HashSet::new();

        for line in word_list.lines() {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            let entry = entry.to_uppercase();
            if !Self::is_playable(&entry, word_length) {
                continue;
            }
            if index.insert(entry.clone()) {
                words.push(Word::new(entry));
            }
        }

        Self {
            words,
            index,
            word_length,
        }
    }

    pub fn from_file(path: impl AsRef<Path>, word_length: usize) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list from {}", path.display()))?;

        let dictionary = Self::from_word_list(&contents, word_length);
        if dictionary.is_empty() {
            return Err(anyhow!(
                "Word list {} contains no playable {}-letter words",
                path.display(),
                word_length
            ));
        }

        info!(
            "Loaded {} playable {}-letter words from {}",
            dictionary.len(),
            word_length,
            path.display()
        );
        Ok(dictionary)
    }

    // Cows-and-Bulls dictionary rule: letters only, exact length,
    // every letter distinct.
    fn is_playable(entry: &str, word_length: usize) -> bool {
        entry.len() == word_length
            && entry.chars().all(|c| c.is_ascii_alphabetic())
            && has_unique_letters(entry)
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_uppercase())
    }

    /// Draw a target word uniformly at random.
    pub fn draw(&self, rng: &mut impl Rng) -> Result<Word> {
        if self.words.is_empty() {
            return Err(anyhow!(
                "No words available of length {}",
                self.word_length
            ));
        }
        let index = rng.random_range(0..self.words.len());
        Ok(self.words[index].clone())
    }

    /// Check a raw guess against the shape and membership rules, in
    /// order, stopping at the first failure. Input is case-normalized
    /// before the letter checks.
    pub fn validate_guess(&self, raw: &str) -> Result<Word, ValidationError> {
        let raw = raw.trim();

        let length = raw.chars().count();
        if length != self.word_length {
            return Err(ValidationError::InvalidLength {
                expected: self.word_length as u32,
                actual: length as u32,
            });
        }

        if let Some(found) = raw.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCharacter { found });
        }

        let normalized = raw.to_uppercase();

        let mut seen = HashSet::new();
        for letter in normalized.chars() {
            if !seen.insert(letter) {
                return Err(ValidationError::RepeatingLetter { letter });
            }
        }

        if !self.index.contains(&normalized) {
            return Err(ValidationError::NotInDictionary { word: normalized });
        }

        Ok(Word::new(normalized))
    }
}

pub fn has_unique_letters(word: &str) -> bool {
    let mut seen = HashSet::new();
    word.chars().all(|c| seen.insert(c))
}
