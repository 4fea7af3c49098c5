use super::word_list::WordsError;
use std::collections::HashSet;
use std::path::Path;

/// Dictionary lookup capability. Implementations must be deterministic
/// for a fixed (word, locale) pair within a session.
pub trait SpellChecker {
    fn is_valid(&self, word: &str, locale: &str) -> bool;
}

/// Spell checker backed by a newline-separated word file for one locale.
pub struct FileDictionary {
    locale: String,
    words: HashSet<String>,
}

impl FileDictionary {
    pub fn load<P: AsRef<Path>>(path: P, locale: &str) -> Result<Self, WordsError> {
        let content = std::fs::read_to_string(&path).map_err(|source| {
            WordsError::ResourceMissing {
                path: path.as_ref().display().to_string(),
                source,
            }
        })?;
        Ok(Self::from_content(&content, locale))
    }

    pub fn from_content(content: &str, locale: &str) -> Self {
        let words = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self {
            locale: locale.to_string(),
            words,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for FileDictionary {
    fn is_valid(&self, word: &str, locale: &str) -> bool {
        locale == self.locale && self.words.contains(&word.to_lowercase())
    }
}
