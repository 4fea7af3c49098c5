use crate::session_rng::SessionRng;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordsError {
    #[error("word resource missing or unreadable at {path}: {source}")]
    ResourceMissing {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Candidate root words, loaded once from a bundled newline-separated file.
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordsError> {
        let content = std::fs::read_to_string(&path).map_err(|source| {
            WordsError::ResourceMissing {
                path: path.as_ref().display().to_string(),
                source,
            }
        })?;
        Ok(Self::from_lines(&content))
    }

    pub fn from_lines(content: &str) -> Self {
        Self {
            words: content.lines().map(str::to_string).collect(),
        }
    }

    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn pick(&self, rng: &mut SessionRng) -> Option<&str> {
        let idx = rng.pick_index(self.words.len())?;
        Some(&self.words[idx])
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
