use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::WordlistError;
use crate::models::Candidate;

/// Newline-delimited password file.
pub struct WordlistSource {
    path: PathBuf,
}

impl WordlistSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the whole file. Fails if it is missing, not UTF-8, or yields no
    /// candidates.
    pub fn load(&self) -> Result<Vec<Candidate>, WordlistError> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => WordlistError::NotFound(self.path.clone()),
            _ => WordlistError::Read {
                path: self.path.clone(),
                source: e,
            },
        })?;

        let candidates = Self::parse(&content);
        if candidates.is_empty() {
            return Err(WordlistError::Empty(self.path.clone()));
        }

        debug!(path = %self.path.display(), count = candidates.len(), "wordlist loaded");
        Ok(candidates)
    }

    pub fn parse(content: &str) -> Vec<Candidate> {
        content
            .lines()
            .filter_map(|line| Candidate::new(line.trim()))
            .collect()
    }
}
