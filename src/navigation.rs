use crate::search::{FoundWord, ResultSet};

/// A cursor over the results of one search. Moving past either end wraps.
#[derive(Debug, Default)]
pub struct Navigator {
    results: ResultSet,
    cursor: usize,
}

impl Navigator {
    pub fn new(results: ResultSet) -> Self {
        Self { results, cursor: 0 }
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn current(&self) -> Option<&FoundWord> {
        self.results.words().get(self.cursor)
    }

    pub fn next(&mut self) -> Option<&FoundWord> {
        if self.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.len();
        self.current()
    }

    pub fn previous(&mut self) -> Option<&FoundWord> {
        if self.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + self.len() - 1) % self.len();
        self.current()
    }

    /// Moves to `word` if it was found. The cursor stays put otherwise.
    pub fn jump_to(&mut self, word: &str) -> Option<&FoundWord> {
        self.cursor = self.results.position(word)?;
        self.current()
    }
}
