//! Dictionary management for fuzzy word matching.

use std::fs::File;
use std::io::Read as _;
use std::path::Path;

use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// An ordered list of reference words against which story tokens are scored.
///
/// Entry order is the order of appearance in the source text, and the list is
/// immutable during a matching pass. Entries keep their original form,
/// punctuation included; normalization for comparison happens inside the
/// matcher and never touches the stored entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Entries in source order
    entries: Vec<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            entries: Vec::new(),
        }
    }

    /// Create a dictionary from a list of entries, preserving order.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dictionary {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a dictionary from raw text, one entry per whitespace-separated
    /// word. Entries may contain punctuation.
    pub fn from_text(text: &str) -> Result<Self> {
        let tokenizer = WhitespaceTokenizer::new();
        let entries = tokenizer.tokenize(text)?.map(|token| token.text).collect();
        Ok(Dictionary { entries })
    }

    /// Load a dictionary from a plain-text file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut text = String::new();
        File::open(path)?.read_to_string(&mut text)?;
        Self::from_text(&text)
    }

    /// Add an entry to the end of the dictionary.
    pub fn add_entry<S: Into<String>>(&mut self, entry: S) {
        self.entries.push(entry.into());
    }

    /// Get the entries in source order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
