//! Best-match search over a dictionary using positional similarity.

use serde::{Deserialize, Serialize};

use crate::error::{GlossaError, Result};
use crate::matching::dictionary::Dictionary;
use crate::matching::similarity::positional_similarity;

/// Flags controlling which parts of a word participate in comparison.
///
/// Flags are read once when a matcher is constructed and stay fixed for the
/// whole matching pass. They only affect comparison; matched words and
/// dictionary entries are always returned in their original form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFlags {
    /// Whether punctuation participates in comparison. When false, all
    /// non-alphanumeric characters are stripped before comparing.
    pub include_punctuation: bool,
    /// Whether capitalization participates in comparison. When false, both
    /// sides are lowercased before comparing.
    pub include_capitalization: bool,
}

impl Default for MatchFlags {
    fn default() -> Self {
        MatchFlags {
            include_punctuation: true,
            include_capitalization: true,
        }
    }
}

/// The best dictionary match found for a single query word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The query word, in its original form.
    pub word: String,
    /// The best-matching dictionary entry, in its original form.
    pub best_match: String,
    /// Similarity score in [0.0, 1.0]; 1.0 means the word is present in the
    /// dictionary (after flag normalization).
    pub score: f64,
}

impl MatchResult {
    /// Check whether the word matched a dictionary entry exactly.
    pub fn is_exact(&self) -> bool {
        self.score >= 1.0
    }
}

/// Finds the best dictionary match for each query word.
///
/// Normalized entry forms are computed once at construction, so a matcher is
/// cheap to reuse across all the words of one pass.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    dictionary: Dictionary,
    flags: MatchFlags,
    /// Entry forms normalized per the flags, parallel to the dictionary
    normalized: Vec<String>,
}

impl WordMatcher {
    /// Create a matcher with default flags.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_flags(dictionary, MatchFlags::default())
    }

    /// Create a matcher with the given flags.
    pub fn with_flags(dictionary: Dictionary, flags: MatchFlags) -> Self {
        let normalized = dictionary
            .iter()
            .map(|entry| normalize(entry, &flags))
            .collect();

        WordMatcher {
            dictionary,
            flags,
            normalized,
        }
    }

    /// Get the dictionary this matcher searches.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Get the flags this matcher was built with.
    pub fn flags(&self) -> &MatchFlags {
        &self.flags
    }

    /// Find the best dictionary match for a single word.
    ///
    /// If the normalized word is present verbatim in the normalized
    /// dictionary, the first such entry is returned with score 1.0 without
    /// any scoring. Otherwise every entry is scored with positional
    /// similarity and the highest wins; ties keep the first-encountered
    /// (lowest index) entry.
    pub fn best_match(&self, word: &str) -> Result<MatchResult> {
        if self.dictionary.is_empty() {
            return Err(GlossaError::invalid_input(
                "dictionary has no entries to match against",
            ));
        }

        let query = normalize(word, &self.flags);

        // Exact-match fast path
        if let Some(index) = self.normalized.iter().position(|entry| *entry == query) {
            return Ok(MatchResult {
                word: word.to_string(),
                best_match: self.dictionary.entries()[index].clone(),
                score: 1.0,
            });
        }

        // Stable single-pass maximum scan: strictly-greater comparison keeps
        // the lowest index on ties
        let mut best_score = -1.0;
        let mut best_index = 0;
        for (index, entry) in self.normalized.iter().enumerate() {
            let score = positional_similarity(&query, entry);
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }

        Ok(MatchResult {
            word: word.to_string(),
            best_match: self.dictionary.entries()[best_index].clone(),
            score: best_score,
        })
    }

    /// Find the best match for each word in order.
    ///
    /// The result sequence is in input order, one result per word. The first
    /// error aborts the pass; no partial results are returned.
    pub fn match_all<I, S>(&self, words: I) -> Result<Vec<MatchResult>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| self.best_match(word.as_ref()))
            .collect()
    }
}

/// Normalize a word for comparison per the active flags. The original word is
/// never mutated; this produces a comparison-local copy.
fn normalize(word: &str, flags: &MatchFlags) -> String {
    let mut normalized = if flags.include_punctuation {
        word.to_string()
    } else {
        word.chars().filter(|c| c.is_alphanumeric()).collect()
    };

    if !flags.include_capitalization {
        normalized = normalized.to_lowercase();
    }

    normalized
}
