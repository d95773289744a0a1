//! Full story-checking pass: tokenize both texts, match every story word.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer, WordTokenizer};
use crate::error::Result;
use crate::matching::dictionary::Dictionary;
use crate::matching::matcher::{MatchFlags, MatchResult, WordMatcher};

/// Result of checking a story against a dictionary.
///
/// Carries the dictionary word list (for display, in source order) and one
/// match result per story word, in story order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Dictionary entries in source order.
    pub dictionary_words: Vec<String>,
    /// One result per story word, in story order.
    pub results: Vec<MatchResult>,
}

impl CheckReport {
    /// Iterate over the words that did not match a dictionary entry exactly.
    pub fn misspelled(&self) -> impl Iterator<Item = &MatchResult> {
        self.results.iter().filter(|result| !result.is_exact())
    }

    /// Count the words that matched a dictionary entry exactly.
    pub fn exact_count(&self) -> usize {
        self.results.iter().filter(|result| result.is_exact()).count()
    }

    /// Check whether every story word was found in the dictionary.
    pub fn all_exact(&self) -> bool {
        self.results.iter().all(MatchResult::is_exact)
    }
}

/// Checks story text against dictionary text.
///
/// Dictionary text is split on whitespace only (entries may contain
/// punctuation); story text is split on whitespace and punctuation, keeping
/// contractions and hyphenated words whole. Each story word is then resolved
/// to its best dictionary match.
#[derive(Debug, Clone, Default)]
pub struct SpellChecker {
    flags: MatchFlags,
}

impl SpellChecker {
    /// Create a checker with default flags.
    pub fn new() -> Self {
        SpellChecker {
            flags: MatchFlags::default(),
        }
    }

    /// Create a checker with the given flags.
    pub fn with_flags(flags: MatchFlags) -> Self {
        SpellChecker { flags }
    }

    /// Get the flags this checker applies to each pass.
    pub fn flags(&self) -> &MatchFlags {
        &self.flags
    }

    /// Run a full checking pass over a dictionary/story text pair.
    ///
    /// Fails with `InvalidInput` if the dictionary is empty while the story
    /// has words to match; no partial results are returned.
    pub fn check(&self, dictionary_text: &str, story_text: &str) -> Result<CheckReport> {
        let dictionary = Dictionary::from_text(dictionary_text)?;

        let story_tokens: Vec<Token> = WordTokenizer::new()?.tokenize(story_text)?.collect();

        let matcher = WordMatcher::with_flags(dictionary, self.flags.clone());
        let results = matcher.match_all(story_tokens.iter().map(|token| token.text.as_str()))?;

        Ok(CheckReport {
            dictionary_words: matcher.dictionary().entries().to_vec(),
            results,
        })
    }

    /// Tokenize dictionary text without running a matching pass.
    pub fn dictionary_words(&self, dictionary_text: &str) -> Result<Vec<String>> {
        let tokenizer = WhitespaceTokenizer::new();
        Ok(tokenizer
            .tokenize(dictionary_text)?
            .map(|token| token.text)
            .collect())
    }
}
