//! Word tokenizer implementation for prose text.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{GlossaError, Result};

/// Delimiter pattern: runs of anything that is not a word character, an
/// apostrophe (ASCII `'` or U+2019), or a hyphen. Keeping apostrophes and
/// hyphens out of the delimiter set leaves contractions and hyphenated words
/// as single tokens.
const DELIMITER_PATTERN: &str = r"[^\w'’-]+";

/// A tokenizer that splits prose on whitespace and punctuation.
///
/// This is the tokenizer used for story text. Whitespace and punctuation act
/// as delimiters, except apostrophes and hyphens, so `don't` and `well-known`
/// each come through as one token.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The compiled delimiter pattern
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(DELIMITER_PATTERN)
            .map_err(|e| GlossaError::analysis(format!("Invalid delimiter pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the delimiter pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Built-in delimiter pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        // Extract the gaps between delimiter runs
        let mut tokens = Vec::new();
        let mut last_end = 0;
        let mut position = 0;

        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                let word = &text[last_end..mat.start()];
                tokens.push(Token::with_offsets(word, position, last_end, mat.start()));
                position += 1;
            }
            last_end = mat.end();
        }

        // Add the final word if any
        if last_end < text.len() {
            let word = &text[last_end..];
            tokens.push(Token::with_offsets(word, position, last_end, text.len()));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
