//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace (including newlines).
///
/// This is the tokenizer used for dictionary text, where entries may
/// legitimately contain punctuation (e.g. apostrophes), so only whitespace
/// acts as a delimiter.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut start: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(word_start) = start.take() {
                    tokens.push(Token::with_offsets(
                        &text[word_start..idx],
                        position,
                        word_start,
                        idx,
                    ));
                    position += 1;
                }
            } else if start.is_none() {
                start = Some(idx);
            }
        }

        // Final word if the text does not end in whitespace
        if let Some(word_start) = start {
            tokens.push(Token::with_offsets(
                &text[word_start..],
                position,
                word_start,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
