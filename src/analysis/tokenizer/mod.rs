//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Leading and trailing delimiters produce no tokens, and consecutive
    /// delimiters never produce empty tokens. Output order matches input
    /// order.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod whitespace;
pub mod word;

// Re-export all tokenizers for convenient access
pub use whitespace::WhitespaceTokenizer;
pub use word::WordTokenizer;
