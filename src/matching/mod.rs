//! Fuzzy word-matching engine for Glossa.
//!
//! This module scores story words against a dictionary with a positional
//! character-similarity metric and resolves each word to its best match.

pub mod checker;
pub mod dictionary;
pub mod matcher;
pub mod similarity;

// Re-export commonly used types
pub use checker::*;
pub use dictionary::*;
pub use matcher::*;
pub use similarity::*;
