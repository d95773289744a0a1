//! Concurrent loading of the dictionary and story text files.
//!
//! The two input files are independent, so they are read concurrently and
//! joined before tokenization begins. The pair fails as a unit: if either
//! read fails, the first error propagates and no matching pass proceeds.

use std::path::Path;

use crate::error::Result;

/// The raw text pair a matching pass consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextData {
    /// Dictionary file contents.
    pub dictionary: String,
    /// Story file contents.
    pub story: String,
}

/// Read the dictionary and story files concurrently.
pub async fn load_texts<P: AsRef<Path>>(dictionary_path: P, story_path: P) -> Result<TextData> {
    let (dictionary, story) = tokio::try_join!(
        tokio::fs::read_to_string(dictionary_path.as_ref()),
        tokio::fs::read_to_string(story_path.as_ref()),
    )?;

    Ok(TextData { dictionary, story })
}
