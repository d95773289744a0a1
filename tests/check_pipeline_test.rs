//! Integration tests for the full tokenize-and-match pipeline.

use std::io::Write;

use glossa::error::{GlossaError, Result};
use glossa::loader::load_texts;
use glossa::matching::checker::SpellChecker;
use glossa::matching::dictionary::Dictionary;
use glossa::matching::matcher::{MatchFlags, WordMatcher};

const DICTIONARY: &str = "cat\ndog\ncot\nbird\ndon't\nwell-known\n";

#[test]
fn test_story_words_resolve_in_order() -> Result<()> {
    let checker = SpellChecker::new();
    let report = checker.check(DICTIONARY, "the cat saw a bird")?;

    let words: Vec<_> = report.results.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, ["the", "cat", "saw", "a", "bird"]);

    // Dictionary list keeps source order for display
    assert_eq!(
        report.dictionary_words,
        ["cat", "dog", "cot", "bird", "don't", "well-known"]
    );

    Ok(())
}

#[test]
fn test_misspelled_view_filters_exact_matches() -> Result<()> {
    let checker = SpellChecker::new();
    let report = checker.check(DICTIONARY, "cat dgo bird")?;

    let misspelled: Vec<_> = report.misspelled().map(|r| r.word.as_str()).collect();
    assert_eq!(misspelled, ["dgo"]);
    assert_eq!(report.exact_count(), 2);

    Ok(())
}

#[test]
fn test_pinned_fuzzy_score_through_pipeline() -> Result<()> {
    let checker = SpellChecker::new();
    let report = checker.check("cat\ndog\ncot\n", "ct")?;

    assert_eq!(report.results.len(), 1);
    let result = &report.results[0];

    // "cat" and "cot" tie at 5/9 against "ct"; the earlier entry wins
    assert_eq!(result.best_match, "cat");
    assert!((result.score - 5.0 / 9.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_contractions_and_hyphens_survive_tokenization() -> Result<()> {
    let checker = SpellChecker::new();
    let report = checker.check(DICTIONARY, "don't forget the well-known cat!")?;

    let exact: Vec<_> = report
        .results
        .iter()
        .filter(|r| r.is_exact())
        .map(|r| r.word.as_str())
        .collect();
    assert!(exact.contains(&"don't"));
    assert!(exact.contains(&"well-known"));
    assert!(exact.contains(&"cat"));

    Ok(())
}

#[test]
fn test_flag_combinations_change_comparison_only() -> Result<()> {
    let story = "CAT don’t";

    // Default flags: case matters, so "CAT" misses
    let strict = SpellChecker::new().check(DICTIONARY, story)?;
    assert!(!strict.all_exact());

    // Ignoring capitalization and punctuation makes both words exact
    let relaxed = SpellChecker::with_flags(MatchFlags {
        include_punctuation: false,
        include_capitalization: false,
    })
    .check(DICTIONARY, story)?;
    assert!(relaxed.all_exact());

    // Original forms are preserved in the results either way
    assert_eq!(relaxed.results[0].word, "CAT");
    assert_eq!(relaxed.results[0].best_match, "cat");

    Ok(())
}

#[test]
fn test_pipeline_is_idempotent() -> Result<()> {
    let checker = SpellChecker::new();
    let story = "the quick brown fox doesn't jump over the well-known dog";

    let first = checker.check(DICTIONARY, story)?;
    let second = checker.check(DICTIONARY, story)?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_empty_dictionary_aborts_with_invalid_input() {
    let checker = SpellChecker::new();
    let result = checker.check("\n  \n", "some words");

    assert!(matches!(result, Err(GlossaError::InvalidInput(_))));
}

#[test]
fn test_matcher_reuse_across_words() -> Result<()> {
    let dictionary = Dictionary::from_text(DICTIONARY)?;
    let matcher = WordMatcher::new(dictionary);

    let results = matcher.match_all(["cat", "ct", "cta"])?;
    assert_eq!(results.len(), 3);
    assert!(results[0].is_exact());
    assert!(!results[1].is_exact());
    assert!(!results[2].is_exact());

    Ok(())
}

#[tokio::test]
async fn test_load_and_check_end_to_end() -> Result<()> {
    let mut dictionary_file = tempfile::NamedTempFile::new().unwrap();
    write!(dictionary_file, "{DICTIONARY}").unwrap();

    let mut story_file = tempfile::NamedTempFile::new().unwrap();
    write!(story_file, "Cat, dgo, and bird.").unwrap();

    let data = load_texts(dictionary_file.path(), story_file.path()).await?;
    let report = SpellChecker::with_flags(MatchFlags {
        include_punctuation: true,
        include_capitalization: false,
    })
    .check(&data.dictionary, &data.story)?;

    // "Cat" matches case-insensitively; "dgo" and "and" do not appear in the
    // dictionary
    let misspelled: Vec<_> = report.misspelled().map(|r| r.word.as_str()).collect();
    assert_eq!(misspelled, ["dgo", "and"]);

    Ok(())
}

#[tokio::test]
async fn test_failed_load_prevents_any_pass() {
    let mut story_file = tempfile::NamedTempFile::new().unwrap();
    write!(story_file, "story text").unwrap();

    let result = load_texts(
        std::path::Path::new("/nonexistent/dictionary.txt"),
        story_file.path(),
    )
    .await;

    assert!(matches!(result, Err(GlossaError::Io(_))));
}
