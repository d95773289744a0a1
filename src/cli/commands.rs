//! Command implementations for Glossa CLI.

use std::fs;
use std::time::Instant;

use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer, WordTokenizer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::loader::load_texts;
use crate::matching::checker::SpellChecker;
use crate::matching::similarity::positional_similarity;

/// Execute a CLI command.
pub fn execute_command(args: GlossaArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_story(check_args.clone(), &args),
        Command::Tokenize(tokenize_args) => tokenize_file(tokenize_args.clone(), &args),
        Command::Compare(compare_args) => compare_words(compare_args.clone(), &args),
    }
}

/// Check a story file against a dictionary file.
fn check_story(args: CheckArgs, cli_args: &GlossaArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Dictionary: {}", args.dictionary.display());
        println!("Story: {}", args.story.display());
    }

    let start_time = Instant::now();

    // The two files load concurrently and fail as a unit
    let runtime = tokio::runtime::Runtime::new()?;
    let data = runtime.block_on(load_texts(&args.dictionary, &args.story))?;

    let checker = SpellChecker::with_flags(args.match_flags());
    let report = checker.check(&data.dictionary, &data.story)?;

    let duration = start_time.elapsed();

    let story_words = report.results.len();
    let matches = if args.all {
        report.results.clone()
    } else {
        report.misspelled().cloned().collect()
    };

    let message = if args.all {
        "All story words"
    } else {
        "Words not found in the dictionary"
    };

    output_result(
        message,
        &CheckResults {
            dictionary_words: report.dictionary_words.len(),
            story_words,
            matches,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Tokenize a text file and print the tokens.
fn tokenize_file(args: TokenizeArgs, cli_args: &GlossaArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)?;

    let tokenizer: Box<dyn Tokenizer> = match args.mode {
        TokenizeMode::Whitespace => Box::new(WhitespaceTokenizer::new()),
        TokenizeMode::Word => Box::new(WordTokenizer::new()?),
    };

    let tokens: Vec<String> = tokenizer
        .tokenize(&text)?
        .map(|token| token.text)
        .collect();

    output_result(
        "Tokens",
        &TokenizeResults {
            tokenizer: tokenizer.name().to_string(),
            tokens,
        },
        cli_args,
    )
}

/// Compare two words and print their similarity score.
fn compare_words(args: CompareArgs, cli_args: &GlossaArgs) -> Result<()> {
    let score = positional_similarity(&args.word_a, &args.word_b);

    output_result(
        "Similarity",
        &CompareResults {
            word_a: args.word_a,
            word_b: args.word_b,
            score,
        },
        cli_args,
    )
}
