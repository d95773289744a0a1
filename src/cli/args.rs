//! Command line argument parsing for Glossa CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::matching::matcher::MatchFlags;

/// Glossa - fuzzy word matching against a dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "glossa")]
#[command(about = "A fuzzy word-matching and spell-checking tool")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GlossaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GlossaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check a story against a dictionary
    Check(CheckArgs),

    /// Tokenize a text file
    Tokenize(TokenizeArgs),

    /// Compare two words and print their similarity score
    Compare(CompareArgs),
}

/// Arguments for checking a story
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the dictionary file (one entry per whitespace-separated word)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Path to the story file
    #[arg(value_name = "STORY")]
    pub story: PathBuf,

    /// Strip punctuation before comparing words
    #[arg(long)]
    pub ignore_punctuation: bool,

    /// Lowercase words before comparing them
    #[arg(long)]
    pub ignore_capitalization: bool,

    /// Include exact matches in the output (default: misspellings only)
    #[arg(short, long)]
    pub all: bool,
}

impl CheckArgs {
    /// Build the matching flags selected by this invocation.
    pub fn match_flags(&self) -> MatchFlags {
        MatchFlags {
            include_punctuation: !self.ignore_punctuation,
            include_capitalization: !self.ignore_capitalization,
        }
    }
}

/// Arguments for tokenizing a file
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Path to the text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Tokenizer mode
    #[arg(short, long, default_value = "word")]
    pub mode: TokenizeMode,
}

/// Tokenizer modes available in CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizeMode {
    /// Split on whitespace only (dictionary text)
    Whitespace,
    /// Split on whitespace and punctuation, keeping apostrophes and hyphens
    /// (story text)
    Word,
}

/// Arguments for comparing two words
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// The first word
    #[arg(value_name = "WORD_A")]
    pub word_a: String,

    /// The second word
    #[arg(value_name = "WORD_B")]
    pub word_b: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_check_command() {
        let args = GlossaArgs::try_parse_from([
            "glossa",
            "check",
            "dictionary.txt",
            "story.txt",
            "--ignore-capitalization",
        ])
        .unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.dictionary, PathBuf::from("dictionary.txt"));
            assert_eq!(check_args.story, PathBuf::from("story.txt"));
            assert!(!check_args.ignore_punctuation);
            assert!(check_args.ignore_capitalization);

            let flags = check_args.match_flags();
            assert!(flags.include_punctuation);
            assert!(!flags.include_capitalization);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_tokenize_command() {
        let args = GlossaArgs::try_parse_from([
            "glossa",
            "tokenize",
            "story.txt",
            "--mode",
            "whitespace",
        ])
        .unwrap();

        if let Command::Tokenize(tokenize_args) = args.command {
            assert_eq!(tokenize_args.file, PathBuf::from("story.txt"));
            assert!(matches!(tokenize_args.mode, TokenizeMode::Whitespace));
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_compare_command() {
        let args = GlossaArgs::try_parse_from(["glossa", "compare", "cat", "cot"]).unwrap();

        if let Command::Compare(compare_args) = args.command {
            assert_eq!(compare_args.word_a, "cat");
            assert_eq!(compare_args.word_b, "cot");
        } else {
            panic!("Expected Compare command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = GlossaArgs::try_parse_from(["glossa", "compare", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = GlossaArgs::try_parse_from(["glossa", "-vv", "compare", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = GlossaArgs::try_parse_from(["glossa", "--quiet", "compare", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            GlossaArgs::try_parse_from(["glossa", "--format", "json", "compare", "a", "b"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
