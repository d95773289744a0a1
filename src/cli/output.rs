//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{GlossaArgs, OutputFormat};
use crate::error::Result;
use crate::matching::matcher::MatchResult;

/// Result structure for story checking.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub dictionary_words: usize,
    pub story_words: usize,
    pub matches: Vec<MatchResult>,
    pub duration_ms: u64,
}

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResults {
    pub tokenizer: String,
    pub tokens: Vec<String>,
}

/// Result structure for word comparison.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompareResults {
    pub word_a: String,
    pub word_b: String,
    pub score: f64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &GlossaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &GlossaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &GlossaArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("CheckResults") => {
            output_check_results_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("TokenizeResults") => {
            output_tokenize_results_human(&value, args)
        }
        _ => {
            // Generic output for other types
            output_generic_human(&value, args)
        }
    }
}

/// Output check results as a word / best match / score table.
fn output_check_results_human(value: &serde_json::Value, args: &GlossaArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(matches) = obj.get("matches").and_then(|m| m.as_array()) {
            if matches.is_empty() {
                println!("No words to report.");
            } else {
                println!("{:<20} {:<20} {:>7}", "Word", "Best match", "Score");
                println!("{:─<20} {:─<20} {:─>7}", "", "", "");

                for entry in matches {
                    let word = entry.get("word").and_then(|w| w.as_str()).unwrap_or("");
                    let best_match = entry
                        .get("best_match")
                        .and_then(|m| m.as_str())
                        .unwrap_or("");
                    let score = entry.get("score").and_then(|s| s.as_f64()).unwrap_or(0.0);
                    println!("{:<20} {:<20} {:>6.2}%", word, best_match, score * 100.0);
                }
            }
        }

        if args.verbosity() > 0 {
            println!();
            if let Some(dictionary_words) = obj.get("dictionary_words").and_then(|d| d.as_u64()) {
                println!("Dictionary words: {dictionary_words}");
            }
            if let Some(story_words) = obj.get("story_words").and_then(|s| s.as_u64()) {
                println!("Story words: {story_words}");
            }
            if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
                println!("Check time: {duration}ms");
            }
        }
    }
    Ok(())
}

/// Output a token list, one token per line.
fn output_tokenize_results_human(value: &serde_json::Value, args: &GlossaArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(tokens) = obj.get("tokens").and_then(|t| t.as_array()) {
            for token in tokens {
                if let Some(text) = token.as_str() {
                    println!("{text}");
                }
            }

            if args.verbosity() > 1 {
                println!();
                println!("{} tokens", tokens.len());
            }
        }
    }
    Ok(())
}

/// Generic key/value output for other result types.
fn output_generic_human(value: &serde_json::Value, _args: &GlossaArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        for (key, val) in obj {
            match val {
                serde_json::Value::String(s) => println!("{key}: {s}"),
                other => println!("{key}: {other}"),
            }
        }
    } else {
        println!("{value}");
    }
    Ok(())
}
