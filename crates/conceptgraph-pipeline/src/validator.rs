//! Content admissibility gate. Pure, synchronous, no external calls: rejects
//! text that cannot yield a meaningful concept graph before any generation
//! cost is incurred.

use crate::wordlists::{is_stop_word, PLACEHOLDER_PATTERNS};
use conceptgraph_core::{TextAnalysis, ValidationResult};
use std::collections::HashSet;

const MIN_CHARS: usize = 100;
const MIN_WORDS: usize = 15;
const MIN_MEANINGFUL_WORDS: usize = 10;
const MAX_ESTIMATED_CONCEPTS: usize = 30;
const REPEAT_RUN_LIMIT: usize = 6;

/// Validate input text. Checks short-circuit in order; failure is terminal
/// for the pipeline and the caller surfaces `error` and `suggestions`
/// verbatim.
pub fn validate(text: &str) -> ValidationResult {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return ValidationResult::invalid(
            "Text is empty",
            vec!["Paste or type the content you want to map".to_string()],
        );
    }

    // Placeholder and keyboard-mashing input is rejected before any size
    // check so the user gets the specific reason, not a length complaint.
    if let Some(reason) = nonsense_signature(trimmed) {
        return ValidationResult::invalid(
            format!("Text does not look like meaningful content: {reason}"),
            vec!["Replace placeholder text with real content about your topic".to_string()],
        );
    }

    if trimmed.chars().count() < MIN_CHARS {
        return ValidationResult::invalid(
            format!(
                "Text is too short: at least {MIN_CHARS} characters are needed, got {}",
                trimmed.chars().count()
            ),
            vec![
                "Add more sentences describing your topic".to_string(),
                "Aim for at least a full paragraph of text".to_string(),
            ],
        );
    }

    let word_count = trimmed
        .split_whitespace()
        .filter(|token| token.chars().any(|c| c.is_alphabetic()))
        .count();
    if word_count < MIN_WORDS {
        return ValidationResult::invalid(
            format!("Text needs at least {MIN_WORDS} words, got {word_count}"),
            vec!["Write complete sentences rather than isolated fragments".to_string()],
        );
    }

    let meaningful = meaningful_words(trimmed);
    if meaningful.len() < MIN_MEANINGFUL_WORDS {
        return ValidationResult::invalid(
            format!(
                "Text needs at least {MIN_MEANINGFUL_WORDS} distinct meaningful words, got {}",
                meaningful.len()
            ),
            vec![
                "Use more varied vocabulary".to_string(),
                "Describe several aspects of your topic".to_string(),
            ],
        );
    }

    if trimmed.split_whitespace().all(is_url) {
        return ValidationResult::invalid(
            "Text contains only URLs",
            vec!["Paste the content itself rather than links to it".to_string()],
        );
    }

    let analysis = analyze(trimmed, word_count, meaningful.len());
    let mut suggestions = Vec::new();
    if analysis.quality < 50 {
        suggestions.push("Add more detailed explanations and examples to improve the graph".to_string());
    }
    if analysis.estimated_concepts < 5 {
        suggestions.push("Cover more distinct topics so the graph has enough concepts".to_string());
    }

    ValidationResult::valid(analysis, suggestions)
}

/// Unique lowercase words after removing stop words and tokens of length <= 2.
fn meaningful_words(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(|w| w.to_lowercase())
        .filter(|w| w.len() > 2 && !is_stop_word(w))
        .collect()
}

/// Detect nonsense signatures: no letters at all (which also covers text
/// that is exclusively numbers and punctuation), one character repeated too
/// many times in a row, or a known placeholder substring.
fn nonsense_signature(text: &str) -> Option<String> {
    if !text.chars().any(|c| c.is_alphabetic()) {
        return Some("no letters".to_string());
    }

    let mut run_char = ' ';
    let mut run_len = 0usize;
    for c in text.chars() {
        if c.is_whitespace() {
            run_len = 0;
            continue;
        }
        if c == run_char {
            run_len += 1;
            if run_len >= REPEAT_RUN_LIMIT {
                return Some(format!("repeated character '{run_char}'"));
            }
        } else {
            run_char = c;
            run_len = 1;
        }
    }

    let lowered = text.to_lowercase();
    PLACEHOLDER_PATTERNS
        .iter()
        .find(|pattern| lowered.contains(*pattern))
        .map(|pattern| format!("contains \"{pattern}\""))
}

fn is_url(token: &str) -> bool {
    token.starts_with("http://") || token.starts_with("https://") || token.starts_with("www.")
}

/// Quality score in [0, 100] from four capped sub-scores: length 30,
/// lexical diversity 30, sentence count 20, paragraph count 20.
fn analyze(text: &str, word_count: usize, unique_meaningful_words: usize) -> TextAnalysis {
    let length_score = (word_count as u32 / 10).min(30);

    let diversity = unique_meaningful_words as f64 / word_count.max(1) as f64;
    let diversity_score = ((diversity * 40.0) as u32).min(30);

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| s.trim().chars().count() >= 10)
        .count();
    let sentence_score = (sentences as u32 * 2).min(20);

    let paragraphs = text
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .count();
    let paragraph_score = (paragraphs as u32 * 5).min(20);

    TextAnalysis {
        char_count: text.chars().count(),
        word_count,
        unique_meaningful_words,
        estimated_concepts: (unique_meaningful_words / 2).min(MAX_ESTIMATED_CONCEPTS),
        quality: length_score + diversity_score + sentence_score + paragraph_score,
    }
}
