//! Fixed word lists shared by the validator and the simplifiers.

/// Common English stop words. Used by the validator's diversity check and by
/// the concept-simplifier fallback; extraction prompts also tell the model to
/// skip these.
pub static STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "else", "when", "while", "of", "to", "in",
    "on", "at", "by", "for", "with", "from", "as", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "do", "does", "did", "will", "would", "could", "should", "may",
    "might", "must", "can", "this", "that", "these", "those", "it", "its", "they", "them", "their",
    "there", "here", "what", "which", "who", "whom", "how", "why", "where", "not", "no", "nor",
    "so", "too", "also", "than", "such", "both", "each", "few", "more", "most", "other", "some",
    "any", "all", "into", "through", "about", "between", "during", "before", "after", "above",
    "below", "up", "down", "out", "off", "again", "further", "once",
];

/// Tokens dropped from relation labels by the rule-based simplifier:
/// articles, prepositions, filler adverbs, and a handful of semantically
/// empty nouns.
pub static NOISE_WORDS: &[&str] = &[
    "the",
    "a",
    "an",
    "of",
    "to",
    "in",
    "on",
    "at",
    "by",
    "for",
    "with",
    "from",
    "into",
    "onto",
    "upon",
    "over",
    "under",
    "about",
    "through",
    "between",
    "across",
    "along",
    "during",
    "very",
    "really",
    "basically",
    "actually",
    "simply",
    "just",
    "quite",
    "rather",
    "truly",
    "essentially",
    "literally",
    "somewhat",
    "process",
    "id",
    "data",
    "information",
    "thing",
    "stuff",
];

/// Substrings that mark placeholder or keyboard-mashing input. Matched
/// case-insensitively against the whole text.
pub static PLACEHOLDER_PATTERNS: &[&str] = &[
    "lorem ipsum",
    "asdf",
    "qwerty",
    "zxcv",
    "blah blah",
    "test test test",
    "aaaa",
    "1234567890",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

pub fn is_noise_word(word: &str) -> bool {
    NOISE_WORDS.contains(&word)
}
