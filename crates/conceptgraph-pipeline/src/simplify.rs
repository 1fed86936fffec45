//! Two-tier label simplification.
//!
//! The rule-based simplifier produces the final relation labels shown on
//! edges: pure, synchronous, never failing. The model-assisted simplifier is
//! the alternate path for verbose concept and relation strings; it batches
//! them through the text-generation capability and degrades to deterministic
//! fallbacks on any failure.

use crate::relation_map::RELATION_MAP;
use crate::wordlists::{is_noise_word, is_stop_word};
use conceptgraph_ai::{recover_object, TextGenerator};
use conceptgraph_core::Relationship;
use std::collections::HashMap;
use std::sync::Arc;

/// Maximum display length for an edge label, including the ".." marker.
const MAX_LABEL_CHARS: usize = 10;
/// Concepts longer than this many words go through the model.
const CONCEPT_VERBOSE_WORDS: usize = 5;
/// Relation labels longer than this many words go through the model.
const RELATION_VERBOSE_WORDS: usize = 3;
/// Word cap applied by the deterministic formatter.
const FORMAT_WORD_CAP: usize = 8;

/// Rule-based relation simplifier. Applied to every relationship label before
/// graph assembly; the pre-simplification string is retained by the caller as
/// `original_relation`.
pub fn simplify_label(label: &str) -> String {
    let normalized = normalize(label);

    // Exact dictionary hit returns immediately, skipping noise filtering.
    for (key, concise) in RELATION_MAP {
        if normalized == key.replace('_', " ") {
            return truncate(concise);
        }
    }

    // First structural match in declaration order wins, not the best match.
    let mut working = normalized.clone();
    for (key, concise) in RELATION_MAP {
        let spaced = key.replace('_', " ");
        if working.contains(&spaced) {
            working = working.replacen(&spaced, concise, 1);
            break;
        }
    }

    let kept: Vec<&str> = working
        .split_whitespace()
        .filter(|word| !is_noise_word(word))
        .collect();

    let result = if kept.is_empty() {
        working.split_whitespace().next().unwrap_or("").to_string()
    } else {
        kept.join(" ")
    };

    truncate(&result)
}

/// Lowercase, then collapse underscores and whitespace runs to single spaces.
fn normalize(label: &str) -> String {
    label
        .to_lowercase()
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cap at 10 display characters. No case transformation is applied.
fn truncate(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_CHARS {
        let head: String = label.chars().take(MAX_LABEL_CHARS - 2).collect();
        format!("{head}..")
    } else {
        label.to_string()
    }
}

/// Deterministic formatter for already-short labels: collapse whitespace,
/// title-case each word except short all-caps acronyms, cap at 8 words.
pub fn format_label(label: &str) -> String {
    let words: Vec<&str> = label.split_whitespace().collect();
    let capped = words.len() > FORMAT_WORD_CAP;

    let mut formatted: Vec<String> = words
        .into_iter()
        .take(FORMAT_WORD_CAP)
        .map(|word| {
            if word.len() <= 4 && word.chars().all(|c| c.is_uppercase()) {
                word.to_string()
            } else {
                title_case(word)
            }
        })
        .collect();

    if capped {
        formatted.push("...".to_string());
    }
    formatted.join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Model-assisted simplifier for verbose labels. Both methods return a
/// complete original-to-simplified mapping and never propagate failures past
/// their own boundary.
pub struct LabelSimplifier {
    generator: Arc<dyn TextGenerator>,
}

impl LabelSimplifier {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Simplify concept labels. Concepts of five words or fewer pass through
    /// the deterministic formatter; longer ones are batched into one prompt.
    pub async fn simplify_concepts(&self, concepts: &[String]) -> HashMap<String, String> {
        let mut mapping = HashMap::new();
        let mut verbose = Vec::new();

        for concept in concepts {
            if word_count(concept) > CONCEPT_VERBOSE_WORDS {
                verbose.push(concept.clone());
            } else {
                mapping.insert(concept.clone(), format_label(concept));
            }
        }

        if verbose.is_empty() {
            return mapping;
        }

        let prompt = format!(
            "Shorten each of these concept labels to at most 8 words while keeping \
            its meaning.\n\n\
            Labels:\n{}\n\n\
            Return a JSON object mapping each original label to its shortened form, \
            nothing else.",
            verbose.join("\n")
        );

        let simplified = self.request_mapping(&prompt).await;
        for original in verbose {
            let value = match simplified.get(&original) {
                Some(value) => format_label(value),
                None => fallback_concept(&original),
            };
            mapping.insert(original, value);
        }
        mapping
    }

    /// Simplify relation labels. Relations of three words or fewer pass
    /// through the deterministic formatter; longer ones are batched.
    pub async fn simplify_relation_labels(
        &self,
        relationships: &[Relationship],
    ) -> HashMap<String, String> {
        let mut mapping = HashMap::new();
        let mut verbose = Vec::new();

        for rel in relationships {
            if mapping.contains_key(&rel.relation) || verbose.contains(&rel.relation) {
                continue;
            }
            if word_count(&rel.relation) > RELATION_VERBOSE_WORDS {
                verbose.push(rel.relation.clone());
            } else {
                mapping.insert(rel.relation.clone(), format_label(&rel.relation));
            }
        }

        if verbose.is_empty() {
            return mapping;
        }

        let prompt = format!(
            "Shorten each of these relationship labels to at most 3 words.\n\n\
            Labels:\n{}\n\n\
            Return a JSON object mapping each original label to its shortened form, \
            nothing else.",
            verbose.join("\n")
        );

        let simplified = self.request_mapping(&prompt).await;
        for original in verbose {
            let value = match simplified.get(&original) {
                Some(value) => value.to_lowercase(),
                None => fallback_relation(&original),
            };
            mapping.insert(original, value);
        }
        mapping
    }

    /// One generation call parsed leniently into a key-unique mapping.
    /// Call or parse failure yields an empty mapping, pushing every input
    /// onto its local fallback.
    async fn request_mapping(&self, prompt: &str) -> HashMap<String, String> {
        let response = match self.generator.generate(prompt).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("label simplification failed, using fallbacks: {e}");
                return HashMap::new();
            }
        };
        recover_object(&response)
            .unwrap_or_default()
            .into_iter()
            .collect()
    }
}

fn word_count(label: &str) -> usize {
    label.split_whitespace().count()
}

/// Concept fallback: drop stop words, keep the first five remaining words,
/// then format.
fn fallback_concept(original: &str) -> String {
    let kept: Vec<&str> = original
        .split_whitespace()
        .filter(|word| !is_stop_word(&word.to_lowercase()))
        .take(CONCEPT_VERBOSE_WORDS)
        .collect();
    if kept.is_empty() {
        format_label(original)
    } else {
        format_label(&kept.join(" "))
    }
}

/// Relation fallback: first two words, lowercased.
fn fallback_relation(original: &str) -> String {
    original
        .split_whitespace()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use conceptgraph_ai::GenerationResult;
    use pretty_assertions::assert_eq;

    #[test]
    fn dictionary_hit_returns_concise_form() {
        assert_eq!(simplify_label("is_associated_with"), "links");
        assert_eq!(simplify_label("depends_on"), "needs");
        assert_eq!(simplify_label("IS_ASSOCIATED_WITH"), "links");
    }

    #[test]
    fn substring_match_uses_declaration_order() {
        // "is_associated_with" is declared first and wins over any later key.
        assert_eq!(simplify_label("strongly is_associated_with"), "strongly..");
    }

    #[test]
    fn noise_words_are_filtered() {
        assert_eq!(simplify_label("runs in the process"), "runs");
        assert_eq!(simplify_label("very simply flows"), "flows");
    }

    #[test]
    fn all_noise_falls_back_to_first_word() {
        assert_eq!(simplify_label("of the process"), "of");
    }

    #[test]
    fn output_never_exceeds_ten_chars() {
        let inputs = [
            "is_associated_with",
            "collaborates extensively together",
            "transmogrification",
            "a",
            "",
        ];
        for input in inputs {
            assert!(
                simplify_label(input).chars().count() <= 10,
                "too long for input {input:?}"
            );
        }
    }

    #[test]
    fn truncation_appends_marker() {
        assert_eq!(simplify_label("transmogrification"), "transmog..");
    }

    #[test]
    fn simplify_label_is_idempotent() {
        let inputs = [
            "is_associated_with",
            "depends_on",
            "is_part_of",
            "runs in the process",
            "uses",
            "leads_to",
            "is_a_type_of",
        ];
        for input in inputs {
            let once = simplify_label(input);
            assert_eq!(simplify_label(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn formatter_title_cases_and_keeps_acronyms() {
        assert_eq!(format_label("dna repair mechanism"), "Dna Repair Mechanism");
        assert_eq!(format_label("DNA repair"), "DNA Repair");
        assert_eq!(format_label("  spaced   out  "), "Spaced Out");
    }

    #[test]
    fn formatter_caps_at_eight_words() {
        let long = "one two three four five six seven eight nine ten";
        assert_eq!(
            format_label(long),
            "One Two Three Four Five Six Seven Eight ..."
        );
    }

    struct FixedGenerator(String);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> GenerationResult<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> GenerationResult<String> {
            Err(anyhow!("service unavailable"))
        }
    }

    #[tokio::test]
    async fn short_concepts_skip_the_model() {
        let simplifier = LabelSimplifier::new(Arc::new(FailingGenerator));
        let mapping = simplifier
            .simplify_concepts(&["cell wall".to_string()])
            .await;
        assert_eq!(mapping["cell wall"], "Cell Wall");
    }

    #[tokio::test]
    async fn verbose_concepts_use_model_mapping() {
        let verbose = "the complicated process of cellular energy production".to_string();
        let response = format!(r#"{{"{verbose}": "cellular energy production"}}"#);
        let simplifier = LabelSimplifier::new(Arc::new(FixedGenerator(response)));
        let mapping = simplifier.simplify_concepts(&[verbose.clone()]).await;
        assert_eq!(mapping[&verbose], "Cellular Energy Production");
    }

    #[tokio::test]
    async fn concept_fallback_strips_stop_words() {
        let verbose = "the main structure of the cellular membrane barrier".to_string();
        let simplifier = LabelSimplifier::new(Arc::new(FailingGenerator));
        let mapping = simplifier.simplify_concepts(&[verbose.clone()]).await;
        assert_eq!(mapping[&verbose], "Main Structure Cellular Membrane Barrier");
    }

    #[tokio::test]
    async fn relation_fallback_keeps_first_two_words_lowercased() {
        let rel = Relationship::new(
            "a",
            "Provides Structural Support And Protection For",
            "b",
        );
        let simplifier = LabelSimplifier::new(Arc::new(FailingGenerator));
        let mapping = simplifier.simplify_relation_labels(&[rel]).await;
        assert_eq!(
            mapping["Provides Structural Support And Protection For"],
            "provides structural"
        );
    }
}
