//! Concept and relationship extraction through the text-generation
//! capability. Parsing is lenient: a malformed response degrades to an empty
//! list, never an error; only an exhausted generation client propagates.

use conceptgraph_ai::{recover_array, TextGenerator};
use conceptgraph_core::{ConceptGraphError, Relationship, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

const MAX_CONCEPTS: usize = 30;
const MAX_RELATIONSHIPS: usize = 50;

/// Wire shape the model is asked to emit for relationships.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRelationship {
    pub source: String,
    pub relation: String,
    pub target: String,
}

impl From<RawRelationship> for Relationship {
    fn from(raw: RawRelationship) -> Self {
        Relationship::new(raw.source, raw.relation, raw.target)
    }
}

/// Derives a deduplicated list of short concept strings from text.
pub struct ConceptExtractor {
    generator: Arc<dyn TextGenerator>,
}

impl ConceptExtractor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Extract up to 30 short noun-phrase concepts. An empty result means the
    /// model found nothing usable; the orchestrator treats fewer than 3
    /// concepts as an insufficiency failure, not an extraction error.
    pub async fn extract(&self, text: &str) -> Result<Vec<String>> {
        let prompt = format!(
            "Extract the key concepts from the following text.\n\n\
            Rules:\n\
            - Return a JSON array of strings, nothing else\n\
            - At most {MAX_CONCEPTS} concepts\n\
            - Each concept is a short noun phrase of 1-4 words\n\
            - Skip generic stop words and filler words\n\
            - No duplicates\n\n\
            Text:\n{text}"
        );

        let response = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|e| ConceptGraphError::Generation(e.to_string()))?;

        let concepts = recover_array::<String>(&response).unwrap_or_default();
        Ok(dedup_preserving_order(concepts))
    }
}

/// Derives directed, labeled edges between already-extracted concepts.
pub struct RelationshipExtractor {
    generator: Arc<dyn TextGenerator>,
}

impl RelationshipExtractor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Extract relationships explicitly supported by the text. Membership of
    /// endpoints in the concept list is NOT enforced here; graph assembly
    /// drops unresolvable edges.
    pub async fn extract(&self, text: &str, concepts: &[String]) -> Result<Vec<Relationship>> {
        let prompt = format!(
            "Identify relationships between the given concepts based on the text.\n\n\
            Concepts: {}\n\n\
            Rules:\n\
            - Return a JSON array of objects with keys \"source\", \"relation\", \"target\"\n\
            - Only include relationships explicitly supported by the text\n\
            - Each relation is a 1-2 word verb phrase, no underscores\n\
            - At most {MAX_RELATIONSHIPS} relationships\n\n\
            Text:\n{text}",
            concepts.join(", ")
        );

        let response = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|e| ConceptGraphError::Generation(e.to_string()))?;

        let relationships = recover_array::<RawRelationship>(&response)
            .unwrap_or_default()
            .into_iter()
            .filter(|raw| {
                !raw.source.is_empty() && !raw.target.is_empty() && raw.source != raw.target
            })
            .take(MAX_RELATIONSHIPS)
            .map(Relationship::from)
            .collect();

        Ok(relationships)
    }
}

pub(crate) fn dedup_preserving_order(concepts: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    concepts
        .into_iter()
        .filter(|c| !c.trim().is_empty())
        .filter(|c| seen.insert(c.clone()))
        .take(MAX_CONCEPTS)
        .collect()
}
