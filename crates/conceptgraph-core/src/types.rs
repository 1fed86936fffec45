use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type NodeId = Uuid;
pub type EdgeId = Uuid;

/// A directed, labeled edge between two concepts. Concepts themselves are
/// plain short strings; a relationship is only meaningful while both of its
/// endpoints are present in the surrounding concept list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub source: String,
    pub relation: String,
    pub target: String,
    /// The relation string as extracted, before label simplification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_relation: Option<String>,
}

impl Relationship {
    pub fn new(
        source: impl Into<String>,
        relation: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            relation: relation.into(),
            target: target.into(),
            original_relation: None,
        }
    }

    /// Dedup key: the exact triple, ignoring provenance.
    pub fn triple(&self) -> (&str, &str, &str) {
        (&self.source, &self.relation, &self.target)
    }
}

/// Derived metrics computed once per input text by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub char_count: usize,
    pub word_count: usize,
    pub unique_meaningful_words: usize,
    pub estimated_concepts: usize,
    /// Quality score in [0, 100].
    pub quality: u32,
}

/// Outcome of the admissibility gate. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<TextAnalysis>,
}

impl ValidationResult {
    pub fn invalid(error: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
            suggestions,
            analysis: None,
        }
    }

    pub fn valid(analysis: TextAnalysis, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: true,
            error: None,
            suggestions,
            analysis: Some(analysis),
        }
    }
}

/// One node per concept in the assembled graph, in extraction order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    /// Number of edges touching this node as source or target.
    pub connections: usize,
}

/// One edge per surviving relationship. `source` and `target` are indices
/// into the node list, resolved at assembly time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: EdgeId,
    pub source: usize,
    pub target: usize,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_label: Option<String>,
}

/// Final assembled output: concept and relationship lists plus the indexed
/// node/edge view used by visualization clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptGraph {
    pub concepts: Vec<String>,
    pub relationships: Vec<Relationship>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// Concepts touched by zero surviving edges.
    pub isolated_concepts: usize,
}

/// Transient state owned by the refinement loop for one pipeline run.
#[derive(Debug, Clone)]
pub struct RefinementState {
    pub concepts: Vec<String>,
    pub relationships: Vec<Relationship>,
    pub iterations_completed: usize,
}

/// Summary of a refinement pass, reported back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinementInfo {
    pub iterations_completed: usize,
    pub concepts_before: usize,
    pub concepts_after: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub concept_count: usize,
    pub relationship_count: usize,
    pub isolated_concepts: usize,
}

/// Caller-facing knobs for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Whether the refinement loop may run at all. Even when true it is
    /// entered only past the cost-control threshold.
    pub refine: bool,
    /// Fixed iteration count for the refinement loop once entered.
    pub max_iterations: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            refine: true,
            max_iterations: 2,
        }
    }
}

/// Successful pipeline output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub concepts: Vec<String>,
    pub relationships: Vec<Relationship>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refinement: Option<RefinementInfo>,
    pub stats: GraphStats,
}

/// Serializable envelope for the surrounding application: either a full
/// result or a user-facing failure with suggestions. Storage and transport
/// live outside this workspace; they consume this shape as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PipelineResult {
    Failure {
        success: bool,
        error: String,
        suggestions: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        analysis: Option<TextAnalysis>,
        concepts: Vec<String>,
        relationships: Vec<Relationship>,
    },
    Success {
        success: bool,
        #[serde(flatten)]
        output: PipelineOutput,
    },
}

impl From<crate::Result<PipelineOutput>> for PipelineResult {
    fn from(result: crate::Result<PipelineOutput>) -> Self {
        match result {
            Ok(output) => PipelineResult::Success {
                success: true,
                output,
            },
            Err(err) => {
                let (suggestions, analysis, concepts) = match &err {
                    crate::ConceptGraphError::Validation {
                        suggestions,
                        analysis,
                        ..
                    } => (suggestions.clone(), analysis.clone(), Vec::new()),
                    crate::ConceptGraphError::InsufficientConcepts { found } => {
                        (Vec::new(), None, found.clone())
                    }
                    _ => (Vec::new(), None, Vec::new()),
                };
                PipelineResult::Failure {
                    success: false,
                    error: err.to_string(),
                    suggestions,
                    analysis,
                    concepts,
                    relationships: Vec::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn relationship_triple_ignores_provenance() {
        let mut rel = Relationship::new("cell", "has", "nucleus");
        let bare = rel.triple();
        assert_eq!(bare, ("cell", "has", "nucleus"));
        rel.original_relation = Some("is_composed_of".to_string());
        assert_eq!(rel.triple(), ("cell", "has", "nucleus"));
    }

    #[test]
    fn failure_envelope_carries_suggestions() {
        let err = crate::ConceptGraphError::Validation {
            message: "too short".to_string(),
            suggestions: vec!["add more detail".to_string()],
            analysis: None,
        };
        let result: PipelineResult = crate::Result::Err(err).into();
        match result {
            PipelineResult::Failure {
                success,
                suggestions,
                ..
            } => {
                assert!(!success);
                assert_eq!(suggestions, vec!["add more detail".to_string()]);
            }
            PipelineResult::Success { .. } => panic!("expected failure envelope"),
        }
    }
}
