//! Pipeline orchestrator: validate, extract, refine, simplify, assemble.
//! One run is a strictly sequential chain of awaits; all intermediate state
//! is local to the invocation and the injected generator is the only shared
//! resource.

use crate::assembler::assemble;
use crate::extraction::{ConceptExtractor, RelationshipExtractor};
use crate::refinement::{dedup_triples, RefinementLoop};
use crate::simplify::simplify_label;
use crate::validator::validate;
use conceptgraph_ai::TextGenerator;
use conceptgraph_core::{
    ConceptGraphError, GraphStats, PipelineOptions, PipelineOutput, RefinementInfo, Result,
};
use std::sync::Arc;

/// Minimum concepts a run must yield to continue.
const MIN_USABLE_CONCEPTS: usize = 3;
/// Refinement is entered only past this cost-control threshold.
const REFINE_CONCEPT_THRESHOLD: usize = 15;
const REFINE_RELATIONSHIP_THRESHOLD: usize = 30;

pub struct GraphPipeline {
    concept_extractor: ConceptExtractor,
    relationship_extractor: RelationshipExtractor,
    refiner: RefinementLoop,
}

impl GraphPipeline {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            concept_extractor: ConceptExtractor::new(Arc::clone(&generator)),
            relationship_extractor: RelationshipExtractor::new(Arc::clone(&generator)),
            refiner: RefinementLoop::new(generator),
        }
    }

    /// Run the full pipeline over one input text. Admissibility and
    /// insufficiency failures are terminal and user-facing; refinement and
    /// simplification degrade locally and never fail a run.
    pub async fn process(&self, text: &str, options: &PipelineOptions) -> Result<PipelineOutput> {
        let validation = validate(text);
        if !validation.is_valid {
            return Err(ConceptGraphError::Validation {
                message: validation.error.unwrap_or_default(),
                suggestions: validation.suggestions,
                analysis: validation.analysis,
            });
        }

        let concepts = self.concept_extractor.extract(text).await?;
        if concepts.len() < MIN_USABLE_CONCEPTS {
            return Err(ConceptGraphError::InsufficientConcepts { found: concepts });
        }
        tracing::debug!(count = concepts.len(), "extracted concepts");

        let relationships = self.relationship_extractor.extract(text, &concepts).await?;
        tracing::debug!(count = relationships.len(), "extracted relationships");

        let needs_refinement = options.refine
            && (concepts.len() > REFINE_CONCEPT_THRESHOLD
                || relationships.len() > REFINE_RELATIONSHIP_THRESHOLD);

        let (concepts, relationships, refinement) = if needs_refinement {
            let before = concepts.len();
            let state = self
                .refiner
                .refine(text, concepts, relationships, options.max_iterations)
                .await;
            let info = RefinementInfo {
                iterations_completed: state.iterations_completed,
                concepts_before: before,
                concepts_after: state.concepts.len(),
            };
            (state.concepts, state.relationships, Some(info))
        } else {
            (concepts, relationships, None)
        };

        // The final relationship list is triple-unique whether or not the
        // refinement loop ran.
        let mut relationships = dedup_triples(relationships);

        for rel in &mut relationships {
            let simplified = simplify_label(&rel.relation);
            rel.original_relation = Some(std::mem::replace(&mut rel.relation, simplified));
        }

        let graph = assemble(concepts, relationships);
        let stats = GraphStats {
            concept_count: graph.concepts.len(),
            relationship_count: graph.relationships.len(),
            isolated_concepts: graph.isolated_concepts,
        };

        Ok(PipelineOutput {
            concepts: graph.concepts,
            relationships: graph.relationships,
            nodes: graph.nodes,
            edges: graph.edges,
            refinement,
            stats,
        })
    }
}
