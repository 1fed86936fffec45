//! Iterative refinement: merge near-duplicate concepts and recover
//! relationships for isolated ones. The loop runs a fixed number of
//! iterations once entered; it does not early-exit when the concept list
//! stabilizes. Callers depend on the deterministic call count, so the fixed
//! bound is part of the contract.

use crate::extraction::RawRelationship;
use conceptgraph_ai::{recover_array, TextGenerator};
use conceptgraph_core::{RefinementState, Relationship};
use std::collections::HashSet;
use std::sync::Arc;

const MERGE_THRESHOLD: usize = 15;
const CONTEXT_CHAR_LIMIT: usize = 3000;

pub struct RefinementLoop {
    generator: Arc<dyn TextGenerator>,
}

impl RefinementLoop {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Run exactly `max_iterations` merge + isolation-recovery rounds.
    /// Generation failures inside a round leave that round's state untouched
    /// and never abort the loop.
    pub async fn refine(
        &self,
        text: &str,
        concepts: Vec<String>,
        relationships: Vec<Relationship>,
        max_iterations: usize,
    ) -> RefinementState {
        let mut state = RefinementState {
            concepts,
            relationships,
            iterations_completed: 0,
        };

        while state.iterations_completed < max_iterations {
            if state.concepts.len() > MERGE_THRESHOLD {
                self.merge_step(&mut state).await;
            }
            self.isolation_recovery_step(text, &mut state).await;
            state.iterations_completed += 1;
        }

        state.relationships = dedup_triples(state.relationships);
        state
    }

    /// Ask the model for a merged concept list and remap relationship
    /// endpoints through a best-effort original-to-survivor mapping.
    async fn merge_step(&self, state: &mut RefinementState) {
        let prompt = format!(
            "The following concept list contains synonyms and near-duplicates.\n\
            Merge them, keeping the most descriptive variant of each group.\n\n\
            Concepts: {}\n\n\
            Return a JSON array of the merged concept strings, nothing else.",
            state.concepts.join(", ")
        );

        let response = match self.generator.generate(&prompt).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("concept merge failed, keeping current concepts: {e}");
                return;
            }
        };

        let merged: Vec<String> = recover_array::<String>(&response).unwrap_or_default();
        if merged.is_empty() || merged.len() >= state.concepts.len() {
            return;
        }

        let mapping: Vec<(String, String)> = state
            .concepts
            .iter()
            .enumerate()
            .map(|(i, original)| {
                let survivor = closest_survivor(original, &merged)
                    .unwrap_or_else(|| merged[i % merged.len()].clone());
                (original.clone(), survivor)
            })
            .collect();

        let survivors: HashSet<&str> = merged.iter().map(String::as_str).collect();
        let remap = |endpoint: &str| -> String {
            mapping
                .iter()
                .find(|(original, _)| original == endpoint)
                .map(|(_, survivor)| survivor.clone())
                .unwrap_or_else(|| endpoint.to_string())
        };

        state.relationships = std::mem::take(&mut state.relationships)
            .into_iter()
            .filter_map(|rel| {
                let source = remap(&rel.source);
                let target = remap(&rel.target);
                if source == target
                    || !survivors.contains(source.as_str())
                    || !survivors.contains(target.as_str())
                {
                    return None;
                }
                Some(Relationship {
                    source,
                    target,
                    ..rel
                })
            })
            .collect();
        state.concepts = merged;
    }

    /// Propose relationships for concepts untouched by any edge. Returned
    /// triples are appended unvalidated; graph assembly enforces membership.
    async fn isolation_recovery_step(&self, text: &str, state: &mut RefinementState) {
        let isolated = isolated_concepts(&state.concepts, &state.relationships);
        if isolated.is_empty() {
            return;
        }

        let context: String = text.chars().take(CONTEXT_CHAR_LIMIT).collect();
        let prompt = format!(
            "These concepts have no relationships yet: {}\n\n\
            Full concept list: {}\n\n\
            Based on the text below, propose relationships connecting the isolated \
            concepts to the others.\n\
            Return a JSON array of objects with keys \"source\", \"relation\", \"target\".\n\n\
            Text:\n{context}",
            isolated.join(", "),
            state.concepts.join(", ")
        );

        let response = match self.generator.generate(&prompt).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("isolation recovery failed, no relationships added: {e}");
                return;
            }
        };

        let recovered = recover_array::<RawRelationship>(&response).unwrap_or_default();
        state
            .relationships
            .extend(recovered.into_iter().map(Relationship::from));
    }
}

/// Case-insensitive substring containment in either direction.
fn closest_survivor(original: &str, merged: &[String]) -> Option<String> {
    let lowered = original.to_lowercase();
    merged
        .iter()
        .find(|candidate| {
            let candidate = candidate.to_lowercase();
            lowered.contains(&candidate) || candidate.contains(&lowered)
        })
        .cloned()
}

fn isolated_concepts(concepts: &[String], relationships: &[Relationship]) -> Vec<String> {
    let touched: HashSet<&str> = relationships
        .iter()
        .flat_map(|rel| [rel.source.as_str(), rel.target.as_str()])
        .collect();
    concepts
        .iter()
        .filter(|concept| !touched.contains(concept.as_str()))
        .cloned()
        .collect()
}

/// Deduplicate on the exact `(source, relation, target)` triple, keeping the
/// first occurrence. The orchestrator applies this to every run; the
/// refinement loop also applies it after its final iteration.
pub(crate) fn dedup_triples(relationships: Vec<Relationship>) -> Vec<Relationship> {
    let mut seen = HashSet::new();
    relationships
        .into_iter()
        .filter(|rel| {
            seen.insert((
                rel.source.clone(),
                rel.relation.clone(),
                rel.target.clone(),
            ))
        })
        .collect()
}
