//! Graph assembly: turn final concept and relationship lists into an indexed
//! node/edge graph with derived statistics. Pure and synchronous.

use conceptgraph_core::{ConceptGraph, EdgeId, GraphEdge, GraphNode, NodeId, Relationship};

/// Build the final graph. Nodes appear in extraction order; edges resolve
/// endpoints to the first node whose label matches, and edges with an
/// unresolvable endpoint are dropped.
pub fn assemble(concepts: Vec<String>, relationships: Vec<Relationship>) -> ConceptGraph {
    let nodes: Vec<GraphNode> = concepts
        .iter()
        .map(|label| GraphNode {
            id: NodeId::new_v4(),
            label: label.clone(),
            connections: relationships
                .iter()
                .filter(|rel| rel.source == *label || rel.target == *label)
                .count(),
        })
        .collect();

    let resolve = |label: &str| concepts.iter().position(|c| c == label);

    let edges: Vec<GraphEdge> = relationships
        .iter()
        .filter_map(|rel| {
            let source = resolve(&rel.source)?;
            let target = resolve(&rel.target)?;
            Some(GraphEdge {
                id: EdgeId::new_v4(),
                source,
                target,
                label: rel.relation.clone(),
                original_label: rel.original_relation.clone(),
            })
        })
        .collect();

    let isolated_concepts = (0..nodes.len())
        .filter(|&i| !edges.iter().any(|e| e.source == i || e.target == i))
        .count();

    ConceptGraph {
        concepts,
        relationships,
        nodes,
        edges,
        isolated_concepts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn concepts(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn counts_isolated_concepts() {
        let graph = assemble(
            concepts(&["A", "B", "C"]),
            vec![Relationship::new("A", "uses", "B")],
        );
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.isolated_concepts, 1);
    }

    #[test]
    fn drops_edges_with_unknown_endpoints() {
        let graph = assemble(
            concepts(&["A", "B"]),
            vec![
                Relationship::new("A", "uses", "B"),
                Relationship::new("A", "links", "Z"),
                Relationship::new("Z", "links", "B"),
            ],
        );
        assert_eq!(graph.edges.len(), 1);
        for edge in &graph.edges {
            assert!(edge.source < graph.nodes.len());
            assert!(edge.target < graph.nodes.len());
        }
    }

    #[test]
    fn connection_counts_cover_source_and_target() {
        let graph = assemble(
            concepts(&["A", "B", "C"]),
            vec![
                Relationship::new("A", "uses", "B"),
                Relationship::new("C", "links", "A"),
            ],
        );
        assert_eq!(graph.nodes[0].connections, 2);
        assert_eq!(graph.nodes[1].connections, 1);
        assert_eq!(graph.nodes[2].connections, 1);
    }

    #[test]
    fn duplicate_labels_resolve_to_first_occurrence() {
        let graph = assemble(
            concepts(&["A", "B", "A"]),
            vec![Relationship::new("A", "uses", "B")],
        );
        assert_eq!(graph.edges[0].source, 0);
        // The duplicate node at index 2 collects no edges.
        assert_eq!(graph.isolated_concepts, 1);
    }

    #[test]
    fn empty_input_yields_empty_graph() {
        let graph = assemble(Vec::new(), Vec::new());
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
        assert_eq!(graph.isolated_concepts, 0);
    }
}
