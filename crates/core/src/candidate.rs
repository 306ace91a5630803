use rayon::prelude::*;

use super::cancel::CancelToken;
use super::gf2::BitVec;
use super::shortest_path::ShortestPathTree;
use super::snapshot::GraphSnapshot;
use common::error::Error;

/// A Horton candidate: the closed walk `source -> a`, edge `(a, b)`, `b -> source`.
#[derive(Debug, Clone)]
pub struct CycleCandidate {
    pub weight: f64,
    pub edges: BitVec,
    pub source: usize,
    pub closing_edge: usize,
}

/// Enumerates Horton candidates for every source vertex.
///
/// Each source builds its own shortest-path tree, turns it into candidates and drops
/// it. Sources are processed on the rayon pool when `parallel` is set; results are
/// concatenated in source order either way, so the output does not depend on it.
///
/// # Errors
/// Returns `Error::Cancelled` if `cancel` fires before every source has been processed.
pub fn generate_candidates(
    graph: &GraphSnapshot,
    parallel: bool,
    cancel: &CancelToken,
) -> Result<Vec<CycleCandidate>, Error> {
    let per_source = |source: usize| -> Result<Vec<CycleCandidate>, Error> {
        cancel.check()?;
        let tree = ShortestPathTree::dijkstra(graph, source);
        Ok(candidates_from_tree(graph, &tree))
    };

    let batches: Vec<Vec<CycleCandidate>> = if parallel {
        (0..graph.num_nodes)
            .into_par_iter()
            .map(per_source)
            .collect::<Result<_, _>>()?
    } else {
        (0..graph.num_nodes)
            .map(per_source)
            .collect::<Result<_, _>>()?
    };

    Ok(batches.into_iter().flatten().collect())
}

/// Candidates closed by each simple edge against one shortest-path tree.
///
/// An edge `(a, b)` is skipped when:
/// - `a` or `b` is unreachable from the source,
/// - it is a tree edge (the walk would cancel to zero along it),
/// - neither endpoint is the source and both hang below the same child of the source,
///   in which case the two tree paths share that child and the walk is not simple.
pub fn candidates_from_tree(graph: &GraphSnapshot, tree: &ShortestPathTree) -> Vec<CycleCandidate> {
    let source = tree.source;
    let mut candidates = Vec::new();

    for &edge in &graph.simple_edges {
        let (a, b) = graph.endpoints(edge);

        if !tree.is_reachable(a) || !tree.is_reachable(b) {
            continue;
        }
        if tree.parent_edge[a] == Some(edge) || tree.parent_edge[b] == Some(edge) {
            continue;
        }
        if a != source && b != source && tree.branch[a] == tree.branch[b] {
            continue;
        }

        // Disjoint paths, so the XOR is their union plus the closing edge.
        let mut edges = tree.path(a).clone();
        edges.xor_assign(tree.path(b));
        edges.flip(edge);

        candidates.push(CycleCandidate {
            weight: tree.distance[a] + graph.weight(edge) + tree.distance[b],
            edges,
            source,
            closing_edge: edge,
        });
    }

    candidates
}
