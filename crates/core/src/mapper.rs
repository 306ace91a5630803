use std::collections::HashMap;

use super::gf2::BitVec;
use super::snapshot::GraphSnapshot;
use common::{error::Error, numeric_kernel::compensated_sum, types::WeightedCycle};

/// Reconstructs the traversal order of a cycle from its GF(2) edge vector.
///
/// The walk starts at the first endpoint of the lowest edge id, leaves through that
/// edge, and at every vertex continues along the other incident edge of the set.
/// Edges are followed by id, so parallel edges (two-vertex cycles) walk correctly.
/// A self-loop maps to a single-vertex cycle.
///
/// # Errors
/// Returns `Error::CycleReconstructionFailed` if the set is empty or is not a single
/// simple closed trail (a vertex of degree other than two, or several components).
pub fn trace_cycle(graph: &GraphSnapshot, vector: &BitVec) -> Result<WeightedCycle, Error> {
    let edge_ids: Vec<usize> = vector.iter_ones().collect();
    let &first = edge_ids.first().ok_or(Error::CycleReconstructionFailed)?;
    let weight = compensated_sum(edge_ids.iter().map(|&e| graph.weight(e)));

    let (start, next) = graph.endpoints(first);
    if start == next {
        if edge_ids.len() != 1 {
            return Err(Error::CycleReconstructionFailed);
        }
        return Ok(WeightedCycle {
            vertices: vec![start],
            edges: vec![first],
            weight,
        });
    }

    let mut incident: HashMap<usize, Vec<usize>> = HashMap::with_capacity(edge_ids.len());
    for &edge in &edge_ids {
        let (a, b) = graph.endpoints(edge);
        if a == b {
            return Err(Error::CycleReconstructionFailed);
        }
        incident.entry(a).or_default().push(edge);
        incident.entry(b).or_default().push(edge);
    }
    if incident.values().any(|edges| edges.len() != 2) {
        return Err(Error::CycleReconstructionFailed);
    }

    let mut vertices = Vec::with_capacity(edge_ids.len());
    let mut edges = Vec::with_capacity(edge_ids.len());
    vertices.push(start);
    edges.push(first);

    let mut previous_edge = first;
    let mut current = next;

    while current != start {
        if vertices.len() == edge_ids.len() {
            return Err(Error::CycleReconstructionFailed);
        }
        vertices.push(current);

        let edge = incident[&current]
            .iter()
            .copied()
            .find(|&e| e != previous_edge)
            .ok_or(Error::CycleReconstructionFailed)?;
        edges.push(edge);

        current = graph.opposite(edge, current);
        previous_edge = edge;
    }

    // A shorter closed trail means the set held more than one cycle.
    if vertices.len() != edge_ids.len() {
        return Err(Error::CycleReconstructionFailed);
    }

    Ok(WeightedCycle {
        vertices,
        edges,
        weight,
    })
}
