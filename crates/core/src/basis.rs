use std::collections::HashSet;

use tracing::{debug, warn};

use super::cancel::CancelToken;
use super::candidate::{CycleCandidate, generate_candidates};
use super::gf2::{BitVec, CycleSpace, Insertion};
use super::graph::EdgeRef;
use super::mapper::trace_cycle;
use super::snapshot::GraphSnapshot;
use super::traits::{CycleBasisSolver, GraphView};
use common::{error::Error, types::WeightedCycle};

/// Node count from which per-source work is spread over the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

#[derive(Debug, Clone)]
pub struct BasisOptions {
    /// Graphs with at least this many nodes build their shortest-path trees in parallel.
    pub parallel_threshold: usize,
    pub cancel: CancelToken,
}

impl Default for BasisOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            cancel: CancelToken::new(),
        }
    }
}

/// Minimum cycle basis solver using Horton's candidate set and greedy GF(2) selection.
///
/// Pipeline: snapshot → per-source shortest-path trees and candidates → sort by weight
/// → greedy insertion into a `CycleSpace` → trail reconstruction.
#[derive(Debug, Clone, Default)]
pub struct HortonSolver {
    options: BasisOptions,
}

impl HortonSolver {
    pub fn new(options: BasisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BasisOptions {
        &self.options
    }

    /// Runs selection on an existing snapshot and returns the accepted edge vectors.
    ///
    /// Self-loops come first, in edge id order, followed by the greedy picks in
    /// ascending weight order.
    pub fn select_basis(&self, graph: &GraphSnapshot) -> Result<Vec<BitVec>, Error> {
        let cancel = &self.options.cancel;
        cancel.check()?;

        let target_rank = graph.cycle_rank();
        debug!(
            nodes = graph.num_nodes,
            edges = graph.edge_count(),
            self_loops = graph.self_loops.len(),
            target_rank,
            "snapshot ready"
        );

        let mut space = CycleSpace::new(graph.edge_count());
        let mut accepted = Vec::with_capacity(target_rank);

        // A self-loop is the only cycle using its edge id, so it is always independent.
        for &edge in &graph.self_loops {
            let vector = BitVec::singleton(graph.edge_count(), edge);
            if let Insertion::Independent { .. } = space.test_and_insert(&vector) {
                accepted.push(vector);
            }
        }

        if space.rank() == target_rank {
            return Ok(accepted);
        }

        let parallel = graph.num_nodes >= self.options.parallel_threshold;
        let candidates = generate_candidates(graph, parallel, cancel)?;
        let generated = candidates.len();
        let candidates = sort_and_dedup(candidates);
        debug!(
            generated,
            distinct = candidates.len(),
            parallel,
            "candidates ready"
        );

        greedy_select(&mut space, candidates, target_rank, cancel, &mut accepted)?;
        debug!(accepted = accepted.len(), "greedy selection finished");

        Ok(accepted)
    }
}

/// Offers `candidates` to `space` in order until it reaches `target_rank`, pushing
/// every independent one onto `accepted`.
///
/// # Errors
/// - `Error::Cancelled` if `cancel` fires between candidates.
/// - `Error::IncompleteBasis` if the candidates run out below `target_rank`.
fn greedy_select(
    space: &mut CycleSpace,
    candidates: Vec<CycleCandidate>,
    target_rank: usize,
    cancel: &CancelToken,
    accepted: &mut Vec<BitVec>,
) -> Result<(), Error> {
    for candidate in candidates {
        if space.rank() == target_rank {
            break;
        }
        cancel.check()?;

        if let Insertion::Independent { .. } = space.test_and_insert(&candidate.edges) {
            accepted.push(candidate.edges);
        }
    }

    if space.rank() < target_rank {
        warn!(
            rank = space.rank(),
            target_rank, "candidates exhausted before reaching the cycle rank"
        );
        return Err(Error::IncompleteBasis {
            rank: space.rank(),
            target: target_rank,
        });
    }

    Ok(())
}

/// Orders candidates by weight, keeping generation order among equal weights,
/// and keeps only the first occurrence of each edge vector.
fn sort_and_dedup(mut candidates: Vec<CycleCandidate>) -> Vec<CycleCandidate> {
    candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let keep: Vec<bool> = {
        let mut seen: HashSet<&BitVec> = HashSet::with_capacity(candidates.len());
        candidates.iter().map(|c| seen.insert(&c.edges)).collect()
    };

    let mut keep = keep.into_iter();
    candidates.retain(|_| keep.next().unwrap_or(false));
    candidates
}

impl CycleBasisSolver for HortonSolver {
    fn cycle_basis<G, F>(&self, graph: &G, weight_fn: F) -> Result<Vec<WeightedCycle>, Error>
    where
        G: GraphView,
        F: FnMut(EdgeRef<'_, G::EdgeWeight>) -> f64,
    {
        let snapshot = GraphSnapshot::from_graph(graph, weight_fn)?;

        self.select_basis(&snapshot)?
            .iter()
            .map(|vector| trace_cycle(&snapshot, vector))
            .collect()
    }
}
