use super::graph::EdgeRef;
use common::{error::Error, types::WeightedCycle};

/// Read-only view of a host multigraph.
///
/// Edge ids must be dense (`0..edge_count()`) and stable for the lifetime of the
/// borrow; `edge_refs` yields them in increasing id order.
pub trait GraphView {
    /// Payload attached to each edge, handed to weight functions.
    type EdgeWeight;

    fn is_directed(&self) -> bool;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn edge_refs(&self) -> impl Iterator<Item = EdgeRef<'_, Self::EdgeWeight>>;
}

/// Trait for solvers that compute a minimum-weight cycle basis.
pub trait CycleBasisSolver {
    /// Computes a minimum cycle basis of `graph` under `weight_fn`.
    ///
    /// Returns one `WeightedCycle` per basis element, or `Err(e)` if the graph is
    /// directed, a weight is invalid, or the computation was cancelled.
    fn cycle_basis<G, F>(&self, graph: &G, weight_fn: F) -> Result<Vec<WeightedCycle>, Error>
    where
        G: GraphView,
        F: FnMut(EdgeRef<'_, G::EdgeWeight>) -> f64;
}
