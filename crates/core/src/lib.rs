//! Minimum cycle basis of weighted undirected multigraphs.
//!
//! Horton's candidate cycles (one per source vertex and closing edge, built from
//! shortest-path trees) are sorted by weight and fed greedily into a GF(2) vector
//! space over edge ids; the independent ones form a basis of minimum total weight.
//!
//! ```
//! use mcb_core::{MultiGraph, minimum_cycle_basis};
//!
//! let graph = MultiGraph::from_edge_list(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
//! let cycles = minimum_cycle_basis(&graph).unwrap();
//! assert_eq!(cycles.len(), 1);
//! ```

pub mod basis;
pub mod cancel;
pub mod candidate;
pub mod gf2;
pub mod graph;
pub mod mapper;
pub mod shortest_path;
pub mod snapshot;
pub mod traits;

pub use basis::{BasisOptions, HortonSolver};
pub use cancel::CancelToken;
pub use graph::{EdgeRef, MultiGraph};
pub use snapshot::GraphSnapshot;
pub use traits::{CycleBasisSolver, GraphView};

use common::error::Error;

/// Minimum cycle basis with every edge weighing 1.0.
///
/// Each cycle is returned as its vertices in traversal order; a self-loop is a
/// single vertex. Forests (including the empty graph) yield no cycles.
///
/// # Errors
/// `Error::InvalidGraphKind` if `graph` is directed.
pub fn minimum_cycle_basis<G>(graph: &G) -> Result<Vec<Vec<usize>>, Error>
where
    G: GraphView,
{
    minimum_cycle_basis_weighted(graph, |_| 1.0)
}

/// Minimum cycle basis under a caller-supplied edge weight.
///
/// # Errors
/// - `Error::InvalidGraphKind` if `graph` is directed.
/// - `Error::InvalidWeight` if `weight_fn` returns a negative or non-finite value.
pub fn minimum_cycle_basis_weighted<G, F>(graph: &G, weight_fn: F) -> Result<Vec<Vec<usize>>, Error>
where
    G: GraphView,
    F: FnMut(EdgeRef<'_, G::EdgeWeight>) -> f64,
{
    let cycles = HortonSolver::default().cycle_basis(graph, weight_fn)?;
    Ok(cycles.into_iter().map(|cycle| cycle.vertices).collect())
}
