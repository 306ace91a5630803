use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::gf2::BitVec;
use super::snapshot::GraphSnapshot;

/// Priority of a tentative path: distance first, then the path's edge set read as a
/// binary number (the path avoiding the highest differing edge id is shorter).
///
/// The second component acts as an infinitesimal perturbation `ε·2^id` of every edge
/// weight. Shortest paths become unique and every subpath of a tree path is itself the
/// tree path, which is what Horton's candidate set relies on. When two paths share
/// everything but their last edge, the one with the lower last edge id wins.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PathKey {
    distance_bits: u64,
    edges: BitVec,
}

impl Ord for PathKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_bits
            .cmp(&other.distance_bits)
            .then_with(|| self.edges.cmp_binary(&other.edges))
    }
}

impl PartialOrd for PathKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest-path tree over the simple edges of a snapshot.
///
/// Unreachable nodes keep `distance = INFINITY`, no parent edge and an empty path;
/// the source keeps distance `0.0`, no parent edge and an empty path.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    pub source: usize,
    pub distance: Vec<f64>,
    pub parent_edge: Vec<Option<usize>>,
    /// First node after the source on the tree path to each node (the node itself for
    /// the source's direct children). `None` for the source and unreachable nodes.
    pub branch: Vec<Option<usize>>,
    paths: Vec<BitVec>,
}

impl ShortestPathTree {
    /// Dijkstra from `source` over non-negative weights via a binary heap.
    ///
    /// Time: O((V + E) log V) heap operations, each comparing paths in O(E / 64).
    pub fn dijkstra(graph: &GraphSnapshot, source: usize) -> Self {
        let n = graph.num_nodes;
        let m = graph.edge_count();
        let mut distance = vec![f64::INFINITY; n];
        let mut parent_edge: Vec<Option<usize>> = vec![None; n];
        let mut paths = vec![BitVec::zeros(m); n];
        let mut settled = vec![false; n];
        let mut settle_order = Vec::with_capacity(n);

        // Weights are validated non-negative (and +0.0), so bit patterns order like the values.
        let mut heap = BinaryHeap::new();
        distance[source] = 0.0;
        heap.push(Reverse((
            PathKey {
                distance_bits: 0.0f64.to_bits(),
                edges: BitVec::zeros(m),
            },
            source,
        )));

        while let Some(Reverse((_, u))) = heap.pop() {
            if settled[u] {
                continue;
            }
            settled[u] = true;
            settle_order.push(u);

            for (v, edge) in graph.neighbors(u) {
                if settled[v] {
                    continue;
                }

                let candidate = distance[u] + graph.weight(edge);
                if candidate > distance[v] {
                    continue;
                }

                let mut path = paths[u].clone();
                path.flip(edge);
                if candidate < distance[v] || path.cmp_binary(&paths[v]) == Ordering::Less {
                    distance[v] = candidate;
                    parent_edge[v] = Some(edge);
                    heap.push(Reverse((
                        PathKey {
                            distance_bits: candidate.to_bits(),
                            edges: path.clone(),
                        },
                        v,
                    )));
                    paths[v] = path;
                }
            }
        }

        // Parents are settled before their children, so one pass in settle order suffices.
        let mut branch: Vec<Option<usize>> = vec![None; n];
        for &v in settle_order.iter().skip(1) {
            if let Some(edge) = parent_edge[v] {
                let parent = graph.opposite(edge, v);
                branch[v] = if parent == source { Some(v) } else { branch[parent] };
            }
        }

        Self {
            source,
            distance,
            parent_edge,
            branch,
            paths,
        }
    }

    pub fn is_reachable(&self, node: usize) -> bool {
        self.distance[node].is_finite()
    }

    /// Edge set of the tree path between the source and `node`.
    pub fn path(&self, node: usize) -> &BitVec {
        &self.paths[node]
    }
}
