use super::graph::EdgeRef;
use super::traits::GraphView;
use common::error::Error;
use common::numeric_kernel::checked_weight;
use common::types::Edge;

/// Immutable, undirected snapshot of a weighted multigraph in Compressed Sparse Row (CSR) format.
///
/// Every simple (non-loop) edge is stored twice in the adjacency arrays, once per endpoint:
/// - `node_pointers[u]..node_pointers[u+1]` → adjacency slots of node `u`
/// - `adjacent_nodes[i]` → the neighbour reached through slot `i`
/// - `adjacent_edges[i]` → the edge id behind slot `i`
///
/// Within a node's block, slots are ordered by increasing edge id. Self-loops never
/// enter the adjacency arrays; they are listed in `self_loops` instead.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    pub num_nodes: usize,
    pub node_pointers: Vec<usize>,
    pub adjacent_nodes: Vec<usize>,
    pub adjacent_edges: Vec<usize>,
    /// `(endpoint_a, endpoint_b, weight)` indexed by edge id, weights already validated.
    pub edges: Vec<Edge>,
    pub self_loops: Vec<usize>,
    pub simple_edges: Vec<usize>,
}

impl GraphSnapshot {
    /// Materialises a snapshot of `graph`, evaluating `weight_fn` once per edge.
    ///
    /// # Errors
    /// - `Error::InvalidGraphKind` if the graph is directed. This is checked before any
    ///   weight is evaluated.
    /// - `Error::InvalidWeight` if `weight_fn` returns a negative or non-finite value.
    /// - `Error::NodeIndexOutOfBounds` if an edge endpoint is not a node of the graph.
    pub fn from_graph<G, F>(graph: &G, mut weight_fn: F) -> Result<Self, Error>
    where
        G: GraphView,
        F: FnMut(EdgeRef<'_, G::EdgeWeight>) -> f64,
    {
        if graph.is_directed() {
            return Err(Error::InvalidGraphKind);
        }

        let mut edges: Vec<Edge> = Vec::with_capacity(graph.edge_count());
        for edge in graph.edge_refs() {
            let (source, target, id) = (edge.source, edge.target, edge.id);
            let weight = checked_weight(id, weight_fn(edge))?;
            edges.push((source, target, weight));
        }

        Self::from_edges(graph.node_count(), edges)
    }

    /// Builds a snapshot from `(a, b, weight)` triples whose position is the edge id.
    pub fn from_edges(num_nodes: usize, mut edges: Vec<Edge>) -> Result<Self, Error> {
        let mut self_loops = Vec::new();
        let mut simple_edges = Vec::new();

        for (id, (a, b, weight)) in edges.iter_mut().enumerate() {
            let (a, b) = (*a, *b);
            for node in [a, b] {
                if node >= num_nodes {
                    return Err(Error::NodeIndexOutOfBounds(node));
                }
            }
            *weight = checked_weight(id, *weight)?;

            if a == b {
                self_loops.push(id);
            } else {
                simple_edges.push(id);
            }
        }

        let (node_pointers, adjacent_nodes, adjacent_edges) =
            Self::build_csr_from_edges(num_nodes, &edges, &simple_edges);

        Ok(Self {
            num_nodes,
            node_pointers,
            adjacent_nodes,
            adjacent_edges,
            edges,
            self_loops,
            simple_edges,
        })
    }

    /// Two-pass counting construction of the undirected CSR arrays.
    ///
    /// `simple_edges` is in increasing id order, so each node's block ends up sorted
    /// by edge id without an explicit sort.
    fn build_csr_from_edges(
        num_nodes: usize,
        edges: &[Edge],
        simple_edges: &[usize],
    ) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
        let mut node_pointers = vec![0; num_nodes + 1];

        for &id in simple_edges {
            let (a, b, _) = edges[id];
            node_pointers[a + 1] += 1;
            node_pointers[b + 1] += 1;
        }

        for i in 1..=num_nodes {
            node_pointers[i] += node_pointers[i - 1];
        }

        let slots = node_pointers[num_nodes];
        let mut adjacent_nodes = vec![0; slots];
        let mut adjacent_edges = vec![0; slots];

        let mut cursor = node_pointers.clone();

        for &id in simple_edges {
            let (a, b, _) = edges[id];
            for (from, to) in [(a, b), (b, a)] {
                let pos = cursor[from];
                adjacent_nodes[pos] = to;
                adjacent_edges[pos] = id;
                cursor[from] += 1;
            }
        }

        (node_pointers, adjacent_nodes, adjacent_edges)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `(neighbour, edge id)` pairs of node `u`, in increasing edge id order.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let start = self.node_pointers[u];
        let end = self.node_pointers[u + 1];
        self.adjacent_nodes[start..end]
            .iter()
            .copied()
            .zip(self.adjacent_edges[start..end].iter().copied())
    }

    pub fn endpoints(&self, edge: usize) -> (usize, usize) {
        let (a, b, _) = self.edges[edge];
        (a, b)
    }

    pub fn weight(&self, edge: usize) -> f64 {
        self.edges[edge].2
    }

    /// The endpoint of `edge` that is not `node`.
    pub fn opposite(&self, edge: usize, node: usize) -> usize {
        let (a, b) = self.endpoints(edge);
        if a == node { b } else { a }
    }

    /// Number of connected components over simple edges (isolated nodes count as one each).
    pub fn connected_components(&self) -> usize {
        let mut parent: Vec<usize> = (0..self.num_nodes).collect();
        let mut rank = vec![0u8; self.num_nodes];
        let mut components = self.num_nodes;

        for &id in &self.simple_edges {
            let (a, b) = self.endpoints(id);
            if union(&mut parent, &mut rank, a, b) {
                components -= 1;
            }
        }

        components
    }

    /// Dimension of the cycle space: `|E| - |V| + c`, self-loops included in `|E|`.
    pub fn cycle_rank(&self) -> usize {
        self.edge_count() + self.connected_components() - self.num_nodes
    }
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]]; // Path halving
        x = parent[x];
    }
    x
}

fn union(parent: &mut [usize], rank: &mut [u8], x: usize, y: usize) -> bool {
    let root_x = find(parent, x);
    let root_y = find(parent, y);

    if root_x == root_y {
        return false;
    }

    if rank[root_x] < rank[root_y] {
        parent[root_x] = root_y;
    } else if rank[root_x] > rank[root_y] {
        parent[root_y] = root_x;
    } else {
        parent[root_y] = root_x;
        rank[root_x] += 1;
    }
    true
}
