use std::ops::Range;

use super::traits::GraphView;
use common::error::Error;
use common::types::Edge;

/// Borrowed view of one edge, as handed to weight functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef<'a, E> {
    pub id: usize,
    pub source: usize,
    pub target: usize,
    pub weight: &'a E,
}

/// Minimal multigraph container with dense node and edge indices.
///
/// Nodes are `0..node_count`, edges are numbered in insertion order. Parallel
/// edges and self-loops are kept as distinct edges. The `directed` flag only
/// records the graph kind; the cycle basis solver rejects directed graphs.
#[derive(Debug, Clone)]
pub struct MultiGraph<E = ()> {
    directed: bool,
    node_count: usize,
    edges: Vec<(usize, usize, E)>,
}

impl<E> MultiGraph<E> {
    pub fn new_undirected() -> Self {
        Self {
            directed: false,
            node_count: 0,
            edges: Vec::new(),
        }
    }

    pub fn new_directed() -> Self {
        Self {
            directed: true,
            node_count: 0,
            edges: Vec::new(),
        }
    }

    /// Adds a node and returns its index.
    pub fn add_node(&mut self) -> usize {
        self.node_count += 1;
        self.node_count - 1
    }

    /// Adds `count` nodes and returns their index range.
    pub fn add_nodes(&mut self, count: usize) -> Range<usize> {
        let start = self.node_count;
        self.node_count += count;
        start..self.node_count
    }

    /// Adds an edge between existing nodes and returns its id.
    ///
    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` if either endpoint does not exist.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: E) -> Result<usize, Error> {
        for node in [a, b] {
            if node >= self.node_count {
                return Err(Error::NodeIndexOutOfBounds(node));
            }
        }

        self.edges.push((a, b, weight));
        Ok(self.edges.len() - 1)
    }

    /// Adds a batch of edges, failing on the first out-of-bounds endpoint.
    pub fn add_edges_from<I>(&mut self, edges: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (usize, usize, E)>,
    {
        for (a, b, weight) in edges {
            self.add_edge(a, b, weight)?;
        }
        Ok(())
    }
}

impl MultiGraph<()> {
    /// Adds payload-free edges.
    pub fn add_edges_from_no_data<I>(&mut self, edges: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.add_edges_from(edges.into_iter().map(|(a, b)| (a, b, ())))
    }

    /// Builds an undirected graph with `num_nodes` nodes and payload-free edges.
    pub fn from_edge_list(num_nodes: usize, edges: &[(usize, usize)]) -> Result<Self, Error> {
        let mut graph = Self::new_undirected();
        graph.add_nodes(num_nodes);
        graph.add_edges_from_no_data(edges.iter().copied())?;
        Ok(graph)
    }
}

impl MultiGraph<f64> {
    /// Builds an undirected graph whose payload is the edge weight.
    pub fn from_weighted_edges(num_nodes: usize, edges: &[Edge]) -> Result<Self, Error> {
        let mut graph = Self::new_undirected();
        graph.add_nodes(num_nodes);
        graph.add_edges_from(edges.iter().copied())?;
        Ok(graph)
    }
}

impl<E> Default for MultiGraph<E> {
    fn default() -> Self {
        Self::new_undirected()
    }
}

impl<E> GraphView for MultiGraph<E> {
    type EdgeWeight = E;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_refs(&self) -> impl Iterator<Item = EdgeRef<'_, E>> {
        self.edges
            .iter()
            .enumerate()
            .map(|(id, (source, target, weight))| EdgeRef {
                id,
                source: *source,
                target: *target,
                weight,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_ids_follow_insertion_order() {
        let mut graph = MultiGraph::new_undirected();
        graph.add_nodes(3);

        assert_eq!(graph.add_edge(0, 1, ()).unwrap(), 0);
        assert_eq!(graph.add_edge(0, 1, ()).unwrap(), 1); // parallel edge keeps its own id
        assert_eq!(graph.add_edge(2, 2, ()).unwrap(), 2);

        let ids: Vec<usize> = graph.edge_refs().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn add_edge_rejects_missing_node() {
        let mut graph: MultiGraph = MultiGraph::new_undirected();
        graph.add_node();

        assert_eq!(graph.add_edge(0, 5, ()), Err(Error::NodeIndexOutOfBounds(5)));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn weighted_edges_expose_payload() {
        let graph = MultiGraph::from_weighted_edges(2, &[(0, 1, 2.5)]).unwrap();
        let edge = graph.edge_refs().next().unwrap();

        assert_eq!((edge.source, edge.target, *edge.weight), (0, 1, 2.5));
        assert!(!graph.is_directed());
    }

    #[test]
    fn directed_flag_is_recorded() {
        let graph: MultiGraph = MultiGraph::new_directed();
        assert!(graph.is_directed());
    }
}
