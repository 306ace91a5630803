/// Type alias for a single weighted undirected edge: (endpoint_a, endpoint_b, weight)
pub type Edge = (usize, usize, f64);

/// A cycle of a minimum cycle basis.
///
/// Fields:
/// - `vertices`: The cycle in traversal order, without repeating the starting vertex.
///   A self-loop is a single vertex.
/// - `edges`: Edge ids in the same traversal order; `edges[i]` joins `vertices[i]`
///   and `vertices[(i + 1) % len]`.
/// - `weight`: Sum of the edge weights along the cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedCycle {
    pub vertices: Vec<usize>,
    pub edges: Vec<usize>,
    pub weight: f64,
}

impl WeightedCycle {
    /// Number of edges (equal to the number of vertices) in the cycle.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Vertex set of the cycle in ascending order, the form callers compare on.
    pub fn sorted_vertices(&self) -> Vec<usize> {
        let mut vertices = self.vertices.clone();
        vertices.sort_unstable();
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loop_cycle_has_one_edge() {
        let cycle = WeightedCycle {
            vertices: vec![3],
            edges: vec![7],
            weight: 0.5,
        };
        assert_eq!(cycle.len(), 1);
        assert!(!cycle.is_empty());
    }

    #[test]
    fn sorted_vertices_does_not_touch_traversal_order() {
        let cycle = WeightedCycle {
            vertices: vec![3, 0, 2],
            edges: vec![1, 0, 2],
            weight: 3.0,
        };
        assert_eq!(cycle.sorted_vertices(), vec![0, 2, 3]);
        assert_eq!(cycle.vertices, vec![3, 0, 2]);
    }
}
