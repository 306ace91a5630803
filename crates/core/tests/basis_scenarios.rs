use common::error::Error;
use mcb_core::{
    BasisOptions, CycleBasisSolver, HortonSolver, MultiGraph, minimum_cycle_basis,
    minimum_cycle_basis_weighted,
};

const HEXAGON_WITH_CHORD: [(usize, usize); 7] =
    [(0, 1), (0, 3), (0, 5), (1, 2), (2, 3), (3, 4), (4, 5)];

fn sorted_cycles(cycles: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    let mut res: Vec<Vec<usize>> = cycles
        .into_iter()
        .map(|mut c| {
            c.sort_unstable();
            c
        })
        .collect();
    res.sort();
    res
}

fn ten_node_fixture() -> MultiGraph {
    MultiGraph::from_edge_list(
        10,
        &[
            (0, 1),
            (0, 3),
            (0, 5),
            (0, 8),
            (1, 2),
            (1, 6),
            (2, 3),
            (3, 4),
            (4, 5),
            (6, 7),
            (7, 8),
            (8, 9),
        ],
    )
    .unwrap()
}

#[test]
fn default_weights() {
    let graph = MultiGraph::from_edge_list(6, &HEXAGON_WITH_CHORD).unwrap();

    let cycles = minimum_cycle_basis(&graph).unwrap();
    assert_eq!(sorted_cycles(cycles), vec![vec![0, 1, 2, 3], vec![0, 3, 4, 5]]);
}

#[test]
fn custom_weights() {
    let graph = MultiGraph::from_edge_list(6, &HEXAGON_WITH_CHORD).unwrap();

    // Make edge (0, 5) more expensive
    let cycles = minimum_cycle_basis_weighted(&graph, |e| {
        if e.source == 0 && e.target == 5 { 3.0 } else { 1.0 }
    })
    .unwrap();
    assert_eq!(sorted_cycles(cycles), vec![vec![0, 1, 2, 3], vec![0, 3, 4, 5]]);
}

#[test]
fn weighted_edges_keep_the_same_cycles() {
    let graph = MultiGraph::from_edge_list(6, &HEXAGON_WITH_CHORD).unwrap();

    let weight = |a: usize, b: usize| match (a.min(b), a.max(b)) {
        (0, 1) => 2.0,
        (0, 5) => 3.0,
        _ => 1.0,
    };
    let cycles = HortonSolver::default()
        .cycle_basis(&graph, |e| weight(e.source, e.target))
        .unwrap();

    let mut weights: Vec<f64> = cycles.iter().map(|c| c.weight).collect();
    weights.sort_by(f64::total_cmp);
    assert_eq!(weights, vec![5.0, 6.0]);

    let vertices = cycles.into_iter().map(|c| c.vertices).collect();
    assert_eq!(sorted_cycles(vertices), vec![vec![0, 1, 2, 3], vec![0, 3, 4, 5]]);
}

#[test]
fn tree_has_no_cycles() {
    let tree = MultiGraph::from_edge_list(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();

    assert!(minimum_cycle_basis(&tree).unwrap().is_empty());
}

#[test]
fn empty_graph_has_no_cycles() {
    let empty: MultiGraph = MultiGraph::new_undirected();

    assert!(minimum_cycle_basis(&empty).unwrap().is_empty());
}

#[test]
fn directed_graph_is_rejected() {
    let mut digraph: MultiGraph = MultiGraph::new_directed();
    digraph.add_nodes(3);
    digraph
        .add_edges_from_no_data([(0, 1), (1, 2), (2, 0)])
        .unwrap();

    assert_eq!(minimum_cycle_basis(&digraph), Err(Error::InvalidGraphKind));
}

#[test]
fn single_cycle() {
    let graph = MultiGraph::from_edge_list(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();

    let cycles = minimum_cycle_basis(&graph).unwrap();
    assert_eq!(sorted_cycles(cycles), vec![vec![0, 1, 2]]);
}

#[test]
fn disconnected_cycles() {
    let graph = MultiGraph::from_edge_list(
        6,
        &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)], // Two triangles
    )
    .unwrap();

    let cycles = minimum_cycle_basis(&graph).unwrap();
    assert_eq!(sorted_cycles(cycles), vec![vec![0, 1, 2], vec![3, 4, 5]]);
}

#[test]
fn self_loop_is_a_singleton_cycle() {
    let mut graph = ten_node_fixture();
    graph.add_edge(1, 1, ()).unwrap();

    let cycles = minimum_cycle_basis(&graph).unwrap();
    assert_eq!(
        sorted_cycles(cycles),
        vec![vec![0, 1, 2, 3], vec![0, 1, 6, 7, 8], vec![0, 3, 4, 5], vec![1]]
    );
}

#[test]
fn two_connected_squares() {
    let graph = MultiGraph::from_edge_list(
        8,
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0), // Square
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4), // Another square
            (0, 4),
            (1, 5), // Connecting edges
        ],
    )
    .unwrap();

    let cycles = minimum_cycle_basis(&graph).unwrap();
    assert_eq!(
        sorted_cycles(cycles),
        vec![vec![0, 1, 2, 3], vec![0, 1, 4, 5], vec![4, 5, 6, 7]]
    );
}

#[test]
fn negative_weight_is_rejected() {
    let graph = MultiGraph::from_edge_list(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();

    let result = minimum_cycle_basis_weighted(&graph, |e| if e.id == 2 { -1.0 } else { 1.0 });
    assert_eq!(
        result,
        Err(Error::InvalidWeight {
            edge: 2,
            weight: -1.0
        })
    );
}

#[test]
fn nan_weight_is_rejected() {
    let graph = MultiGraph::from_edge_list(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();

    let result = minimum_cycle_basis_weighted(&graph, |_| f64::NAN);
    assert!(matches!(result, Err(Error::InvalidWeight { edge: 0, .. })));
}

#[test]
fn recomputation_is_identical() {
    let graph = ten_node_fixture();

    let first = minimum_cycle_basis(&graph).unwrap();
    let second = minimum_cycle_basis(&graph).unwrap();
    assert_eq!(first, second);
}

#[test]
fn isolated_nodes_do_not_add_cycles() {
    let mut graph = MultiGraph::from_edge_list(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
    graph.add_nodes(5);

    assert_eq!(minimum_cycle_basis(&graph).unwrap().len(), 1);
}

#[test]
fn large_grid_runs_in_parallel() {
    // 12 x 12 grid: every unit square is a basis cycle.
    let side = 12;
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            let node = r * side + c;
            if c + 1 < side {
                edges.push((node, node + 1));
            }
            if r + 1 < side {
                edges.push((node, node + side));
            }
        }
    }
    let graph = MultiGraph::from_edge_list(side * side, &edges).unwrap();

    let solver = HortonSolver::new(BasisOptions {
        parallel_threshold: 1,
        ..BasisOptions::default()
    });
    let cycles = solver.cycle_basis(&graph, |_| 1.0).unwrap();

    assert_eq!(cycles.len(), (side - 1) * (side - 1));
    assert!(cycles.iter().all(|c| c.len() == 4 && c.weight == 4.0));
}
