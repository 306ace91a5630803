// ----------------------------
// Benchmark fixtures
// ----------------------------

use std::hint::black_box;
use std::time::{Duration, Instant};

use common::{error::Error, types::Edge};
use mcb_core::{BasisOptions, CycleBasisSolver, HortonSolver, MultiGraph};

pub const GRID_SIDE: usize = 24;

/// A `rows x cols` grid whose weights vary by position, so shortest paths are not
/// decided by ties alone.
pub fn grid_graph(rows: usize, cols: usize) -> Result<MultiGraph<f64>, Error> {
    let mut edges: Vec<Edge> = Vec::with_capacity(2 * rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let node = r * cols + c;
            let weight = 1.0 + ((r * 7 + c * 3) % 5) as f64 * 0.25;
            if c + 1 < cols {
                edges.push((node, node + 1, weight));
            }
            if r + 1 < rows {
                edges.push((node, node + cols, weight + 0.5));
            }
        }
    }

    MultiGraph::from_weighted_edges(rows * cols, &edges)
}

pub struct BenchResult {
    pub cycles: usize,
    pub total_weight: f64,
    pub elapsed: Duration,
}

/// Times one basis computation with the given parallel threshold.
pub fn run_basis(graph: &MultiGraph<f64>, parallel_threshold: usize) -> Result<BenchResult, Error> {
    let solver = HortonSolver::new(BasisOptions {
        parallel_threshold,
        ..BasisOptions::default()
    });

    let start_time = Instant::now();
    let cycles = solver.cycle_basis(black_box(graph), |e| *e.weight)?;
    let elapsed = start_time.elapsed();

    Ok(BenchResult {
        cycles: cycles.len(),
        total_weight: black_box(cycles.iter().map(|c| c.weight).sum()),
        elapsed,
    })
}

pub fn print_result(label: &str, result: &BenchResult) {
    println!(
        "--- {} Benchmark Results ({}x{} grid) ---",
        label, GRID_SIDE, GRID_SIDE
    );
    println!("Basis size: {}", result.cycles);
    println!("Total weight: {:.4}", result.total_weight);
    println!("Elapsed Time: {:?}", result.elapsed);
}
