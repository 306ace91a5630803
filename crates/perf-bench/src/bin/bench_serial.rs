use perf_bench::*;

fn main() {
    let graph = grid_graph(GRID_SIDE, GRID_SIDE).expect("Failed to build benchmark grid");

    // Threshold above any node count keeps every shortest-path tree on this thread.
    let result = run_basis(&graph, usize::MAX).expect("Serial basis computation failed");

    print_result("Serial", &result);
}
