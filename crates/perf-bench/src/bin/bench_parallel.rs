use perf_bench::*;

fn main() {
    let graph = grid_graph(GRID_SIDE, GRID_SIDE).expect("Failed to build benchmark grid");

    let result = run_basis(&graph, 0).expect("Parallel basis computation failed");

    print_result("Parallel", &result);
}
