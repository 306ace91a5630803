use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::config::SimulatorConfig;
use super::error::Error;
use super::types::GraphSource;
use common::types::Edge;
use mcb_core::MultiGraph;

/// Smallest weight the simulator hands out.
const MIN_WEIGHT: f64 = 1.0;

/// Produces a random undirected multigraph for simulation purposes.
///
/// Endpoints are drawn uniformly, so parallel edges appear naturally; self-loops
/// are kept only when the config allows them. A fixed `seed` makes runs repeatable.
pub struct SimulatorSource {
    config: SimulatorConfig,
}

impl SimulatorSource {
    pub fn new(config: SimulatorConfig) -> Self {
        SimulatorSource { config }
    }

    fn generate_edges(&self) -> Vec<Edge> {
        let n = self.config.total_nodes;
        if n == 0 {
            return Vec::new();
        }

        let mut rng: SmallRng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let max_weight = self.config.max_weight.max(MIN_WEIGHT);
        let node_range = 0..n;

        (0..self.config.total_edges)
            .filter_map(|_| {
                let from = rng.random_range(node_range.clone());
                let mut to = rng.random_range(node_range.clone());
                if from == to && !self.config.self_loops {
                    if n == 1 {
                        return None;
                    }
                    to = (to + 1) % n;
                }
                let weight = rng.random_range(MIN_WEIGHT..=max_weight);

                Some((from, to, weight))
            })
            .collect()
    }
}

#[async_trait]
impl GraphSource for SimulatorSource {
    async fn load_graph(self) -> Result<MultiGraph<f64>, Error> {
        let edges = self.generate_edges();

        info!(
            nodes = self.config.total_nodes,
            edges = edges.len(),
            seed = ?self.config.seed,
            "SimulatorSource: generated random multigraph"
        );

        Ok(MultiGraph::from_weighted_edges(
            self.config.total_nodes,
            &edges,
        )?)
    }
}
