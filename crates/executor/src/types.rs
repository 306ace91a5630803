use mcb_core::MultiGraph;

use super::error::Error;

/// A trait defining the contract for any source that produces the weighted graph
/// handed to the solver.
///
/// This trait decouples the pipeline from the concrete origin of the graph
/// (CSV edge list vs. simulated data).
#[async_trait::async_trait]
pub trait GraphSource: Send + Sync + 'static {
    async fn load_graph(self) -> Result<MultiGraph<f64>, Error>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Sim,
    Csv(String),
}
