use std::time::Duration;

use tokio::time;
use tracing::{info, warn};

use super::error::Error;
use common::error::Error as CycleBasisError;
use common::types::WeightedCycle;
use mcb_core::{CancelToken, CycleBasisSolver, GraphView, MultiGraph};

/// Runs a cycle basis solver off the async runtime.
///
/// The solver is CPU-bound, so it is moved onto the blocking pool. When a timeout is
/// configured and expires, the shared `CancelToken` is fired and the runner waits for
/// the solver to notice before reporting `Error::Timeout`.
pub struct BasisRunner<S>
where
    S: CycleBasisSolver + Send + 'static,
{
    solver: S,
    cancel: CancelToken,
    timeout_ms: Option<u64>,
}

impl<S> BasisRunner<S>
where
    S: CycleBasisSolver + Send + 'static,
{
    /// `cancel` must be the token the solver polls.
    pub fn new(solver: S, cancel: CancelToken, timeout_ms: Option<u64>) -> Self {
        Self {
            solver,
            cancel,
            timeout_ms,
        }
    }

    pub async fn run(self, graph: MultiGraph<f64>) -> Result<Vec<WeightedCycle>, Error> {
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Runner: computing minimum cycle basis"
        );

        let solver = self.solver;
        let mut task =
            tokio::task::spawn_blocking(move || solver.cycle_basis(&graph, |e| *e.weight));

        let joined = match self.timeout_ms {
            None => task.await,
            Some(ms) => match time::timeout(Duration::from_millis(ms), &mut task).await {
                Ok(joined) => joined,
                Err(_) => {
                    warn!(timeout_ms = ms, "Runner: timeout elapsed, cancelling solver");
                    self.cancel.cancel();
                    // The solver returns `Cancelled` at its next checkpoint.
                    match task.await {
                        Err(join_error) => {
                            warn!(error = %join_error, "Runner: solver task failed after cancellation")
                        }
                        Ok(Err(e)) if e != CycleBasisError::Cancelled => {
                            warn!(error = %e, "Runner: solver failed after cancellation")
                        }
                        Ok(_) => {}
                    }
                    return Err(Error::Timeout(ms));
                }
            },
        };

        let cycles = joined.map_err(|e| Error::TaskFailed(e.to_string()))??;
        Ok(cycles)
    }
}
