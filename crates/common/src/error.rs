use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input graph is directed. Cycle bases are only defined for undirected graphs.
    #[error("Invalid graph kind: minimum cycle basis requires an undirected graph.")]
    InvalidGraphKind,

    /// A weight function returned a negative, NaN or infinite value.
    #[error("Edge {edge} has invalid weight {weight}: weights must be finite and non-negative.")]
    InvalidWeight { edge: usize, weight: f64 },

    /// Indicates an attempt to access a node index that exceeds the graph size (N).
    #[error("Node index {0} is out of bounds.")]
    NodeIndexOutOfBounds(usize),

    /// An accepted edge set could not be walked as a single closed trail.
    #[error("Cycle path reconstruction failed: edge set is not a simple closed trail.")]
    CycleReconstructionFailed,

    /// Greedy selection ran out of candidate cycles below the cycle rank.
    #[error("Incomplete cycle basis: candidates span rank {rank} of {target}.")]
    IncompleteBasis { rank: usize, target: usize },

    #[error("Cycle basis computation was cancelled.")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_edge() {
        let err = Error::InvalidWeight {
            edge: 4,
            weight: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "Edge 4 has invalid weight -1.5: weights must be finite and non-negative."
        );
    }

    #[test]
    fn display_reports_reached_rank() {
        let err = Error::IncompleteBasis { rank: 1, target: 3 };
        assert_eq!(
            err.to_string(),
            "Incomplete cycle basis: candidates span rank 1 of 3."
        );
    }
}
