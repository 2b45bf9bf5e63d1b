use thiserror::Error;

use crate::NumNodes;

/// Reasons for rejecting a graph before any solving begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidGraph {
    #[error("G needs to have 2 or more vertices, but has {0}")]
    TooFewVertices(NumNodes),
    #[error("G needs to be connected")]
    Disconnected,
    #[error("G has {n} vertices, but at most {max} are supported")]
    TooManyVertices { n: NumNodes, max: NumNodes },
}

/// Errors surfaced by the solvers and bound computations of this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZqError {
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] InvalidGraph),
    #[error("best lower bound {lower} is greater than best upper bound {upper}")]
    InconsistentBounds { lower: NumNodes, upper: NumNodes },
}

pub type Result<T, E = ZqError> = std::result::Result<T, E>;
