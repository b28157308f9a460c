//! Partitioning errors for hypergraph-csr

use thiserror::Error;

use crate::hypergraph_error::HypergraphError;

/// Errors from the partitioner and its engines
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// Improvement was requested before any partition was computed
    #[error("No partition computed yet; call compute_partition first")]
    NoPartitionYet,
    /// The engine returned an assignment of the wrong length
    #[error("Engine returned {found} block ids for {expected} vertices")]
    AssignmentLength { expected: usize, found: usize },
    /// The engine placed a vertex outside `0..blocks`
    #[error("Vertex {vertex} assigned to block {block}, outside 0..{blocks}")]
    InvalidBlock { vertex: u32, block: i32, blocks: usize },
    /// The engine itself failed (e.g. native KaHyPar errors)
    #[error("Partitioning engine error: {0}")]
    Engine(String),
    /// Lookups on the hypergraph or the partition failed
    #[error(transparent)]
    Hypergraph(#[from] HypergraphError),
}
