//! Boundary between hypergraphs and external partitioning engines.

use crate::hypergraph::Hypergraph;
use crate::partitioning::context::PartitionContext;
use crate::partitioning::error::PartitionError;

/// Raw arrays an engine consumes, borrowed straight from a [`Hypergraph`].
#[derive(Debug, Clone, Copy)]
pub struct EngineInput<'a> {
    pub vertex_count: usize,
    pub hyperedge_count: usize,
    pub vertex_weights: Option<&'a [i32]>,
    pub hyperedge_weights: Option<&'a [i32]>,
    /// CSR offsets, `hyperedge_count + 1` long.
    pub hyperedge_indices: &'a [usize],
    /// CSR pins, 0-based.
    pub hyperedge_vertices: &'a [u32],
}

impl<'a> From<&'a Hypergraph> for EngineInput<'a> {
    fn from(hypergraph: &'a Hypergraph) -> Self {
        Self {
            vertex_count: hypergraph.vertex_count(),
            hyperedge_count: hypergraph.hyperedge_count(),
            vertex_weights: hypergraph.vertex_weights(),
            hyperedge_weights: hypergraph.hyperedge_weights(),
            hyperedge_indices: hypergraph.hyperedge_indices(),
            hyperedge_vertices: hypergraph.hyperedge_vertices(),
        }
    }
}

/// What an engine returns: one block id per vertex and the objective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    pub assignment: Vec<i32>,
    pub objective: i32,
}

/// A partitioning heuristic.
pub trait PartitionEngine {
    /// Compute a fresh partition.
    fn partition(
        &mut self,
        ctx: &PartitionContext,
        input: &EngineInput<'_>,
    ) -> Result<EngineOutput, PartitionError>;

    /// Refine `initial` for `iterations` rounds.
    fn improve(
        &mut self,
        ctx: &PartitionContext,
        input: &EngineInput<'_>,
        initial: &[i32],
        iterations: usize,
    ) -> Result<EngineOutput, PartitionError>;
}

impl<E: PartitionEngine + ?Sized> PartitionEngine for Box<E> {
    fn partition(
        &mut self,
        ctx: &PartitionContext,
        input: &EngineInput<'_>,
    ) -> Result<EngineOutput, PartitionError> {
        (**self).partition(ctx, input)
    }

    fn improve(
        &mut self,
        ctx: &PartitionContext,
        input: &EngineInput<'_>,
        initial: &[i32],
        iterations: usize,
    ) -> Result<EngineOutput, PartitionError> {
        (**self).improve(ctx, input, initial, iterations)
    }
}
