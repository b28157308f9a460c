//! Entry-point for hypergraph partitioning.
//!
//! The heuristics live in external engines ([`PartitionEngine`]); this
//! module hands them the CSR arrays of a built [`Hypergraph`] and wraps what
//! comes back into a [`HypergraphPartition`]. With the `kahypar-support`
//! feature, [`kahypar::KahyparEngine`] binds the native KaHyPar library.

pub mod context;
pub mod engine;
pub mod error;
#[cfg(feature = "kahypar-support")]
pub mod kahypar;
pub mod partition;

pub use context::PartitionContext;
pub use engine::{EngineInput, EngineOutput, PartitionEngine};
pub use error::PartitionError;
pub use partition::HypergraphPartition;

use crate::hypergraph::Hypergraph;

/// Runs an engine on one hypergraph and remembers the last partition.
#[derive(Debug)]
pub struct Partitioner<E: PartitionEngine> {
    ctx: PartitionContext,
    hypergraph: Hypergraph,
    engine: E,
    last: Option<HypergraphPartition>,
}

impl<E: PartitionEngine> Partitioner<E> {
    pub fn new(ctx: PartitionContext, hypergraph: Hypergraph, engine: E) -> Self {
        if let Some(weights) = ctx.block_weights_mismatch() {
            log::warn!(
                "partition context has {weights} block weights for {} blocks",
                ctx.blocks
            );
        }
        Self {
            ctx,
            hypergraph,
            engine,
            last: None,
        }
    }

    pub fn context(&self) -> &PartitionContext {
        &self.ctx
    }

    pub fn hypergraph(&self) -> &Hypergraph {
        &self.hypergraph
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The partition produced by the last compute or improve call.
    pub fn last_partition(&self) -> Option<&HypergraphPartition> {
        self.last.as_ref()
    }

    /// Partition the hypergraph. The engine runs only on the first call;
    /// later calls return the remembered partition.
    pub fn compute_partition(&mut self) -> Result<&HypergraphPartition, PartitionError> {
        if self.last.is_none() {
            let input = EngineInput::from(&self.hypergraph);
            let output = self.engine.partition(&self.ctx, &input)?;
            let partition = self.accept(output)?;
            log::debug!(
                "computed {}-way partition of {} vertices, objective {}",
                self.ctx.blocks,
                self.hypergraph.vertex_count(),
                partition.objective_value()
            );
            self.last = Some(partition);
        }
        self.last.as_ref().ok_or(PartitionError::NoPartitionYet)
    }

    /// Refine the last partition with a single iteration.
    pub fn improve_partition_once(&mut self) -> Result<&HypergraphPartition, PartitionError> {
        self.improve_partition(1)
    }

    /// Refine the last partition for `iterations` rounds and remember the result.
    pub fn improve_partition(
        &mut self,
        iterations: usize,
    ) -> Result<&HypergraphPartition, PartitionError> {
        let initial = self.last.as_ref().ok_or(PartitionError::NoPartitionYet)?;
        let input = EngineInput::from(&self.hypergraph);
        let output = self
            .engine
            .improve(&self.ctx, &input, initial.assignment(), iterations)?;
        let partition = self.accept(output)?;
        log::debug!(
            "improved partition over {iterations} iterations: objective {} -> {}",
            initial.objective_value(),
            partition.objective_value()
        );
        Ok(self.last.insert(partition))
    }

    /// Block of a 1-based vertex in the last partition.
    pub fn block_of(&self, vertex: u32) -> Result<i32, PartitionError> {
        let partition = self.last.as_ref().ok_or(PartitionError::NoPartitionYet)?;
        Ok(partition.block_of(vertex)?)
    }

    /// Check an engine result against the hypergraph and the context.
    fn accept(&self, output: EngineOutput) -> Result<HypergraphPartition, PartitionError> {
        let expected = self.hypergraph.vertex_count();
        if output.assignment.len() != expected {
            return Err(PartitionError::AssignmentLength {
                expected,
                found: output.assignment.len(),
            });
        }
        let blocks = self.ctx.blocks;
        if let Some((vertex, &block)) = (1u32..)
            .zip(&output.assignment)
            .find(|&(_, &b)| usize::try_from(b).map_or(true, |b| b >= blocks))
        {
            return Err(PartitionError::InvalidBlock {
                vertex,
                block,
                blocks,
            });
        }
        HypergraphPartition::new(output.assignment, output.objective).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests;
