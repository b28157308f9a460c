use super::*;
use crate::hypergraph::UnweightedHyperedge;
use crate::hypergraph_error::HypergraphError;
#[path = "partition_property_tests.rs"]
mod partition_property_tests;

/// Engine that alternates blocks on `partition` and moves the first vertex
/// to the next block on every `improve` round.
#[derive(Debug, Default)]
pub(super) struct RoundRobin {
    pub partition_calls: usize,
    pub improve_calls: usize,
    pub last_iterations: usize,
}

impl PartitionEngine for RoundRobin {
    fn partition(
        &mut self,
        ctx: &PartitionContext,
        input: &EngineInput<'_>,
    ) -> Result<EngineOutput, PartitionError> {
        self.partition_calls += 1;
        let assignment = (0..input.vertex_count)
            .map(|v| (v % ctx.blocks) as i32)
            .collect();
        Ok(EngineOutput {
            assignment,
            objective: input.hyperedge_count as i32,
        })
    }

    fn improve(
        &mut self,
        ctx: &PartitionContext,
        _input: &EngineInput<'_>,
        initial: &[i32],
        iterations: usize,
    ) -> Result<EngineOutput, PartitionError> {
        self.improve_calls += 1;
        self.last_iterations = iterations;
        let mut assignment = initial.to_vec();
        if let Some(first) = assignment.first_mut() {
            *first = ((*first as usize + iterations) % ctx.blocks) as i32;
        }
        Ok(EngineOutput {
            assignment,
            objective: 0,
        })
    }
}

/// Engine returning a fixed answer.
struct Fixed(Vec<i32>);

impl PartitionEngine for Fixed {
    fn partition(
        &mut self,
        _ctx: &PartitionContext,
        _input: &EngineInput<'_>,
    ) -> Result<EngineOutput, PartitionError> {
        Ok(EngineOutput {
            assignment: self.0.clone(),
            objective: 1,
        })
    }

    fn improve(
        &mut self,
        _ctx: &PartitionContext,
        _input: &EngineInput<'_>,
        _initial: &[i32],
        _iterations: usize,
    ) -> Result<EngineOutput, PartitionError> {
        Err(PartitionError::Engine("refinement unavailable".into()))
    }
}

pub(super) fn sample() -> Hypergraph {
    let mut b = Hypergraph::builder(7, 4);
    for edge in [&[1, 2][..], &[1, 7, 5, 6], &[5, 6, 4], &[2, 3, 4]] {
        b.with_hyperedge(UnweightedHyperedge::joining(edge.iter().copied()))
            .unwrap();
    }
    b.build().unwrap()
}

#[test]
fn compute_runs_engine_once() {
    let mut p = Partitioner::new(PartitionContext::default(), sample(), RoundRobin::default());
    assert!(p.last_partition().is_none());
    let first = p.compute_partition().unwrap().clone();
    assert_eq!(first.assignment(), &[0, 1, 0, 1, 0, 1, 0]);
    assert_eq!(first.objective_value(), 4);
    let again = p.compute_partition().unwrap().clone();
    assert_eq!(first, again);
    assert_eq!(p.engine().partition_calls, 1);
}

#[test]
fn improve_requires_partition() {
    let mut p = Partitioner::new(PartitionContext::default(), sample(), RoundRobin::default());
    assert_eq!(
        p.improve_partition_once().unwrap_err(),
        PartitionError::NoPartitionYet
    );
    assert_eq!(p.block_of(1).unwrap_err(), PartitionError::NoPartitionYet);
    assert_eq!(p.engine().improve_calls, 0);
}

#[test]
fn improve_feeds_back_last_assignment() {
    let ctx = PartitionContext::default().with_blocks(3);
    let mut p = Partitioner::new(ctx, sample(), RoundRobin::default());
    p.compute_partition().unwrap();
    assert_eq!(p.block_of(1).unwrap(), 0);

    let improved = p.improve_partition_once().unwrap();
    assert_eq!(improved.block_of(1).unwrap(), 1);
    assert_eq!(improved.objective_value(), 0);
    assert_eq!(p.engine().last_iterations, 1);

    p.improve_partition(4).unwrap();
    assert_eq!(p.block_of(1).unwrap(), 2);
    assert_eq!(p.engine().last_iterations, 4);
    assert_eq!(p.engine().improve_calls, 2);
}

#[test]
fn block_of_reports_hypergraph_errors() {
    let mut p = Partitioner::new(PartitionContext::default(), sample(), RoundRobin::default());
    p.compute_partition().unwrap();
    assert!(matches!(
        p.block_of(8),
        Err(PartitionError::Hypergraph(HypergraphError::IndexOutOfRange { .. }))
    ));
}

#[test]
fn wrong_length_is_rejected() {
    let mut p = Partitioner::new(PartitionContext::default(), sample(), Fixed(vec![0; 6]));
    assert_eq!(
        p.compute_partition().unwrap_err(),
        PartitionError::AssignmentLength {
            expected: 7,
            found: 6
        }
    );
    assert!(p.last_partition().is_none());
}

#[test]
fn out_of_range_block_is_rejected() {
    let mut p = Partitioner::new(
        PartitionContext::default(),
        sample(),
        Fixed(vec![0, 1, 0, 2, 0, 1, 0]),
    );
    assert_eq!(
        p.compute_partition().unwrap_err(),
        PartitionError::InvalidBlock {
            vertex: 4,
            block: 2,
            blocks: 2
        }
    );
    let mut p = Partitioner::new(
        PartitionContext::default(),
        sample(),
        Fixed(vec![0, -1, 0, 1, 0, 1, 0]),
    );
    assert!(matches!(
        p.compute_partition(),
        Err(PartitionError::InvalidBlock { vertex: 2, .. })
    ));
}

#[test]
fn engine_errors_keep_last_partition() {
    let mut p = Partitioner::new(
        PartitionContext::default(),
        sample(),
        Fixed(vec![0, 0, 1, 0, 0, 1, 1]),
    );
    p.compute_partition().unwrap();
    assert!(matches!(
        p.improve_partition(2),
        Err(PartitionError::Engine(_))
    ));
    let kept = p.last_partition().unwrap();
    assert_eq!(kept.blocks(), &[vec![1, 2, 4, 5], vec![3, 6, 7]]);
}

#[test]
fn boxed_engines_work() {
    let engine: Box<dyn PartitionEngine> = Box::new(RoundRobin::default());
    let mut p = Partitioner::new(PartitionContext::default(), sample(), engine);
    assert_eq!(p.compute_partition().unwrap().block_count(), 2);
}

#[test]
fn block_ids_beyond_vertex_count_are_rejected() {
    let ctx = PartitionContext::default().with_blocks(16);
    let mut p = Partitioner::new(ctx, sample(), Fixed(vec![0, 1, 0, 9, 0, 1, 0]));
    assert_eq!(
        p.compute_partition().unwrap_err(),
        PartitionError::Hypergraph(HypergraphError::IndexOutOfRange {
            kind: "block",
            index: 9,
            len: 7
        })
    );
    assert!(p.last_partition().is_none());
}
