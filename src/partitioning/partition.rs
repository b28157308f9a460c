//! Result of a partitioning run.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::hypergraph_error::HypergraphError;

/// Block assignment of every vertex plus the engine's objective value.
///
/// Block membership lists are derived on first use and cached. Block ids
/// are below the vertex count, so the cache never holds more lists than
/// there are vertices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawPartition")]
pub struct HypergraphPartition {
    assignment: Vec<i32>,
    objective: i32,
    #[serde(skip)]
    blocks: OnceCell<Vec<Vec<u32>>>,
}

#[derive(Deserialize)]
struct RawPartition {
    assignment: Vec<i32>,
    objective: i32,
}

impl TryFrom<RawPartition> for HypergraphPartition {
    type Error = HypergraphError;

    fn try_from(raw: RawPartition) -> Result<Self, Self::Error> {
        Self::new(raw.assignment, raw.objective)
    }
}

impl PartialEq for HypergraphPartition {
    fn eq(&self, other: &Self) -> bool {
        self.assignment == other.assignment && self.objective == other.objective
    }
}

impl Eq for HypergraphPartition {}

impl HypergraphPartition {
    /// Wrap an engine result; `assignment[v - 1]` is the block of vertex `v`.
    ///
    /// Negative ids mark unassigned vertices. Ids at or above the number of
    /// vertices are [`HypergraphError::IndexOutOfRange`].
    pub fn new(assignment: Vec<i32>, objective: i32) -> Result<Self, HypergraphError> {
        let n = assignment.len();
        if let Some(index) = assignment
            .iter()
            .filter_map(|&b| usize::try_from(b).ok())
            .find(|&b| b >= n)
        {
            return Err(HypergraphError::IndexOutOfRange {
                kind: "block",
                index,
                len: n,
            });
        }
        Ok(Self {
            assignment,
            objective,
            blocks: OnceCell::new(),
        })
    }

    /// Block of a 1-based vertex.
    pub fn block_of(&self, vertex: u32) -> Result<i32, HypergraphError> {
        let n = self.assignment.len();
        if vertex == 0 || vertex as usize > n {
            return Err(HypergraphError::vertex_out_of_range(vertex, n));
        }
        Ok(self.assignment[vertex as usize - 1])
    }

    pub fn objective_value(&self) -> i32 {
        self.objective
    }

    /// Raw block ids, indexed by 0-based vertex.
    pub fn assignment(&self) -> &[i32] {
        &self.assignment
    }

    pub fn vertex_count(&self) -> usize {
        self.assignment.len()
    }

    /// Number of blocks: one past the largest block id.
    pub fn block_count(&self) -> usize {
        self.blocks().len()
    }

    /// Members of every block, 1-based and ascending. Computed once.
    ///
    /// Vertices with a negative block id belong to no block.
    pub fn blocks(&self) -> &[Vec<u32>] {
        self.blocks.get_or_init(|| {
            let count = self
                .assignment
                .iter()
                .filter_map(|&b| usize::try_from(b).ok())
                .max()
                .map_or(0, |max| max + 1);
            let mut blocks = vec![Vec::new(); count];
            for (vertex, &block) in (1u32..).zip(&self.assignment) {
                if let Ok(block) = usize::try_from(block) {
                    blocks[block].push(vertex);
                }
            }
            log::trace!(
                "derived {count} blocks for {} vertices",
                self.assignment.len()
            );
            blocks
        })
    }

    /// Members of block `block`, 1-based and ascending.
    pub fn block(&self, block: usize) -> Result<&[u32], HypergraphError> {
        let blocks = self.blocks();
        blocks
            .get(block)
            .map(Vec::as_slice)
            .ok_or(HypergraphError::IndexOutOfRange {
                kind: "block",
                index: block,
                len: blocks.len(),
            })
    }
}
