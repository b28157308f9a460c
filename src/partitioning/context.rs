//! Parameters handed to a partitioning engine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Partitioning parameters.
///
/// Values are passed to the engine as given; the engine decides what it
/// accepts. Missing fields fall back to [`PartitionContext::default`] when
/// deserialized, so a JSON file may hold only the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionContext {
    /// Allowed imbalance fraction (KaHyPar's epsilon).
    pub imbalance: f64,
    /// Number of blocks to partition into.
    pub blocks: usize,
    /// Engine configuration file (a KaHyPar `.ini` preset).
    pub config_file: Option<PathBuf>,
    /// Custom target weight per block.
    pub block_weights: Option<Vec<i32>>,
}

impl Default for PartitionContext {
    fn default() -> Self {
        Self {
            imbalance: 0.03,
            blocks: 2,
            config_file: None,
            block_weights: None,
        }
    }
}

impl PartitionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_imbalance(mut self, imbalance: f64) -> Self {
        self.imbalance = imbalance;
        self
    }

    pub fn with_blocks(mut self, blocks: usize) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set one target weight per block; the block count follows the weights.
    pub fn with_block_weights(mut self, weights: Vec<i32>) -> Self {
        self.blocks = weights.len();
        self.block_weights = Some(weights);
        self
    }

    /// Number of custom block weights, when it disagrees with the block count.
    pub(crate) fn block_weights_mismatch(&self) -> Option<usize> {
        self.block_weights
            .as_ref()
            .map(Vec::len)
            .filter(|&len| len != self.blocks)
    }
}
