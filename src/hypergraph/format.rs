//! hMetis format flags.
//!
//! The third integer of an hMetis header tells which weights the file
//! carries. Each weight dimension has its own identifier and a hypergraph
//! carrying both reports their sum, `11`.

use serde::{Deserialize, Serialize};

/// Identifier of the combined hyperedge + vertex weight flag.
pub const BOTH_WEIGHTS: u32 = 11;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HmetisFormat {
    /// Neither hyperedges nor vertices carry weights.
    Unweighted,
    /// Each hyperedge line starts with the weight of the hyperedge.
    WeightOnHyperedges,
    /// One weight line per vertex follows the hyperedge lines.
    WeightOnVertices,
}

impl HmetisFormat {
    /// The integer written in the header for this format.
    pub const fn identifier(self) -> u32 {
        match self {
            HmetisFormat::Unweighted => 0,
            HmetisFormat::WeightOnHyperedges => 1,
            HmetisFormat::WeightOnVertices => 10,
        }
    }

    /// Whether a header flag turns this format on.
    ///
    /// Non-zero formats are also encoded in the combined flag `11`.
    pub const fn is_encoded_in(self, flag: u32) -> bool {
        let id = self.identifier();
        flag == id || (id > 0 && flag == BOTH_WEIGHTS)
    }

    /// Whether `flag` is one of the header values hMetis defines.
    pub const fn is_known_flag(flag: u32) -> bool {
        matches!(flag, 0 | 1 | 10 | BOTH_WEIGHTS)
    }
}
