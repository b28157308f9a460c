//! Frozen CSR (Compressed Sparse Row) incidence structure of a hypergraph.
//!
//! * `hyperedge_indices[i] .. hyperedge_indices[i+1]` = pins of hyperedge *i*
//! * `hyperedge_vertices`                              = concatenated 0-based vertex ids
//!
//! The last offset is a sentinel holding the total number of pins, so the
//! offset array always has one more element than there are hyperedges.
//! Arrays are shared through `Arc` so cloned or decorated hypergraphs never
//! copy them. Deserialization checks the offset layout before a store is
//! handed out; the vertex range is checked by the owning hypergraph.

use std::ops::Range;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::hypergraph_error::HypergraphError;

/// Immutable CSR pair describing which vertices each hyperedge joins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIncidence")]
pub struct IncidenceStore {
    hyperedge_indices: Arc<[usize]>,
    hyperedge_vertices: Arc<[u32]>,
}

/// Serialized shape of [`IncidenceStore`], not yet checked.
#[derive(Deserialize)]
struct RawIncidence {
    hyperedge_indices: Arc<[usize]>,
    hyperedge_vertices: Arc<[u32]>,
}

impl TryFrom<RawIncidence> for IncidenceStore {
    type Error = HypergraphError;

    fn try_from(raw: RawIncidence) -> Result<Self, Self::Error> {
        let store = Self {
            hyperedge_indices: raw.hyperedge_indices,
            hyperedge_vertices: raw.hyperedge_vertices,
        };
        store.validate_layout()?;
        Ok(store)
    }
}

impl Default for IncidenceStore {
    fn default() -> Self {
        Self {
            hyperedge_indices: Arc::from([0usize]),
            hyperedge_vertices: Arc::from([]),
        }
    }
}

impl IncidenceStore {
    /// Freeze already-terminated arrays (sentinel included).
    pub(crate) fn from_parts(hyperedge_indices: Vec<usize>, hyperedge_vertices: Vec<u32>) -> Self {
        debug_assert!(!hyperedge_indices.is_empty(), "offset array misses its sentinel");
        debug_assert_eq!(
            hyperedge_indices.last().copied(),
            Some(hyperedge_vertices.len()),
            "sentinel must equal the pin count"
        );
        Self {
            hyperedge_indices: hyperedge_indices.into(),
            hyperedge_vertices: hyperedge_vertices.into(),
        }
    }

    pub fn hyperedge_count(&self) -> usize {
        self.hyperedge_indices.len().saturating_sub(1)
    }

    /// Total number of vertex occurrences over all hyperedges.
    pub fn pin_count(&self) -> usize {
        self.hyperedge_vertices.len()
    }

    pub fn hyperedge_indices(&self) -> &[usize] {
        &self.hyperedge_indices
    }

    pub fn hyperedge_vertices(&self) -> &[u32] {
        &self.hyperedge_vertices
    }

    /// Position of hyperedge `index` in the flat vertex array.
    pub fn span(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.hyperedge_count() {
            return None;
        }
        Some(self.hyperedge_indices[index]..self.hyperedge_indices[index + 1])
    }

    /// Stored (0-based) vertices of hyperedge `index`.
    pub fn raw_vertices(&self, index: usize) -> Option<&[u32]> {
        let span = self.span(index)?;
        self.hyperedge_vertices.get(span)
    }

    /// Vertices of hyperedge `index` as public 1-based ids.
    pub fn vertices(&self, index: usize) -> Option<Vec<u32>> {
        self.raw_vertices(index)
            .map(|raw| raw.iter().map(|&v| v + 1).collect())
    }

    /// Check the CSR invariants against a vertex domain of `vertex_count`.
    pub fn validate(&self, vertex_count: usize) -> Result<(), HypergraphError> {
        self.validate_layout()?;
        if let Some(&v) = self
            .hyperedge_vertices
            .iter()
            .find(|&&v| v as usize >= vertex_count)
        {
            return Err(HypergraphError::vertex_out_of_range(v + 1, vertex_count));
        }
        Ok(())
    }

    /// Offsets start at 0, never decrease and end at the pin count.
    fn validate_layout(&self) -> Result<(), HypergraphError> {
        let indices = &self.hyperedge_indices;
        let Some(&sentinel) = indices.last() else {
            return Err(HypergraphError::BuilderMisuse(
                "offset array has no sentinel".into(),
            ));
        };
        if indices[0] != 0 {
            return Err(HypergraphError::BuilderMisuse(format!(
                "first hyperedge starts at {} instead of 0",
                indices[0]
            )));
        }
        if let Some(i) = indices.windows(2).position(|w| w[0] > w[1]) {
            return Err(HypergraphError::BuilderMisuse(format!(
                "hyperedge {i} has a negative span ({} > {})",
                indices[i],
                indices[i + 1]
            )));
        }
        if sentinel != self.hyperedge_vertices.len() {
            return Err(HypergraphError::BuilderMisuse(format!(
                "sentinel {sentinel} differs from pin count {}",
                self.hyperedge_vertices.len()
            )));
        }
        Ok(())
    }
}
