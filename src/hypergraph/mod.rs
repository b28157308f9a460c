//! Immutable hypergraphs and their optional weight decorations.
//!
//! A [`Hypergraph`] is a chain of layers. The innermost layer is always an
//! [`UnweightedHypergraph`] wrapping the frozen [`IncidenceStore`]; hyperedge
//! weights and vertex weights are added as outer layers that share, never
//! copy, the CSR arrays below them. Every read walks down the chain until a
//! layer answers it, and the hMetis format flag is the sum of the
//! identifiers of all layers (`0`, `1`, `10`, hence `11` for both).
//!
//! `Display` renders the canonical hMetis text:
//!
//! ```text
//! <#hyperedges> <#vertices>[ <flag>]
//! [<weight> ]<v1> <v2> ... <vk>     -- one line per hyperedge
//! <weight>                          -- one line per vertex, when weighted
//! ```

pub mod builder;
pub mod format;
pub mod hyperedge;
pub mod incidence;

#[cfg(test)]
mod tests;

pub use builder::HypergraphBuilder;
pub use format::HmetisFormat;
pub use hyperedge::{Hyperedge, UnweightedHyperedge, WeightedHyperedge};
pub use incidence::IncidenceStore;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use static_assertions::assert_impl_all;

use crate::debug_invariants::DebugInvariants;
use crate::hypergraph_error::HypergraphError;
use crate::io::hmetis::HmetisReader;

/// The undecorated hypergraph: a vertex count over a frozen incidence store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUnweighted")]
pub struct UnweightedHypergraph {
    vertex_count: usize,
    incidence: IncidenceStore,
}

#[derive(Deserialize)]
struct RawUnweighted {
    vertex_count: usize,
    incidence: IncidenceStore,
}

impl TryFrom<RawUnweighted> for UnweightedHypergraph {
    type Error = HypergraphError;

    fn try_from(raw: RawUnweighted) -> Result<Self, Self::Error> {
        raw.incidence.validate(raw.vertex_count)?;
        Ok(Self::new(raw.vertex_count, raw.incidence))
    }
}

impl UnweightedHypergraph {
    pub(crate) fn new(vertex_count: usize, incidence: IncidenceStore) -> Self {
        Self {
            vertex_count,
            incidence,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn incidence(&self) -> &IncidenceStore {
        &self.incidence
    }
}

/// A built, immutable hypergraph.
///
/// Deserialized values are checked with
/// [`DebugInvariants::validate_invariants`] and rejected when broken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHypergraph")]
pub enum Hypergraph {
    /// No weights at all.
    Unweighted(UnweightedHypergraph),
    /// Adds one weight per hyperedge to `inner`.
    WeightedHyperedges {
        inner: Box<Hypergraph>,
        weights: Arc<[i32]>,
    },
    /// Adds one weight per vertex to `inner`.
    WeightedVertices {
        inner: Box<Hypergraph>,
        weights: Arc<[i32]>,
    },
}

assert_impl_all!(Hypergraph: Send, Sync, Clone);

/// Serialized shape of [`Hypergraph`]; variants keep its names and order.
#[derive(Deserialize)]
#[serde(rename = "Hypergraph")]
enum RawHypergraph {
    Unweighted(UnweightedHypergraph),
    WeightedHyperedges {
        inner: Box<Hypergraph>,
        weights: Arc<[i32]>,
    },
    WeightedVertices {
        inner: Box<Hypergraph>,
        weights: Arc<[i32]>,
    },
}

impl TryFrom<RawHypergraph> for Hypergraph {
    type Error = HypergraphError;

    fn try_from(raw: RawHypergraph) -> Result<Self, Self::Error> {
        let hypergraph = match raw {
            RawHypergraph::Unweighted(base) => Hypergraph::Unweighted(base),
            RawHypergraph::WeightedHyperedges { inner, weights } => {
                Hypergraph::WeightedHyperedges { inner, weights }
            }
            RawHypergraph::WeightedVertices { inner, weights } => {
                Hypergraph::WeightedVertices { inner, weights }
            }
        };
        hypergraph.validate_invariants()?;
        Ok(hypergraph)
    }
}

impl Default for Hypergraph {
    fn default() -> Self {
        Hypergraph::Unweighted(UnweightedHypergraph::new(0, IncidenceStore::default()))
    }
}

impl Hypergraph {
    /// Start a builder whose dimensions are fixed up front.
    pub fn builder(vertices: usize, hyperedges: usize) -> HypergraphBuilder {
        HypergraphBuilder::known_size(vertices, hyperedges)
    }

    /// Start a builder that discovers its dimensions while hyperedges are added.
    pub fn growing_builder() -> HypergraphBuilder {
        HypergraphBuilder::unknown_size()
    }

    pub(crate) fn with_hyperedge_weights(self, weights: Vec<i32>) -> Self {
        Hypergraph::WeightedHyperedges {
            inner: Box::new(self),
            weights: weights.into(),
        }
    }

    pub(crate) fn with_vertex_weights(self, weights: Vec<i32>) -> Self {
        Hypergraph::WeightedVertices {
            inner: Box::new(self),
            weights: weights.into(),
        }
    }

    /// The innermost, undecorated layer.
    pub fn base(&self) -> &UnweightedHypergraph {
        let mut layer = self;
        loop {
            match layer {
                Hypergraph::Unweighted(base) => return base,
                Hypergraph::WeightedHyperedges { inner, .. }
                | Hypergraph::WeightedVertices { inner, .. } => layer = inner,
            }
        }
    }

    pub fn incidence(&self) -> &IncidenceStore {
        &self.base().incidence
    }

    pub fn vertex_count(&self) -> usize {
        self.base().vertex_count
    }

    pub fn hyperedge_count(&self) -> usize {
        self.incidence().hyperedge_count()
    }

    /// CSR offsets, `hyperedge_count() + 1` long.
    pub fn hyperedge_indices(&self) -> &[usize] {
        self.incidence().hyperedge_indices()
    }

    /// CSR pins, 0-based vertex ids.
    pub fn hyperedge_vertices(&self) -> &[u32] {
        self.incidence().hyperedge_vertices()
    }

    /// Per-vertex weights (index = vertex id - 1), `None` when unweighted.
    pub fn vertex_weights(&self) -> Option<&[i32]> {
        match self {
            Hypergraph::Unweighted(_) => None,
            Hypergraph::WeightedVertices { weights, .. } => Some(&weights[..]),
            Hypergraph::WeightedHyperedges { inner, .. } => inner.vertex_weights(),
        }
    }

    /// Per-hyperedge weights, `None` when unweighted.
    pub fn hyperedge_weights(&self) -> Option<&[i32]> {
        match self {
            Hypergraph::Unweighted(_) => None,
            Hypergraph::WeightedHyperedges { weights, .. } => Some(&weights[..]),
            Hypergraph::WeightedVertices { inner, .. } => inner.hyperedge_weights(),
        }
    }

    /// Weight of a 1-based vertex, `Ok(None)` when vertices are unweighted.
    pub fn vertex_weight(&self, vertex: u32) -> Result<Option<i32>, HypergraphError> {
        let n = self.vertex_count();
        if vertex == 0 || vertex as usize > n {
            return Err(HypergraphError::vertex_out_of_range(vertex, n));
        }
        Ok(self.vertex_weights().map(|w| w[vertex as usize - 1]))
    }

    /// Weight of hyperedge `index`, `Ok(None)` when hyperedges are unweighted.
    pub fn hyperedge_weight(&self, index: usize) -> Result<Option<i32>, HypergraphError> {
        let m = self.hyperedge_count();
        if index >= m {
            return Err(HypergraphError::hyperedge_out_of_range(index, m));
        }
        Ok(self.hyperedge_weights().map(|w| w[index]))
    }

    pub fn is_vertex_weighted(&self) -> bool {
        self.vertex_weights().is_some()
    }

    pub fn is_hyperedge_weighted(&self) -> bool {
        self.hyperedge_weights().is_some()
    }

    /// Synthesize the view of hyperedge `index` (0-based), with 1-based vertices.
    pub fn hyperedge(&self, index: usize) -> Result<Hyperedge, HypergraphError> {
        let m = self.hyperedge_count();
        if index >= m {
            return Err(HypergraphError::hyperedge_out_of_range(index, m));
        }
        Ok(self.view(index))
    }

    /// All hyperedge views, in insertion order.
    pub fn hyperedges(&self) -> impl Iterator<Item = Hyperedge> + '_ {
        (0..self.hyperedge_count()).map(move |index| self.view(index))
    }

    fn view(&self, index: usize) -> Hyperedge {
        match self {
            Hypergraph::Unweighted(base) => {
                let vertices = base.incidence.vertices(index).unwrap_or_default();
                Hyperedge::Unweighted(UnweightedHyperedge::joining(vertices))
            }
            Hypergraph::WeightedHyperedges { inner, weights } => match inner.view(index) {
                Hyperedge::Unweighted(h) => {
                    Hyperedge::Weighted(WeightedHyperedge::new(h, weights[index]))
                }
                weighted => weighted,
            },
            Hypergraph::WeightedVertices { inner, .. } => inner.view(index),
        }
    }

    fn own_format(&self) -> HmetisFormat {
        match self {
            Hypergraph::Unweighted(_) => HmetisFormat::Unweighted,
            Hypergraph::WeightedHyperedges { .. } => HmetisFormat::WeightOnHyperedges,
            Hypergraph::WeightedVertices { .. } => HmetisFormat::WeightOnVertices,
        }
    }

    /// hMetis format flag: this layer's identifier plus the wrapped layers'.
    pub fn format(&self) -> u32 {
        let own = self.own_format().identifier();
        match self {
            Hypergraph::Unweighted(_) => own,
            Hypergraph::WeightedHyperedges { inner, .. }
            | Hypergraph::WeightedVertices { inner, .. } => own + inner.format(),
        }
    }

    /// The hMetis header line, without line terminator.
    pub fn header(&self) -> String {
        match self.format() {
            0 => format!("{} {}", self.hyperedge_count(), self.vertex_count()),
            flag => format!(
                "{} {} {}",
                self.hyperedge_count(),
                self.vertex_count(),
                flag
            ),
        }
    }
}

impl fmt::Display for Hypergraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for hyperedge in self.hyperedges() {
            writeln!(f, "{hyperedge}")?;
        }
        if let Some(weights) = self.vertex_weights() {
            for weight in weights {
                writeln!(f, "{weight}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Hypergraph {
    type Err = HypergraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HmetisReader.read_str(s)
    }
}

impl DebugInvariants for Hypergraph {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Hypergraph");
    }

    fn validate_invariants(&self) -> Result<(), HypergraphError> {
        self.incidence().validate(self.vertex_count())?;
        if let Some(w) = self.vertex_weights() {
            if w.len() != self.vertex_count() {
                return Err(HypergraphError::BuilderMisuse(format!(
                    "{} vertex weights for {} vertices",
                    w.len(),
                    self.vertex_count()
                )));
            }
        }
        if let Some(w) = self.hyperedge_weights() {
            if w.len() != self.hyperedge_count() {
                return Err(HypergraphError::BuilderMisuse(format!(
                    "{} hyperedge weights for {} hyperedges",
                    w.len(),
                    self.hyperedge_count()
                )));
            }
        }
        if !HmetisFormat::is_known_flag(self.format()) {
            return Err(HypergraphError::BuilderMisuse(format!(
                "decoration chain yields unknown format flag {}",
                self.format()
            )));
        }
        Ok(())
    }
}
