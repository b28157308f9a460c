//! Incremental construction of [`Hypergraph`]s.
//!
//! The builder accumulates hyperedges directly into CSR arrays:
//!
//! * `hyperedge_indices` receives the start offset of each hyperedge as it is
//!   appended, and the sentinel end offset in [`HypergraphBuilder::build`];
//! * `hyperedge_vertices` receives each pin, shifted to 0-based.
//!
//! Two sizing strategies share that logic. With a **known** size the
//! dimensions are fixed at construction and the arrays are pre-sized from
//! them, up to [`PRESIZE_LIMIT`] hyperedges. With an **unknown** size the
//! dimensions grow to the largest vertex id / hyperedge index seen. In both
//! modes arrays double when full and `build` trims them to the final size.
//!
//! Weight arrays are only allocated by the first weight assignment, so a
//! hypergraph built without any weight call stays unweighted. Growth never
//! aborts: an array that cannot grow yields
//! [`HypergraphError::CapacityExceeded`].

use std::mem;

use super::hyperedge::Hyperedge;
use super::incidence::IncidenceStore;
use super::{Hypergraph, UnweightedHypergraph};
use crate::debug_invariants::DebugInvariants;
use crate::hypergraph_error::HypergraphError;

/// Most hyperedges a known-size builder reserves room for before the first
/// append. Declared counts come from untrusted headers; past this the
/// arrays grow on demand.
pub const PRESIZE_LIMIT: usize = 1 << 16;

/// How the builder learns the dimensions of the hypergraph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Sizing {
    /// Counts given up front; arrays pre-sized from them.
    Known,
    /// Counts discovered from the appended data.
    Unknown,
}

/// Builder for [`Hypergraph`], see the module documentation.
#[derive(Debug)]
pub struct HypergraphBuilder {
    sizing: Sizing,
    vertex_count: usize,
    hyperedge_count: usize,
    vertex_weights: Option<Vec<i32>>,
    hyperedge_weights: Option<Vec<i32>>,
    hyperedge_indices: Vec<usize>,
    hyperedge_vertices: Vec<u32>,
    /// Index of the next hyperedge to append.
    next_hyperedge: usize,
    built: bool,
}

impl Default for HypergraphBuilder {
    fn default() -> Self {
        Self::unknown_size()
    }
}

/// Make room for `additional` more entries, at least doubling the capacity
/// when the array is full.
fn ensure_room<T>(
    array: &mut Vec<T>,
    additional: usize,
    what: &'static str,
) -> Result<(), HypergraphError> {
    let needed = array
        .len()
        .checked_add(additional)
        .ok_or_else(|| HypergraphError::capacity_exceeded(what, None))?;
    if needed <= array.capacity() {
        return Ok(());
    }
    let target = needed.max(array.capacity().saturating_mul(2)).max(1);
    log::trace!("growing {what} from {} to {target} slots", array.capacity());
    array
        .try_reserve_exact(target - array.len())
        .map_err(|_| HypergraphError::capacity_exceeded(what, Some(target)))
}

/// Length a weight array grows to so that `slot` is addressable: double the
/// current length, at least `slot + 1`, at most `limit`.
fn grown_len(current: usize, slot: usize, limit: Option<usize>) -> Option<usize> {
    let needed = slot.checked_add(1)?;
    let doubled = needed.max(current.saturating_mul(2));
    Some(limit.map_or(doubled, |limit| doubled.min(limit).max(needed)))
}

/// Resize `weights` to exactly `len`, padding with 0.
fn fit_weights(
    weights: &mut Vec<i32>,
    len: usize,
    what: &'static str,
) -> Result<(), HypergraphError> {
    if len > weights.len() {
        weights
            .try_reserve_exact(len - weights.len())
            .map_err(|_| HypergraphError::capacity_exceeded(what, Some(len)))?;
    }
    weights.resize(len, 0);
    weights.shrink_to_fit();
    Ok(())
}

/// Write `weight` at `slot`, growing the array when it is too short.
fn store_growing(
    weights: &mut Vec<i32>,
    slot: usize,
    weight: i32,
    limit: Option<usize>,
    what: &'static str,
) -> Result<(), HypergraphError> {
    if weights.len() <= slot {
        let len = grown_len(weights.len(), slot, limit)
            .ok_or_else(|| HypergraphError::capacity_exceeded(what, None))?;
        log::trace!("growing {what} from {} to {len} entries", weights.len());
        fit_weights(weights, len, what)?;
    }
    weights[slot] = weight;
    Ok(())
}

impl HypergraphBuilder {
    /// Builder for exactly `vertices` vertices and `hyperedges` hyperedges.
    pub fn known_size(vertices: usize, hyperedges: usize) -> Self {
        Self::with_sizing(Sizing::Known, vertices, hyperedges)
    }

    /// Builder that discovers its dimensions.
    pub fn unknown_size() -> Self {
        Self::with_sizing(Sizing::Unknown, 0, 0)
    }

    fn with_sizing(sizing: Sizing, vertices: usize, hyperedges: usize) -> Self {
        let presized = hyperedges.min(PRESIZE_LIMIT);
        Self {
            sizing,
            vertex_count: vertices,
            hyperedge_count: hyperedges,
            vertex_weights: None,
            hyperedge_weights: None,
            hyperedge_indices: Vec::with_capacity(presized + 1),
            hyperedge_vertices: Vec::with_capacity((presized << 1) + 1),
            next_hyperedge: 0,
            built: false,
        }
    }

    /// Number of vertices: declared, or largest id seen so far.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of hyperedges: declared, or appended so far.
    pub fn hyperedge_count(&self) -> usize {
        self.hyperedge_count
    }

    /// Start offsets written so far (the sentinel is added by `build`).
    pub fn hyperedge_indices(&self) -> &[usize] {
        &self.hyperedge_indices
    }

    /// 0-based pins written so far.
    pub fn hyperedge_vertices(&self) -> &[u32] {
        &self.hyperedge_vertices
    }

    fn ensure_not_built(&self) -> Result<(), HypergraphError> {
        if self.built {
            return Err(HypergraphError::BuilderMisuse(
                "builder already produced its hypergraph".into(),
            ));
        }
        Ok(())
    }

    /// Bound on weight slots: the declared count, or none when discovering.
    fn weight_limit(&self, declared: usize) -> Option<usize> {
        match self.sizing {
            Sizing::Known => Some(declared),
            Sizing::Unknown => None,
        }
    }

    /// Set the weight of a 1-based vertex.
    ///
    /// With a known size, any id outside `1..=vertex_count` is
    /// [`HypergraphError::BuilderMisuse`]. When discovering, id 0 is
    /// [`HypergraphError::IndexOutOfRange`] and larger ids extend the
    /// vertex count.
    pub fn with_vertex_weight(
        &mut self,
        vertex: u32,
        weight: i32,
    ) -> Result<&mut Self, HypergraphError> {
        self.ensure_not_built()?;
        let Some(slot) = (vertex as usize).checked_sub(1) else {
            return Err(match self.sizing {
                Sizing::Known => self.undeclared_vertex(vertex),
                Sizing::Unknown => HypergraphError::vertex_out_of_range(vertex, self.vertex_count),
            });
        };
        if self.sizing == Sizing::Known && slot >= self.vertex_count {
            return Err(self.undeclared_vertex(vertex));
        }
        let limit = self.weight_limit(self.vertex_count);
        let weights = self.vertex_weights.get_or_insert_with(Vec::new);
        store_growing(weights, slot, weight, limit, "vertex weights")?;
        if self.sizing == Sizing::Unknown {
            self.vertex_count = self.vertex_count.max(vertex as usize);
        }
        Ok(self)
    }

    fn undeclared_vertex(&self, vertex: u32) -> HypergraphError {
        HypergraphError::BuilderMisuse(format!(
            "cannot weight vertex {vertex}: declared vertices are 1..={}",
            self.vertex_count
        ))
    }

    /// Append a hyperedge, weighted or not.
    pub fn with_hyperedge<H>(&mut self, hyperedge: H) -> Result<&mut Self, HypergraphError>
    where
        H: Into<Hyperedge>,
    {
        self.ensure_not_built()?;
        let hyperedge = hyperedge.into();
        self.check_room_for_hyperedge()?;
        self.check_vertices(hyperedge.vertices())?;
        // Reserve first so a failed allocation leaves nothing half-written.
        ensure_room(&mut self.hyperedge_indices, 1, "hyperedge indices")?;
        ensure_room(
            &mut self.hyperedge_vertices,
            hyperedge.size(),
            "hyperedge vertices",
        )?;
        if let Some(weight) = hyperedge.weight() {
            self.set_hyperedge_weight(self.next_hyperedge, weight)?;
        }
        self.append_vertices(hyperedge.vertices());
        Ok(self)
    }

    fn check_room_for_hyperedge(&self) -> Result<(), HypergraphError> {
        if self.sizing == Sizing::Known && self.next_hyperedge >= self.hyperedge_count {
            return Err(HypergraphError::BuilderMisuse(format!(
                "cannot add hyperedge {}: only {} hyperedges declared",
                self.next_hyperedge + 1,
                self.hyperedge_count
            )));
        }
        Ok(())
    }

    /// Reject the whole hyperedge before anything is written.
    fn check_vertices(&self, vertices: &[u32]) -> Result<(), HypergraphError> {
        let bounded = self.sizing == Sizing::Known;
        match vertices
            .iter()
            .find(|&&v| v == 0 || (bounded && v as usize > self.vertex_count))
        {
            Some(&v) => Err(HypergraphError::vertex_out_of_range(v, self.vertex_count)),
            None => Ok(()),
        }
    }

    fn set_hyperedge_weight(
        &mut self,
        hyperedge: usize,
        weight: i32,
    ) -> Result<(), HypergraphError> {
        let limit = self.weight_limit(self.hyperedge_count);
        let weights = self.hyperedge_weights.get_or_insert_with(Vec::new);
        store_growing(weights, hyperedge, weight, limit, "hyperedge weights")
    }

    /// Push one hyperedge; room was reserved by the caller.
    fn append_vertices(&mut self, vertices: &[u32]) {
        self.hyperedge_indices.push(self.hyperedge_vertices.len());
        for &vertex in vertices {
            self.append_vertex(vertex);
        }
        self.next_hyperedge += 1;
        if self.sizing == Sizing::Unknown {
            self.hyperedge_count = self.next_hyperedge;
        }
    }

    fn append_vertex(&mut self, vertex: u32) {
        debug_assert!(vertex > 0, "vertex ids are 1-based");
        self.hyperedge_vertices.push(vertex - 1);
        if self.sizing == Sizing::Unknown {
            self.vertex_count = self.vertex_count.max(vertex as usize);
        }
    }

    /// Freeze the accumulated arrays into an immutable [`Hypergraph`].
    ///
    /// Hyperedge weights decorate the base hypergraph first and vertex
    /// weights wrap the result, so the header flag sums to `1`, `10` or `11`.
    pub fn build(&mut self) -> Result<Hypergraph, HypergraphError> {
        self.ensure_not_built()?;
        if self.sizing == Sizing::Known && self.next_hyperedge != self.hyperedge_count {
            return Err(HypergraphError::BuilderMisuse(format!(
                "{} hyperedges declared but {} added",
                self.hyperedge_count, self.next_hyperedge
            )));
        }

        // Terminate the last hyperedge and trim everything to its final size.
        ensure_room(&mut self.hyperedge_indices, 1, "hyperedge indices")?;
        if let Some(weights) = self.vertex_weights.as_mut() {
            fit_weights(weights, self.vertex_count, "vertex weights")?;
        }
        if let Some(weights) = self.hyperedge_weights.as_mut() {
            fit_weights(weights, self.hyperedge_count, "hyperedge weights")?;
        }
        self.built = true;
        self.hyperedge_indices.push(self.hyperedge_vertices.len());
        let mut hyperedge_indices = mem::take(&mut self.hyperedge_indices);
        let mut hyperedge_vertices = mem::take(&mut self.hyperedge_vertices);
        hyperedge_indices.shrink_to_fit();
        hyperedge_vertices.shrink_to_fit();

        let incidence = IncidenceStore::from_parts(hyperedge_indices, hyperedge_vertices);
        let mut hypergraph =
            Hypergraph::Unweighted(UnweightedHypergraph::new(self.vertex_count, incidence));
        if let Some(weights) = self.hyperedge_weights.take() {
            hypergraph = hypergraph.with_hyperedge_weights(weights);
        }
        if let Some(weights) = self.vertex_weights.take() {
            hypergraph = hypergraph.with_vertex_weights(weights);
        }
        hypergraph.debug_assert_invariants();

        log::debug!(
            "built hypergraph: {} vertices, {} hyperedges, {} pins, format {}",
            hypergraph.vertex_count(),
            hypergraph.hyperedge_count(),
            hypergraph.incidence().pin_count(),
            hypergraph.format()
        );
        Ok(hypergraph)
    }
}
