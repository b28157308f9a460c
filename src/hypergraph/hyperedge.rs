//! Hyperedge value objects.
//!
//! A hyperedge joins an arbitrary number of vertices, identified by their
//! 1-based ids. [`UnweightedHyperedge`] is the plain variant;
//! [`WeightedHyperedge`] attaches a weight to one without consuming it.
//! Their `Display` output is exactly one hMetis hyperedge line.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A hyperedge without weight.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UnweightedHyperedge {
    vertices: Vec<u32>,
}

impl UnweightedHyperedge {
    /// Create a hyperedge joining the given (1-based) vertices.
    pub fn joining<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Number of vertices joined by this hyperedge.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// The joined vertices, in insertion order.
    pub fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    /// Attach a weight, leaving `self` untouched.
    pub fn with_weight(&self, weight: i32) -> WeightedHyperedge {
        WeightedHyperedge::new(self.clone(), weight)
    }
}

impl fmt::Display for UnweightedHyperedge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices.iter().join(" "))
    }
}

/// A hyperedge carrying an integer weight.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedHyperedge {
    hyperedge: UnweightedHyperedge,
    weight: i32,
}

impl WeightedHyperedge {
    pub(crate) fn new(hyperedge: UnweightedHyperedge, weight: i32) -> Self {
        Self { hyperedge, weight }
    }

    pub fn size(&self) -> usize {
        self.hyperedge.size()
    }

    pub fn vertices(&self) -> &[u32] {
        self.hyperedge.vertices()
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// The hyperedge this weight was attached to.
    pub fn unweighted(&self) -> &UnweightedHyperedge {
        &self.hyperedge
    }
}

impl fmt::Display for WeightedHyperedge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hyperedge.size() == 0 {
            write!(f, "{}", self.weight)
        } else {
            write!(f, "{} {}", self.weight, self.hyperedge)
        }
    }
}

/// Either kind of hyperedge, as accepted by the builder and returned by
/// [`Hypergraph::hyperedge`](crate::hypergraph::Hypergraph::hyperedge).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hyperedge {
    Unweighted(UnweightedHyperedge),
    Weighted(WeightedHyperedge),
}

impl Hyperedge {
    pub fn size(&self) -> usize {
        self.vertices().len()
    }

    pub fn vertices(&self) -> &[u32] {
        match self {
            Hyperedge::Unweighted(h) => h.vertices(),
            Hyperedge::Weighted(h) => h.vertices(),
        }
    }

    /// The weight of the hyperedge, `None` for unweighted ones.
    pub fn weight(&self) -> Option<i32> {
        match self {
            Hyperedge::Unweighted(_) => None,
            Hyperedge::Weighted(h) => Some(h.weight()),
        }
    }

    pub fn is_weighted(&self) -> bool {
        matches!(self, Hyperedge::Weighted(_))
    }
}

impl From<UnweightedHyperedge> for Hyperedge {
    fn from(h: UnweightedHyperedge) -> Self {
        Hyperedge::Unweighted(h)
    }
}

impl From<WeightedHyperedge> for Hyperedge {
    fn from(h: WeightedHyperedge) -> Self {
        Hyperedge::Weighted(h)
    }
}

impl fmt::Display for Hyperedge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hyperedge::Unweighted(h) => h.fmt(f),
            Hyperedge::Weighted(h) => h.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unweighted_hyperedge_line() {
        let h = UnweightedHyperedge::joining([1, 7, 5, 6]);
        assert_eq!(h.size(), 4);
        assert_eq!(h.vertices(), &[1, 7, 5, 6]);
        assert_eq!(h.to_string(), "1 7 5 6");
    }

    #[test]
    fn weighting_leaves_source_reusable() {
        let h = UnweightedHyperedge::joining(vec![2, 3, 4]);
        let w = h.with_weight(7);
        let w2 = h.with_weight(9);
        assert_eq!(h.to_string(), "2 3 4");
        assert_eq!(w.to_string(), "7 2 3 4");
        assert_eq!(w2.weight(), 9);
        assert_eq!(w.vertices(), h.vertices());
        assert_eq!(w.unweighted(), &h);
    }

    #[test]
    fn empty_hyperedges_render() {
        let h = UnweightedHyperedge::joining(std::iter::empty());
        assert_eq!(h.to_string(), "");
        assert_eq!(h.with_weight(4).to_string(), "4");
    }

    #[test]
    fn enum_view_reports_weight() {
        let plain: Hyperedge = UnweightedHyperedge::joining([1, 2]).into();
        let weighted: Hyperedge = UnweightedHyperedge::joining([1, 2]).with_weight(0).into();
        assert_eq!(plain.weight(), None);
        assert_eq!(weighted.weight(), Some(0));
        assert!(!plain.is_weighted());
        assert!(weighted.is_weighted());
        assert_eq!(plain.size(), weighted.size());
    }
}
