#![cfg_attr(docsrs, feature(doc_cfg))]
//! # hypergraph-csr
//!
//! hypergraph-csr stores hypergraphs in a compact CSR (compressed sparse row)
//! layout, reads and writes them in the hMetis text format, and hands them to
//! partitioning engines such as KaHyPar without copying.
//!
//! ## Features
//! - Immutable [`Hypergraph`](hypergraph::Hypergraph) with optional vertex and
//!   hyperedge weights layered over shared CSR arrays
//! - Known-size and unknown-size builders
//! - Lossless hMetis reader/writer (flags 0, 1, 10, 11)
//! - Partitioning boundary with lazily derived block membership
//! - Optional native KaHyPar engine (`kahypar-support`)
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! hypergraph-csr = "0.1"
//! # Optional features:
//! # features = ["kahypar-support", "check-invariants"]
//! ```
//!
//! ```
//! use hypergraph_csr::prelude::*;
//!
//! let mut builder = Hypergraph::builder(3, 2);
//! builder
//!     .with_hyperedge(UnweightedHyperedge::joining([1, 2]))?
//!     .with_hyperedge(UnweightedHyperedge::joining([2, 3]).with_weight(5))?;
//! let h = builder.build()?;
//! assert_eq!(h.to_string(), "2 3 1\n0 1 2\n5 2 3\n");
//! assert_eq!(h.hyperedge_vertices(), &[0, 1, 1, 2]);
//! # Ok::<(), HypergraphError>(())
//! ```
//!
//! ## Vertex ids
//! Public APIs use 1-based vertex ids as in hMetis; the CSR arrays store
//! them 0-based, as the engines expect.

pub mod debug_invariants;
pub mod hypergraph;
pub mod hypergraph_error;
pub mod io;
pub mod partitioning;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::hypergraph::{
        HmetisFormat, Hyperedge, Hypergraph, HypergraphBuilder, UnweightedHyperedge,
        WeightedHyperedge,
    };
    pub use crate::hypergraph_error::HypergraphError;
    pub use crate::io::hmetis::{HmetisReader, HmetisWriter};
    pub use crate::io::{HypergraphReader, HypergraphWriter};
    #[cfg(feature = "kahypar-support")]
    pub use crate::partitioning::kahypar::KahyparEngine;
    pub use crate::partitioning::{
        EngineInput, EngineOutput, HypergraphPartition, PartitionContext, PartitionEngine,
        PartitionError, Partitioner,
    };
}
