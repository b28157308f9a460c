//! HypergraphError: Unified error type for hypergraph-csr public APIs
//!
//! This error type is used by the builder, the hypergraph views and the
//! hMetis codec to provide non-panicking error handling for all public APIs.

use thiserror::Error;

/// Unified error type for hypergraph-csr operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HypergraphError {
    /// A vertex, hyperedge or block index lies outside its valid domain.
    #[error("{kind} index {index} out of range (valid domain has {len} elements)")]
    IndexOutOfRange {
        /// What was indexed ("vertex", "hyperedge", ...).
        kind: &'static str,
        /// The offending index, as given by the caller.
        index: usize,
        /// Size of the valid domain.
        len: usize,
    },
    /// A line of hMetis text does not have the expected shape.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number of the offending line.
        line: usize,
        reason: String,
    },
    /// The input ended before all declared lines were read.
    #[error("premature end of input at line {line}: expected {expected}")]
    PrematureEndOfInput {
        /// 1-based number of the line that was expected.
        line: usize,
        expected: &'static str,
    },
    /// The builder was used outside of its contract.
    #[error("builder misuse: {0}")]
    BuilderMisuse(String),
    /// An array could not grow to the requested length.
    #[error("cannot grow {what} to {requested} entries")]
    CapacityExceeded {
        /// Which array was growing.
        what: &'static str,
        /// Length that was asked for; `usize::MAX` when it overflowed.
        requested: usize,
    },
    /// Reading or writing the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for HypergraphError {
    fn from(err: std::io::Error) -> Self {
        HypergraphError::Io(err.to_string())
    }
}

impl HypergraphError {
    pub(crate) fn vertex_out_of_range(vertex: u32, len: usize) -> Self {
        HypergraphError::IndexOutOfRange {
            kind: "vertex",
            index: vertex as usize,
            len,
        }
    }

    pub(crate) fn hyperedge_out_of_range(index: usize, len: usize) -> Self {
        HypergraphError::IndexOutOfRange {
            kind: "hyperedge",
            index,
            len,
        }
    }

    pub(crate) fn capacity_exceeded(what: &'static str, requested: Option<usize>) -> Self {
        HypergraphError::CapacityExceeded {
            what,
            requested: requested.unwrap_or(usize::MAX),
        }
    }

    /// Attach a line number to a builder error raised while parsing.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            err @ (HypergraphError::MalformedInput { .. }
            | HypergraphError::PrematureEndOfInput { .. }
            | HypergraphError::Io(_)) => err,
            other => HypergraphError::MalformedInput {
                line,
                reason: other.to_string(),
            },
        }
    }
}
