//! Invariant checks for frozen hypergraph data.
//!
//! A built [`Hypergraph`](crate::hypergraph::Hypergraph) must keep its CSR
//! offsets monotone and terminated by the pin count, every stored vertex
//! below the vertex count, every weight array as long as the dimension it
//! weights, and a format flag of 0, 1, 10 or 11. Builders and deserializers
//! call [`DebugInvariants::validate_invariants`]; the panicking variant only
//! runs in debug builds or with the `check-invariants` feature.

use crate::hypergraph_error::HypergraphError;

/// Structures that can check their own CSR and weight invariants.
pub trait DebugInvariants {
    /// Panic on the first broken invariant, when checking is compiled in.
    fn debug_assert_invariants(&self);
    /// First broken invariant, as the error a caller would have received.
    fn validate_invariants(&self) -> Result<(), HypergraphError>;
}

/// Panic with `[invariants] <ctx>: <error>` when `$expr` is an `Err` and
/// invariant checking is compiled in; otherwise `$expr` is not evaluated.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
