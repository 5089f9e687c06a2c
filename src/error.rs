//! Errors reported by [`Tree::check_invariants`][crate::Tree::check_invariants].

use thiserror::Error as ThisError;

/// Convenience alias for results carrying an [`InvariantError`].
pub type Result<T, E = InvariantError> = std::result::Result<T, E>;

/// A structural invariant of the tree that did not hold. None of these should ever be observable
/// through the public API; they exist so tests (and debug builds) can say *what* broke.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum InvariantError {
    /// The root node points at a parent.
    #[error("the root node has a parent")]
    RootHasParent,

    /// A child's parent link does not point back at the node holding it.
    #[error("node at depth {depth} does not point back at its parent")]
    ParentMismatch {
        /// Depth of the offending child (the root is at depth 0).
        depth: usize,
    },

    /// The in-order walk produced a key smaller than the one before it.
    #[error("in-order key at position {position} sorts before its predecessor")]
    OutOfOrder {
        /// Zero based position of the offending key in the in-order sequence.
        position: usize,
    },

    /// The recorded length disagrees with the number of reachable nodes.
    #[error("tree records {recorded} nodes but {reachable} are reachable")]
    LenMismatch {
        /// What `Tree::len` reports.
        recorded: usize,
        /// How many nodes a walk from the root found.
        reachable: usize,
    },
}
