//! Errors reported by [`Tree`][crate::Tree].
//!
//! Missing keys are not errors: lookups report them with `None`. The only failures are contract
//! violations by the caller.

use crate::traverse::Order;

/// The error type for tree operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A visitor-based traversal was requested without a visitor.
    #[error("{0} traversal requires a visitor")]
    MissingVisitor(Order),
}
