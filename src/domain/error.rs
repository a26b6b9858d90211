//! Domain error types for the diff-tree browser.
//!
//! These represent precondition violations in the pure path-tree algorithms.
//! They are fatal for the construction attempt that hit them; missing optional
//! context (no marker, no panels, no records) is not an error and never
//! reaches these types.

use thiserror::Error;

/// Precondition violations while folding a path list into a tree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathTreeError {
    #[error("cannot build a tree from an empty path list")]
    EmptyInput,

    #[error("path {path:?} does not start with prefix {prefix:?}")]
    PrefixMismatch { path: String, prefix: String },
}
