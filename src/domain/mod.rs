//! Domain types for the diff-tree browser.
//! Defines the per-file change records the rest of the crate is built around.

pub mod change;
pub mod error;

pub use change::*;
pub use error::*;
