//! Infrastructure layer (adapters/contracts).
//!
//! This module holds the seam to the concrete page being augmented: raw-entry
//! extraction and the `HostPage` trait a real adapter implements.

pub mod extract;
pub mod host;
