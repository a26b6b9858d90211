//! Collapsible file-tree browser for hosted diff views.
//!
//! The host page presents a diff as a flat list of per-file panels. This crate
//! folds the changed-file paths into a folder hierarchy, renders it as a
//! left-pane tree widget model, and keeps a single "currently shown file"
//! selection in sync with the page's navigation fragment. Everything that
//! touches a real page goes through the [`infra::host::HostPage`] trait, so the
//! core stays testable without any rendering surface.

pub mod application;
pub mod domain;
pub mod infra;
pub mod instance;
pub mod ui;

pub use instance::DiffTreeInstance;
