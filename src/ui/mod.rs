//! UI layer: the pure widget model for the left pane and the selection
//! state machine that drives panel visibility.

pub mod selection;
pub mod tree_view;
