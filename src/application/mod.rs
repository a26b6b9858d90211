//! Application layer: the pure algorithms behind the tree browser.

pub mod pathtree;
