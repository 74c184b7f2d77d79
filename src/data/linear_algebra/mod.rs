//! # Linear algebra primitives
//!
//! Networks in this crate are small and dense enough to be stored as square matrices indexed by
//! node.
pub mod matrix;
