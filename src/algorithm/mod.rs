//! # Algorithms
pub mod max_flow;
pub mod utilities;
