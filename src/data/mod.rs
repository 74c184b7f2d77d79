//! # Storing of networks in memory
//!
//! This module provides the data structures used to represent networks and numbers. Algorithms
//! may introduce their specific data structures in `algorithm::my_algorithm`.
pub mod linear_algebra;
pub mod network;
pub mod number_types;
