//! # Maximum flow through distribution networks
//!
//! Goods travel from a source through terminals, warehouses and stores to a sink, limited by the
//! capacity of every connection. This crate computes the maximum amount that can reach the sink
//! using the algorithm of Edmonds and Karp, and attributes that flow to pairs of terminals and
//! stores.
//!
//! All arithmetic is exact: capacities are integers or rationals, and unbounded capacities are
//! represented explicitly instead of with a large number.
//!
//! ```
//! use logiflow::algorithm::max_flow::FlowAnalysis;
//! use logiflow::data::network::logistics;
//!
//! let network = logistics::network::<i64>().unwrap();
//! let analysis = FlowAnalysis::new(&network).unwrap();
//! assert_eq!(*analysis.max_flow().total(), 115);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
